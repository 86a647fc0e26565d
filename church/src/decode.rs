use super::{Decoder, Fault, Value, HEAD, INC, NILP, TAIL};

use im::Vector;

pub enum Natify { }

impl Decoder for Natify {
	type Output = u64;

	fn decode(numeral: &Value) -> Result<u64, Fault> {
		let count = numeral.apply_all([INC.clone(), Value::Int(0)])?.as_int()?;
		log::debug!("natify: {}", count);
		u64::try_from(count).map_err(|_| Fault::NotNatural(count))
	}
}

pub enum Boolify { }

impl Decoder for Boolify {
	type Output = bool;

	fn decode(boolean: &Value) -> Result<bool, Fault> {
		let picked = boolean.apply_all([
			Value::thunk(|| Ok(Value::Int(1))),
			Value::thunk(|| Ok(Value::Int(0))),
		])?;
		log::debug!("boolify: {}", picked);
		Ok(picked.as_int()? != 0)
	}
}

/// Walks a list with `NILP`, `HEAD` and `TAIL`. The walk itself is a loop, so
/// long lists only cost the depth of a single step.
pub enum Listify { }

impl Decoder for Listify {
	type Output = Vector<Value>;

	fn decode(list: &Value) -> Result<Vector<Value>, Fault> {
		let mut items = Vector::new();
		let mut cursor = list.clone();
		while !Boolify::decode(&NILP.apply(cursor.clone())?)? {
			items.push_back(HEAD.apply(cursor.clone())?);
			cursor = TAIL.apply(cursor)?;
		}
		log::debug!("listify: {} item(s)", items.len());
		Ok(items)
	}
}
