use super::{compose, Decoder, Fault, Natify, Value};

use once_cell::sync::Lazy;

/// Church numeral for `n`: `f -> z -> f(f(...f(z)...))` with `n` applications.
///
/// Each application rebuilds `numeral(n - 1)`, so the call stack grows linearly in `n`.
pub fn numeral(n: u64) -> Value {
	Value::func(move |f| Ok(Value::func(move |z| {
		if n == 0 { Ok(z) }
		else { f.apply(numeral(n - 1).apply(f.clone())?.apply(z)?) }
	})))
}

pub static ONE: Lazy<Value> = Lazy::new(|| Value::func(Ok));

pub static TWO: Lazy<Value> = Lazy::new(|| Value::func(|f| Ok(compose(f.clone(), f))));

pub static THREE: Lazy<Value> = Lazy::new(|| Value::func(|f| Ok(compose(f.clone(), TWO.apply(f)?))));

pub static FOUR: Lazy<Value> = Lazy::new(|| numeral(4));

pub static EIGHT: Lazy<Value> = Lazy::new(|| numeral(8));

/// `n -> f -> z -> f(n(f)(z))`
pub static SUCC: Lazy<Value> = Lazy::new(|| Value::func(|n| Ok(Value::func(move |f| {
	let n = n.clone();
	Ok(Value::func(move |z| f.apply(n.apply(f.clone())?.apply(z)?)))
}))));

/// `n -> m -> f -> compose(n(f), m(f))`
pub static SUM: Lazy<Value> = Lazy::new(|| Value::func(|n| Ok(Value::func(move |m| {
	let n = n.clone();
	Ok(Value::func(move |f| Ok(compose(n.apply(f.clone())?, m.apply(f)?))))
}))));

/// `n -> m -> compose(n, m)`
pub static MULT: Lazy<Value> = Lazy::new(|| Value::func(|n| Ok(Value::func(move |m| Ok(compose(n.clone(), m))))));

/// Decodes a numeral by counting: `n(INC)(0)`.
pub fn natify(n: &Value) -> Result<u64, Fault> {
	Natify::decode(n)
}
