use super::{Decoder, Fault, Listify, Value, FALSE, TRUE, VOID};

use im::Vector;
use once_cell::sync::Lazy;

/// `onnil -> onlist -> onnil()`
pub static NIL: Lazy<Value> = Lazy::new(|| Value::func(|onnil| Ok(Value::func(move |_onlist| onnil.force()))));

/// `h -> t -> onnil -> onlist -> onlist(h)(t)`
pub static CONS: Lazy<Value> = Lazy::new(|| Value::func(|head| Ok(Value::func(move |tail| {
	let head = head.clone();
	Ok(Value::func(move |_onnil| {
		let (head, tail) = (head.clone(), tail.clone());
		Ok(Value::func(move |onlist| onlist.apply(head.clone())?.apply(tail.clone())))
	}))
}))));

pub static NILP: Lazy<Value> = Lazy::new(|| Value::func(|list| {
	list.apply(Value::thunk(|| Ok(TRUE.clone())))?
		.apply(Value::func(|_head| Ok(Value::func(|_tail| Ok(FALSE.clone())))))
}));

/// Only defined on `CONS` nodes; `NIL` lands on `VOID` and faults.
pub static HEAD: Lazy<Value> = Lazy::new(|| Value::func(|list| {
	list.apply(VOID)?.apply(Value::func(|head| Ok(Value::func(move |_tail| Ok(head.clone())))))
}));

/// Only defined on `CONS` nodes; `NIL` lands on `VOID` and faults.
pub static TAIL: Lazy<Value> = Lazy::new(|| Value::func(|list| {
	list.apply(VOID)?.apply(Value::func(|_head| Ok(Value::func(Ok))))
}));

/// Builds `CONS(a)(CONS(b)(... NIL))` from host values.
pub fn list_of<I>(items: I) -> Result<Value, Fault>
where
	I: IntoIterator<Item = Value>,
	I::IntoIter: DoubleEndedIterator,
{
	items.into_iter().rev().try_fold(NIL.clone(), |tail, head| CONS.apply_all([head, tail]))
}

pub fn listify(list: &Value) -> Result<Vector<Value>, Fault> {
	Listify::decode(list)
}
