use super::{Value, ID};

use once_cell::sync::Lazy;

/// `a -> b -> sel -> sel(a)(b)`
pub static PAIR: Lazy<Value> = Lazy::new(|| Value::func(|a| Ok(Value::func(move |b| {
	let a = a.clone();
	Ok(Value::func(move |sel| sel.apply(a.clone())?.apply(b.clone())))
}))));

pub static LEFT: Lazy<Value> = Lazy::new(|| Value::func(|pair| {
	pair.apply(Value::func(|a| Ok(Value::func(move |_b| Ok(a.clone())))))
}));

pub static RIGHT: Lazy<Value> = Lazy::new(|| Value::func(|pair| {
	pair.apply(Value::func(|_a| Ok(ID.clone())))
}));
