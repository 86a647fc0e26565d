use super::{Value, Outcome};

use once_cell::sync::Lazy;

pub fn identity(z: Value) -> Value { z }

pub fn compose(f: Value, g: Value) -> Value {
	Value::func(move |x| f.apply(g.apply(x)?))
}

/// Diverges if `f(f)` keeps asking for more self-applications.
pub fn self_apply(f: Value) -> Outcome {
	f.apply(f.clone())
}

pub static ID: Lazy<Value> = Lazy::new(|| Value::func(|z| Ok(identity(z))));

pub static U: Lazy<Value> = Lazy::new(|| Value::func(self_apply));

pub static INC: Lazy<Value> = Lazy::new(|| Value::func(|x| Value::checked_int(x.as_int()?.checked_add(1))));

/// Stand-in for branches that must never run. Forcing or applying it faults.
pub const VOID: Value = Value::Void;
