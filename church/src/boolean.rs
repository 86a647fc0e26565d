use super::{Decoder, Boolify, Fault, Value};

use once_cell::sync::Lazy;

/// `t -> f -> t()`
pub static TRUE: Lazy<Value> = Lazy::new(|| Value::func(|t| Ok(Value::func(move |_f| t.force()))));

/// `t -> f -> f()`
pub static FALSE: Lazy<Value> = Lazy::new(|| Value::func(|_t| Ok(Value::func(|f| f.force()))));

/// `cond -> t -> f -> cond(t)(f)`
pub static IF: Lazy<Value> = Lazy::new(|| Value::func(|cond| Ok(Value::func(move |t| {
	let cond = cond.clone();
	Ok(Value::func(move |f| cond.apply(t.clone())?.apply(f)))
}))));

pub fn boolify(b: &Value) -> Result<bool, Fault> {
	Boolify::decode(b)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::VOID;
	use pretty_assertions::assert_eq;

	fn constant(s: &'static str) -> Value {
		Value::thunk(move || Ok(Value::text(s)))
	}

	#[test]
	fn if_selects_the_true_branch() {
		assert_eq!(IF.apply_all([TRUE.clone(), constant("a"), constant("b")]), Ok(Value::text("a")));
	}

	#[test]
	fn if_selects_the_false_branch() {
		assert_eq!(IF.apply_all([FALSE.clone(), constant("a"), constant("b")]), Ok(Value::text("b")));
	}

	#[test]
	fn unselected_branch_is_never_forced() {
		assert_eq!(IF.apply_all([TRUE.clone(), constant("a"), VOID]), Ok(Value::text("a")));
		assert_eq!(IF.apply_all([FALSE.clone(), VOID, constant("b")]), Ok(Value::text("b")));
	}

	#[test]
	fn selected_branch_faults_propagate() {
		assert_eq!(IF.apply_all([TRUE.clone(), VOID, constant("b")]), Err(Fault::VoidInvoked));
	}

	#[test]
	fn non_callable_condition_faults_only_at_the_last_application() {
		let pending = IF.apply_all([Value::Int(3), constant("a")]);
		assert!(pending.is_ok());
		assert_eq!(
			pending.unwrap().apply(constant("b")),
			Err(Fault::NotCallable { kind: "int", arity: 1 }),
		);
	}

	#[test]
	fn raw_values_are_not_thunks() {
		assert_eq!(
			TRUE.apply_all([Value::text("a"), Value::text("b")]),
			Err(Fault::NotCallable { kind: "text", arity: 0 }),
		);
	}

	#[test]
	fn booleans_decode_to_host_bools() {
		assert_eq!(boolify(&TRUE), Ok(true));
		assert_eq!(boolify(&FALSE), Ok(false));
	}
}
