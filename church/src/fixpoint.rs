use super::{self_apply, Value};

use once_cell::sync::Lazy;

/// Fixed-point combinator: `Y(F)(x)` behaves as `F(Y(F))(x)`.
///
/// Built as `U(h -> F -> F(x -> h(h)(F)(x)))`. The self-application `h(h)`
/// sits behind `x -> ...(x)` so it is only unfolded when the recursive
/// function is actually called; without that wrapper eager application
/// would unfold forever before returning.
///
/// `F` must not call its argument before returning the function body.
pub static Y: Lazy<Value> = Lazy::new(|| {
	let half = Value::func(|h| Ok(Value::func(move |generator| {
		let (h, inner) = (h.clone(), generator.clone());
		generator.apply(Value::func(move |x| {
			self_apply(h.clone())?.apply(inner.clone())?.apply(x)
		}))
	})));
	Value::func(move |generator| self_apply(half.clone())?.apply(generator))
});

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{natify, numeral, Fault, HEAD, IF, NILP, SUCC, TAIL, list_of};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn factorial() -> Value {
		Y.apply(Value::func(|this| Ok(Value::func(move |n| {
			let n = n.as_int()?;
			if n <= 0 { Ok(Value::Int(1)) }
			else { Value::checked_int(n.checked_mul(this.apply(Value::Int(n - 1))?.as_int()?)) }
		})))).unwrap()
	}

	#[rstest]
	#[case(-3, 1)]
	#[case(0, 1)]
	#[case(1, 1)]
	#[case(5, 120)]
	#[case(10, 3_628_800)]
	fn factorial_recurses_through_its_argument(#[case] n: i64, #[case] expected: i64) {
		assert_eq!(factorial().apply(Value::Int(n)), Ok(Value::Int(expected)));
	}

	#[test]
	fn factorial_overflow_is_a_fault() {
		assert_eq!(factorial().apply(Value::Int(20)), Ok(Value::Int(2_432_902_008_176_640_000)));
		assert_eq!(factorial().apply(Value::Int(21)), Err(Fault::Overflow));
	}

	#[test]
	fn fixed_point_unfolds_once_per_call() {
		let generator = Value::func(|this| Ok(Value::func(move |n| {
			let n = n.as_int()?;
			if n == 0 { Ok(Value::text("done")) } else { this.apply(Value::Int(n - 1)) }
		})));
		let f = Y.apply(generator.clone()).unwrap();
		let unfolded = generator.apply(f.clone()).unwrap();
		assert_eq!(f.apply(Value::Int(4)), unfolded.apply(Value::Int(4)));
	}

	#[test]
	fn length_of_an_encoded_list_uses_only_encodings() {
		// length = Y(this -> l -> IF(NILP(l))(() -> 0)(() -> SUCC(this(TAIL(l)))))
		let length = Y.apply(Value::func(|this| Ok(Value::func(move |list| {
			let (this, rest) = (this.clone(), list.clone());
			IF.apply_all([
				NILP.apply(list)?,
				Value::thunk(|| Ok(numeral(0))),
				Value::thunk(move || SUCC.apply(this.apply(TAIL.apply(rest.clone())?)?)),
			])
		})))).unwrap();
		let list = list_of([Value::Int(7), Value::Int(8), Value::Int(9)]).unwrap();
		assert_eq!(natify(&length.apply(list).unwrap()), Ok(3));
	}

	#[test]
	fn faults_inside_the_body_propagate() {
		let head_of_everything = Y.apply(Value::func(|_this| Ok(Value::func(|list| HEAD.apply(list))))).unwrap();
		assert_eq!(head_of_everything.apply(crate::NIL.clone()), Err(Fault::VoidInvoked));
	}
}
