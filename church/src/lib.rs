//! Untyped lambda calculus embedded as closures: Church booleans, numerals,
//! pairs and lists, plus recursion through the `U` and `Y` combinators.

pub trait Decoder {
	type Output;

	fn decode(value: &Value) -> Result<Self::Output, Fault>;

	fn decode_each<'a>(values: impl IntoIterator<Item = &'a Value>) -> Result<Vec<Self::Output>, Fault> {
		values.into_iter().map(Self::decode).collect()
	}
}

mod value;
pub use value::{Value, Func, Thunk, Outcome, Fault};

mod combinator;
pub use combinator::{identity, compose, self_apply, ID, U, INC, VOID};

mod boolean;
pub use boolean::{TRUE, FALSE, IF, boolify};

mod numeral;
pub use numeral::{numeral, natify, ONE, TWO, THREE, FOUR, EIGHT, SUCC, SUM, MULT};

mod pair;
pub use pair::{PAIR, LEFT, RIGHT};

mod list;
pub use list::{NIL, CONS, NILP, HEAD, TAIL, list_of, listify};

mod fixpoint;
pub use fixpoint::Y;

mod decode;
pub use decode::{Natify, Boolify, Listify};
