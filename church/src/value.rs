use std::{
	fmt::{self, Debug, Display},
	sync::Arc,
};
use thiserror::Error;

pub type Outcome = Result<Value, Fault>;

pub type Func = Arc<dyn Fn(Value) -> Outcome + Send + Sync>;

pub type Thunk = Arc<dyn Fn() -> Outcome + Send + Sync>;

/// Failures raised while applying encoded values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
	/// The placeholder used for impossible branches was reached.
	#[error("cannot invoke VOID")]
	VoidInvoked,

	#[error("{kind} is not callable with {arity} argument(s)")]
	NotCallable {
		kind: &'static str,
		arity: usize,
	},

	#[error("expected an integer, got {kind}")]
	NotInteger {
		kind: &'static str,
	},

	#[error("decoded {0}, which is not a natural number")]
	NotNatural(i64),

	#[error("integer overflow")]
	Overflow,
}

/// Everything the lambda world can hold. Encodings are `Func`s; the other
/// variants exist so host data can be threaded through them.
#[derive(Clone)]
pub enum Value {
	Int(i64),
	Text(Arc<str>),
	Func(Func),
	Thunk(Thunk),
	Void,
}

impl Value {
	pub fn func(f: impl Fn(Value) -> Outcome + Send + Sync + 'static) -> Value {
		Value::Func(Arc::new(f))
	}

	pub fn thunk(f: impl Fn() -> Outcome + Send + Sync + 'static) -> Value {
		Value::Thunk(Arc::new(f))
	}

	pub fn text(s: impl Into<Arc<str>>) -> Value {
		Value::Text(s.into())
	}

	pub fn kind(&self) -> &'static str {
		match self {
			Value::Int(_) => "int",
			Value::Text(_) => "text",
			Value::Func(_) => "function",
			Value::Thunk(_) => "thunk",
			Value::Void => "void",
		}
	}

	/// Calls a unary function with `arg`.
	pub fn apply(&self, arg: Value) -> Outcome {
		match self {
			Value::Func(f) => f(arg),
			Value::Void => Err(Fault::VoidInvoked),
			_ => Err(Fault::NotCallable { kind: self.kind(), arity: 1 }),
		}
	}

	/// Curried application: `f.apply_all([a, b])` is `f(a)(b)`.
	pub fn apply_all(&self, args: impl IntoIterator<Item = Value>) -> Outcome {
		args.into_iter().try_fold(self.clone(), |acc, arg| acc.apply(arg))
	}

	/// Runs a thunk.
	pub fn force(&self) -> Outcome {
		match self {
			Value::Thunk(t) => t(),
			Value::Void => Err(Fault::VoidInvoked),
			_ => Err(Fault::NotCallable { kind: self.kind(), arity: 0 }),
		}
	}

	/// Wraps a checked host computation, turning `None` into `Fault::Overflow`.
	pub fn checked_int(n: Option<i64>) -> Outcome {
		n.map(Value::Int).ok_or(Fault::Overflow)
	}

	pub fn as_int(&self) -> Result<i64, Fault> {
		match self {
			Value::Int(n) => Ok(*n),
			_ => Err(Fault::NotInteger { kind: self.kind() }),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Value) -> bool {
		match (self, other) {
			(Value::Int(a), Value::Int(b)) => a == b,
			(Value::Text(a), Value::Text(b)) => a == b,
			(Value::Func(a), Value::Func(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
			(Value::Thunk(a), Value::Thunk(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
			(Value::Void, Value::Void) => true,
			_ => false,
		}
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Value { Value::Int(n) }
}

impl From<&str> for Value {
	fn from(s: &str) -> Value { Value::text(s) }
}

impl Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Value::Int(n) => write!(f, "{}", n),
			Value::Text(s) => write!(f, "{}", s),
			Value::Func(_) => write!(f, "<function>"),
			Value::Thunk(_) => write!(f, "<thunk>"),
			Value::Void => write!(f, "<void>"),
		}
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Value::Text(s) => write!(f, "{:?}", s),
			_ => Display::fmt(self, f),
		}
	}
}
