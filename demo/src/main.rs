use anyhow::Result;
use church::*;
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum Section {
	Numerals,
	Arithmetic,
	Booleans,
	Pairs,
	Lists,
	Recursion,
}

/// Prints sample evaluations of Church encodings
#[derive(Parser, Debug)]
#[command(name = "demo", version)]
struct Options {
	/// Numerals to apply to increment and doubling
	#[arg(long, value_delimiter = ',', default_values_t = vec![0, 1, 2, 3, 7])]
	samples: Vec<u64>,

	/// Argument passed to the Y-combinator factorial
	#[arg(long, default_value_t = 5)]
	factorial: i64,

	/// Only print these sections (repeatable); prints everything by default
	#[arg(long, value_enum)]
	section: Vec<Section>,
}

impl Options {
	fn shows(&self, section: Section) -> bool {
		self.section.is_empty() || self.section.contains(&section)
	}
}

fn double() -> Value {
	Value::func(|x| Value::checked_int(x.as_int()?.checked_mul(2)))
}

fn numerals(samples: &[u64]) -> Result<()> {
	println!("> Church numerals.");
	println!(">");
	for &n in samples {
		println!("> numeral({})(x -> x+1) (id: 0): {}", n, numeral(n).apply_all([INC.clone(), Value::Int(0)])?);
	}
	println!(">");
	for &n in samples {
		println!("> numeral({})(x -> 2*x) (id: 1): {}", n, numeral(n).apply_all([double(), Value::Int(1)])?);
	}
	println!(">");
	println!("> using `numeral(x)`");
	println!("> natify(numeral(0)) = {}", natify(&numeral(0))?);
	println!("> using `compose(f, g)`");
	for (n, literal) in [(1, &ONE), (2, &TWO), (3, &THREE)] {
		println!("> natify(numeral({})) = {}", n, natify(literal)?);
	}
	println!("> using `numeral(x)`");
	for (n, literal) in [(4, &FOUR), (8, &EIGHT)] {
		println!("> natify(numeral({})) = {}", n, natify(literal)?);
	}
	println!(">");
	Ok(())
}

fn arithmetic() -> Result<()> {
	println!("> Successors (SUCC)");
	for (n, literal) in [(1, &ONE), (2, &TWO), (4, &FOUR), (8, &EIGHT)] {
		println!("> SUCC({}): {}", n, natify(&SUCC.apply((*literal).clone())?)?);
	}
	println!(">");
	println!("> Sum.");
	println!("> SUM(2)(8): {}", natify(&SUM.apply_all([TWO.clone(), EIGHT.clone()])?)?);
	println!(">");
	println!("> Multiplication.");
	println!("> MULT(2)(8): {}", natify(&MULT.apply_all([TWO.clone(), EIGHT.clone()])?)?);
	println!(">");
	Ok(())
}

fn booleans() -> Result<()> {
	println!("> Booleans.");
	for (name, cond) in [("TRUE", &TRUE), ("FALSE", &FALSE)] {
		let picked = IF.apply_all([
			(*cond).clone(),
			Value::thunk(|| Ok(Value::text("yes"))),
			Value::thunk(|| Ok(Value::text("no"))),
		])?;
		println!("> IF({})(yes)(no): {}", name, picked);
	}
	println!(">");
	Ok(())
}

fn pairs() -> Result<()> {
	println!("> Pairs.");
	let pair = PAIR.apply_all([Value::Int(1), Value::text("two")])?;
	println!("> LEFT(PAIR(1)(two)): {}", LEFT.apply(pair.clone())?);
	println!("> RIGHT(PAIR(1)(two)): {}", RIGHT.apply(pair)?);
	println!(">");
	Ok(())
}

fn lists() -> Result<()> {
	println!("> Lists.");
	let list = list_of([Value::Int(1), Value::Int(2), Value::Int(3)])?;
	println!("> NILP(NIL): {}", boolify(&NILP.apply(NIL.clone())?)?);
	println!("> NILP([1, 2, 3]): {}", boolify(&NILP.apply(list.clone())?)?);
	println!("> HEAD([1, 2, 3]): {}", HEAD.apply(list.clone())?);
	println!("> HEAD(TAIL([1, 2, 3])): {}", HEAD.apply(TAIL.apply(list.clone())?)?);
	let items: Vec<String> = listify(&list)?.iter().map(Value::to_string).collect();
	println!("> listify([1, 2, 3]): [{}]", items.join(", "));
	match HEAD.apply(NIL.clone()) {
		Ok(value) => println!("> HEAD(NIL): {}", value),
		Err(fault) => println!("> HEAD(NIL): {}", fault),
	}
	println!(">");
	Ok(())
}

fn recursion(n: i64) -> Result<()> {
	let factorial = Y.apply(Value::func(|this| Ok(Value::func(move |n| {
		let n = n.as_int()?;
		if n <= 0 { Ok(Value::Int(1)) }
		else { Value::checked_int(n.checked_mul(this.apply(Value::Int(n - 1))?.as_int()?)) }
	}))))?;
	println!("> Y(factorial)({}): {}", n, factorial.apply(Value::Int(n))?);
	Ok(())
}

fn main() -> Result<()> {
	env_logger::init();
	let options = Options::parse();
	log::debug!("{:?}", options);

	if options.shows(Section::Numerals) { numerals(&options.samples)?; }
	if options.shows(Section::Arithmetic) { arithmetic()?; }
	if options.shows(Section::Booleans) { booleans()?; }
	if options.shows(Section::Pairs) { pairs()?; }
	if options.shows(Section::Lists) { lists()?; }
	if options.shows(Section::Recursion) { recursion(options.factorial)?; }

	Ok(())
}
