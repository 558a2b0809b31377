use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::{err::ParseError, parser, scanner};

/// A propositional formula, with variables given by their index in some variable table.
///
/// Methods recurse once per level of nesting, and the parser bounds that nesting by [NESTING_LIMIT](crate::parser::NESTING_LIMIT).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
	True,
	False,
	Not(Box<Prop>),
	And(Box<Prop>, Box<Prop>),
	Or(Box<Prop>, Box<Prop>),
	Implies(Box<Prop>, Box<Prop>),
	Iff(Box<Prop>, Box<Prop>),
	Var(usize),
}

impl Prop {
	/// The value of the formula when the variable at index `i` takes the value `assignment[i]`.
	///
	/// Panics if some variable of the formula is outside the assignment.
	pub fn evaluate(&self, assignment: &[bool]) -> bool {
		match self {
			Prop::True => true,
			Prop::False => false,
			Prop::Not(a) => !a.evaluate(assignment),
			Prop::And(a, b) => a.evaluate(assignment) && b.evaluate(assignment),
			Prop::Or(a, b) => a.evaluate(assignment) || b.evaluate(assignment),
			Prop::Implies(a, b) => !a.evaluate(assignment) || b.evaluate(assignment),
			Prop::Iff(a, b) => a.evaluate(assignment) == b.evaluate(assignment),
			Prop::Var(index) => assignment[*index],
		}
	}

	/// A [Display] of the formula, with each variable named by `variables`.
	///
	/// Every binary connective is parenthesised, so the display is unambiguous.
	pub fn display<'a>(&'a self, variables: &'a [String]) -> PropDisplay<'a> {
		PropDisplay {
			prop: self,
			variables,
		}
	}

	pub fn format(&self, variables: &[String]) -> String {
		self.display(variables).to_string()
	}

	/// Each distinct subformula other than a variable, in breadth-first order from the formula itself.
	pub fn subexpressions(&self) -> Vec<&Prop> {
		let mut found: Vec<&Prop> = Vec::new();
		let mut seen: HashSet<&Prop> = HashSet::new();
		let mut queue: VecDeque<&Prop> = VecDeque::from([self]);

		while let Some(prop) = queue.pop_front() {
			match prop {
				Prop::Var(_) => continue,
				Prop::True | Prop::False => {}
				Prop::Not(a) => queue.push_back(a),
				Prop::And(a, b) | Prop::Or(a, b) | Prop::Implies(a, b) | Prop::Iff(a, b) => {
					queue.push_back(a);
					queue.push_back(b);
				}
			}
			if seen.insert(prop) {
				found.push(prop);
			}
		}
		found
	}
}

pub struct PropDisplay<'a> {
	prop: &'a Prop,
	variables: &'a [String],
}

impl PropDisplay<'_> {
	fn binary(&self, f: &mut fmt::Formatter<'_>, a: &Prop, glyph: &str, b: &Prop) -> fmt::Result {
		write!(
			f,
			"({} {glyph} {})",
			a.display(self.variables),
			b.display(self.variables)
		)
	}
}

impl fmt::Display for PropDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.prop {
			Prop::True => f.write_str("⊤"),
			Prop::False => f.write_str("⊥"),
			Prop::Not(a) => write!(f, "¬{}", a.display(self.variables)),
			Prop::And(a, b) => self.binary(f, a, "∧", b),
			Prop::Or(a, b) => self.binary(f, a, "∨", b),
			Prop::Implies(a, b) => self.binary(f, a, "→", b),
			Prop::Iff(a, b) => self.binary(f, a, "↔", b),
			Prop::Var(index) => f.write_str(&self.variables[*index]),
		}
	}
}

/// A successfully read formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
	/// The text the formula was read from.
	pub source: String,
	/// The formula written with `¬ ∧ ∨ → ↔`, fully parenthesised.
	pub formatted: String,
	pub root: Prop,
	/// Names of the variables, sorted, with each [Prop::Var] an index to this table.
	pub variables: Vec<String>,
}

impl Formula {
	pub fn parse(source: &str) -> Result<Formula, ParseError> {
		let scan = scanner::scan(source)?;
		let parsed = parser::parse(scan)?;
		let formatted = parsed.root.format(&parsed.variables);
		Ok(Formula {
			source: source.to_owned(),
			formatted,
			root: parsed.root,
			variables: parsed.variables,
		})
	}

	pub fn variable_count(&self) -> usize {
		self.variables.len()
	}

	pub fn evaluate(&self, assignment: &[bool]) -> bool {
		self.root.evaluate(assignment)
	}
}

impl FromStr for Formula {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Formula::parse(s)
	}
}

impl fmt::Display for Formula {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.formatted)
	}
}
