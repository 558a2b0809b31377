//! Assignments, and the classification of a formula by evaluation under each assignment.

use std::fmt;

use rayon::prelude::*;

use crate::{
	misc::log::targets,
	prop_tree::{Formula, Prop},
};

/// Each assignment to `n` variables, in a fixed order.
///
/// The first variable varies slowest, and `true` precedes `false`.
/// So, for two variables the order is `[T, T]`, `[T, F]`, `[F, T]`, `[F, F]`.
///
/// Panics if there are too many variables to count the assignments.
pub fn assignments(n: usize) -> Assignments {
	assert!(n < usize::BITS as usize, "too many variables to enumerate: {n}");
	Assignments {
		variables: n,
		next: 0,
		total: 1 << n,
	}
}

#[derive(Clone, Debug)]
pub struct Assignments {
	variables: usize,
	next: usize,
	total: usize,
}

impl Assignments {
	/// The assignment at `index` of the enumeration.
	fn nth_assignment(&self, index: usize) -> Vec<bool> {
		let n = self.variables;
		(0..n)
			.map(|j| index % (1 << (n - j)) < (1 << (n - j - 1)))
			.collect()
	}
}

impl Iterator for Assignments {
	type Item = Vec<bool>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.next == self.total {
			return None;
		}
		let assignment = self.nth_assignment(self.next);
		self.next += 1;
		Some(assignment)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.total - self.next;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for Assignments {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
	Tautology,
	Contingency,
	Contradiction,
}

impl fmt::Display for Classification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Classification::Tautology => write!(f, "tautology"),
			Classification::Contingency => write!(f, "contingency"),
			Classification::Contradiction => write!(f, "contradiction"),
		}
	}
}

pub fn classify(formula: &Formula) -> Classification {
	let mut seen_true = false;
	let mut seen_false = false;

	for assignment in assignments(formula.variable_count()) {
		match formula.evaluate(&assignment) {
			true => seen_true = true,
			false => seen_false = true,
		}
		if seen_true && seen_false {
			break;
		}
	}

	let classification = match (seen_true, seen_false) {
		(true, true) => Classification::Contingency,
		(true, false) => Classification::Tautology,
		(false, _) => Classification::Contradiction,
	};
	log::debug!(target: targets::CLASSIFY, "{formula} is a {classification}");
	classification
}

/// Classifies each formula, with formulas classified in parallel.
pub fn classify_all(formulas: &[Formula]) -> Vec<Classification> {
	formulas.par_iter().map(classify).collect()
}

/// A truth table.
///
/// The first columns are the variables of the formula, in order, and the remaining columns each distinct subexpression of the formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
	pub header: Vec<String>,
	pub rows: Vec<Vec<bool>>,
	/// The column of the formula itself, which is the column of a variable if the formula is only a variable.
	pub formula_index: usize,
}

impl TruthTable {
	pub fn formula_column(&self) -> impl Iterator<Item = bool> + '_ {
		self.rows.iter().map(move |row| row[self.formula_index])
	}
}

pub fn full_table(formula: &Formula) -> TruthTable {
	let subexpressions = formula.root.subexpressions();

	let mut header = formula.variables.clone();
	header.extend(
		subexpressions
			.iter()
			.map(|prop| prop.format(&formula.variables)),
	);

	let rows: Vec<Vec<bool>> = assignments(formula.variable_count())
		.map(|mut row| {
			let values: Vec<bool> = subexpressions.iter().map(|prop| prop.evaluate(&row)).collect();
			row.extend(values);
			row
		})
		.collect();

	log::debug!(
		target: targets::CLASSIFY,
		"Table of {formula} with {} columns and {} rows",
		header.len(),
		rows.len()
	);

	let formula_index = match formula.root {
		Prop::Var(index) => index,
		_ => formula.variable_count(),
	};

	TruthTable {
		header,
		rows,
		formula_index,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn formula(text: &str) -> Formula {
		Formula::parse(text).unwrap()
	}

	#[test]
	fn test_assignment_order() {
		let all: Vec<Vec<bool>> = assignments(3).collect();
		assert_eq!(all.len(), 8);
		assert_eq!(all[0], vec![true, true, true]);
		assert_eq!(all[1], vec![true, true, false]);
		assert_eq!(all[2], vec![true, false, true]);
		assert_eq!(all[4], vec![false, true, true]);
		assert_eq!(all[7], vec![false, false, false]);

		for (i, assignment) in all.iter().enumerate() {
			for (j, value) in assignment.iter().enumerate() {
				assert_eq!(*value, (i % (1 << (3 - j))) < (1 << (3 - j - 1)));
			}
		}
	}

	#[test]
	fn test_no_variables() {
		let all: Vec<Vec<bool>> = assignments(0).collect();
		assert_eq!(all, vec![Vec::<bool>::new()]);
	}

	#[test]
	fn test_restartable() {
		let mut first = assignments(2);
		assert_eq!(first.len(), 4);
		first.next();
		assert_eq!(first.len(), 3);
		assert_eq!(assignments(2).collect::<Vec<_>>(), assignments(2).collect::<Vec<_>>());
	}

	#[test]
	fn test_classify() {
		assert_eq!(classify(&formula("p or not p")), Classification::Tautology);
		assert_eq!(classify(&formula("p and not p")), Classification::Contradiction);
		assert_eq!(classify(&formula("p and q")), Classification::Contingency);
		assert_eq!(classify(&formula("T")), Classification::Tautology);
		assert_eq!(classify(&formula("F")), Classification::Contradiction);
		assert_eq!(
			classify(&formula("(p -> q) <-> (~q -> ~p)")),
			Classification::Tautology
		);
	}

	#[test]
	fn test_classify_all() {
		let formulas = vec![formula("p or ~p"), formula("p"), formula("p and ~p")];
		assert_eq!(
			classify_all(&formulas),
			vec![
				Classification::Tautology,
				Classification::Contingency,
				Classification::Contradiction
			]
		);
	}

	#[test]
	fn test_full_table() {
		let table = full_table(&formula("p -> ~q"));
		assert_eq!(table.header, vec!["p", "q", "(p → ¬q)", "¬q"]);
		assert_eq!(
			table.rows,
			vec![
				vec![true, true, false, false],
				vec![true, false, true, true],
				vec![false, true, true, false],
				vec![false, false, true, true],
			]
		);
		assert_eq!(
			table.formula_column().collect::<Vec<_>>(),
			vec![false, true, true, true]
		);
	}

	#[test]
	fn test_full_table_repeated_subexpression() {
		let table = full_table(&formula("(p and q) or ~(p and q)"));
		assert_eq!(
			table.header,
			vec!["p", "q", "((p ∧ q) ∨ ¬(p ∧ q))", "(p ∧ q)", "¬(p ∧ q)"]
		);
		assert!(table.formula_column().all(|value| value));
	}
}
