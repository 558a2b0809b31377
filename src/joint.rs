//! Whether some set of formulas may be true together.
//!
//! The variables of the formulas are merged, in the order each is first seen across the formulas, and every assignment to the merged variables is tried.
//! Each formula is evaluated on its own part of the assignment, found by the position of each of its variables among the merged variables.

use std::fmt;

use crate::{misc::log::targets, prop_tree::Formula, truth_table::assignments};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JointResult {
	/// There were no formulas to check.
	NoFormulas,

	/// Some assignment makes every formula true.
	Satisfiable {
		/// The merged variables, in the order first seen.
		variables: Vec<String>,
		/// The first satisfying assignment to the merged variables.
		witness: Vec<bool>,
	},

	Unsatisfiable,
}

impl JointResult {
	pub fn is_satisfiable(&self) -> bool {
		matches!(self, JointResult::Satisfiable { .. })
	}
}

impl fmt::Display for JointResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			JointResult::NoFormulas => write!(f, "no formulas"),
			JointResult::Satisfiable { .. } => write!(f, "satisfiable"),
			JointResult::Unsatisfiable => write!(f, "unsatisfiable"),
		}
	}
}

/// The variables of each formula, merged in the order first seen.
pub fn merged_variables(formulas: &[Formula]) -> Vec<String> {
	let mut merged: Vec<String> = Vec::new();
	for variable in formulas.iter().flat_map(|formula| formula.variables.iter()) {
		if !merged.contains(variable) {
			merged.push(variable.clone());
		}
	}
	merged
}

/// For each variable of the formula, its position among `merged`.
fn projection(formula: &Formula, merged: &[String]) -> Vec<usize> {
	formula
		.variables
		.iter()
		.map(|variable| {
			merged
				.iter()
				.position(|m| m == variable)
				.expect("variable missing from the merged variables")
		})
		.collect()
}

pub fn joint_satisfiable(formulas: &[Formula]) -> JointResult {
	if formulas.is_empty() {
		return JointResult::NoFormulas;
	}

	let variables = merged_variables(formulas);
	let projections: Vec<Vec<usize>> = formulas
		.iter()
		.map(|formula| projection(formula, &variables))
		.collect();

	log::debug!(
		target: targets::JOINT,
		"Checking {} formulas over {variables:?}",
		formulas.len()
	);

	let mut local: Vec<bool> = Vec::new();
	for assignment in assignments(variables.len()) {
		let satisfied = formulas.iter().zip(&projections).all(|(formula, projection)| {
			local.clear();
			local.extend(projection.iter().map(|&index| assignment[index]));
			formula.evaluate(&local)
		});

		if satisfied {
			log::debug!(target: targets::JOINT, "Satisfied by {assignment:?}");
			return JointResult::Satisfiable {
				variables,
				witness: assignment,
			};
		}
	}

	log::debug!(target: targets::JOINT, "No satisfying assignment");
	JointResult::Unsatisfiable
}
