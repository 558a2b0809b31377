//! An ordered collection of formulas, as kept by whatever presents them.
//!
//! The order of formulas matters only for display.

use crate::{
	config::Config,
	err::{ErrorKind, SessionError},
	joint::{joint_satisfiable, merged_variables, JointResult},
	misc::log::targets,
	prop_tree::Formula,
	truth_table::{self, Classification, TruthTable},
};

#[derive(Debug, Default)]
pub struct Session {
	pub config: Config,
	formulas: Vec<Formula>,
}

impl Session {
	pub fn from_config(config: Config) -> Self {
		Session {
			config,
			formulas: Vec::new(),
		}
	}

	/// Reads a formula and adds it to the session, returning its index.
	///
	/// The formula is not added if it could not be read or has more variables than the configured limit.
	pub fn add(&mut self, source: &str) -> Result<usize, ErrorKind> {
		let formula = Formula::parse(source)?;

		if let Some(limit) = self.config.variable_limit {
			if formula.variable_count() > limit {
				log::info!(
					target: targets::SESSION,
					"Declined {formula} with {} variables",
					formula.variable_count()
				);
				return Err(ErrorKind::from(SessionError::TooManyVariables {
					found: formula.variable_count(),
					limit,
				}));
			}
		}

		log::info!(target: targets::SESSION, "Added {formula}");
		self.formulas.push(formula);
		Ok(self.formulas.len() - 1)
	}

	pub fn remove(&mut self, index: usize) -> Result<Formula, SessionError> {
		if index >= self.formulas.len() {
			return Err(SessionError::NoSuchFormula(index));
		}
		let formula = self.formulas.remove(index);
		log::info!(target: targets::SESSION, "Removed {formula}");
		Ok(formula)
	}

	pub fn get(&self, index: usize) -> Result<&Formula, SessionError> {
		self.formulas.get(index).ok_or(SessionError::NoSuchFormula(index))
	}

	pub fn formulas(&self) -> &[Formula] {
		&self.formulas
	}

	pub fn len(&self) -> usize {
		self.formulas.len()
	}

	pub fn is_empty(&self) -> bool {
		self.formulas.is_empty()
	}

	pub fn classify(&self, index: usize) -> Result<Classification, SessionError> {
		Ok(truth_table::classify(self.get(index)?))
	}

	/// The classification of each formula, in order.
	pub fn classify_all(&self) -> Vec<Classification> {
		truth_table::classify_all(&self.formulas)
	}

	pub fn table(&self, index: usize) -> Result<TruthTable, SessionError> {
		Ok(truth_table::full_table(self.get(index)?))
	}

	/// Whether the formulas of the session may be true together.
	///
	/// The variable limit applies to the variables of all formulas together.
	pub fn joint(&self) -> Result<JointResult, SessionError> {
		if let Some(limit) = self.config.variable_limit {
			let found = merged_variables(&self.formulas).len();
			if found > limit {
				log::info!(
					target: targets::SESSION,
					"Declined a joint check over {found} variables"
				);
				return Err(SessionError::TooManyVariables { found, limit });
			}
		}
		Ok(joint_satisfiable(&self.formulas))
	}
}
