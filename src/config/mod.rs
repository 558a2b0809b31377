//! Configuration of a [Session](crate::session::Session) and of the binary.

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// The most variables a formula may have to be added to a session, if limited.
	///
	/// Each further variable doubles the assignments to enumerate.
	pub variable_limit: Option<usize>,

	/// Whether to show the full truth table of each formula.
	pub show_table: bool,

	/// Whether to check the formulas for joint satisfiability.
	pub joint: bool,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			variable_limit: Some(defaults::VARIABLE_LIMIT),
			show_table: defaults::SHOW_TABLE,
			joint: defaults::JOINT,
		}
	}
}

impl Config {
	/// Sets the variable limit, with a limit of zero meaning no limit.
	pub fn with_variable_limit(mut self, limit: usize) -> Self {
		self.variable_limit = match limit {
			0 => None,
			limit => Some(limit),
		};
		self
	}
}
