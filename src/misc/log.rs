/*!
Items related to [logging](log).

Calls to the log macro are made throughout the library, at `trace` level for per-lexeme and per-assignment detail and `debug` for per-formula results.

No log implementation is provided by the library, the binary installs `env_logger`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
	/// Logs related to [scanning](crate::scanner)
	pub const SCANNER: &str = "scanner";

	/// Logs related to [parsing](crate::parser)
	pub const PARSER: &str = "parser";

	/// Logs related to [classification](crate::truth_table)
	pub const CLASSIFY: &str = "classify";

	/// Logs related to [joint satisfiability](crate::joint)
	pub const JOINT: &str = "joint";

	/// Logs related to a [session](crate::session)
	pub const SESSION: &str = "session";
}
