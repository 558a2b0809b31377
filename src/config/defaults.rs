//! Default values for a [Config](crate::config::Config).

/// About a million assignments.
pub const VARIABLE_LIMIT: usize = 20;

pub const SHOW_TABLE: bool = false;

pub const JOINT: bool = false;
