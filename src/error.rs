// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The few ways configuring a logger can go wrong. Writing a line never fails,
// so nothing on the logging path returns these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoggerError {
	/// A logger needs a non-blank name to identify its output.
	#[error("logger name must not be empty")]
	EmptyName,

	#[error("Attribute '{attribute}' of '{owner}' is immutable.")]
	ImmutableAttribute {
		attribute: &'static str,
		owner: &'static str,
	},

	#[error("unknown level: {0}")]
	UnknownLevel(String),

	#[error("unknown color: {0}")]
	UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, LoggerError>;
