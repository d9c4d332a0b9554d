// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Severity levels with their numeric rank, display name and default color.
// Ordering always goes through the rank, never through declaration order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use colored::Color;

use crate::error::LoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	Silent,
	Debug,
	#[default]
	Info,
	Warning,
	Error,
	Critical,
}

impl Level {
	pub const ALL: [Level; 6] = [
		Level::Silent,
		Level::Debug,
		Level::Info,
		Level::Warning,
		Level::Error,
		Level::Critical,
	];

	pub const fn rank(self) -> u8 {
		match self {
			Level::Silent => 0,
			Level::Debug => 10,
			Level::Info => 20,
			Level::Warning => 30,
			Level::Error => 40,
			Level::Critical => 50,
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Level::Silent => "SILENT",
			Level::Debug => "DEBUG",
			Level::Info => "INFO",
			Level::Warning => "WARNING",
			Level::Error => "ERROR",
			Level::Critical => "CRITICAL",
		}
	}

	/// Built-in palette. `None` leaves the line uncolored.
	pub const fn default_color(self) -> Option<Color> {
		match self {
			Level::Silent => None,
			Level::Debug => Some(Color::BrightBlue),
			Level::Info => Some(Color::BrightGreen),
			Level::Warning => Some(Color::BrightYellow),
			Level::Error => Some(Color::BrightRed),
			Level::Critical => Some(Color::BrightMagenta),
		}
	}

	pub fn from_rank(rank: u8) -> Option<Level> {
		Level::ALL.into_iter().find(|level| level.rank() == rank)
	}
}

impl Ord for Level {
	fn cmp(&self, other: &Self) -> Ordering {
		self.rank().cmp(&other.rank())
	}
}

impl PartialOrd for Level {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Accepts a level name in any case (`"warning"`, `"WARN"`) or its rank (`"30"`).
impl FromStr for Level {
	type Err = LoggerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if let Ok(rank) = trimmed.parse::<u8>() {
			return Level::from_rank(rank).ok_or_else(|| LoggerError::UnknownLevel(s.to_string()));
		}

		match trimmed.to_ascii_uppercase().as_str() {
			"SILENT" => Ok(Level::Silent),
			"DEBUG" => Ok(Level::Debug),
			"INFO" => Ok(Level::Info),
			"WARNING" | "WARN" => Ok(Level::Warning),
			"ERROR" => Ok(Level::Error),
			"CRITICAL" => Ok(Level::Critical),
			_ => Err(LoggerError::UnknownLevel(s.to_string())),
		}
	}
}

/// Parses a color name understood by `colored` (`"red"`, `"bright cyan"`, ...).
pub fn parse_color(name: &str) -> Result<Color, LoggerError> {
	name.trim()
		.parse::<Color>()
		.map_err(|_| LoggerError::UnknownColor(name.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ranks_are_strictly_increasing() {
		let ranks: Vec<u8> = Level::ALL.iter().map(|l| l.rank()).collect();
		assert_eq!(ranks, vec![0, 10, 20, 30, 40, 50]);
		for pair in Level::ALL.windows(2) {
			assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
		}
	}

	#[test]
	fn ordering_uses_rank() {
		assert!(Level::Silent < Level::Debug);
		assert!(Level::Critical > Level::Error);
		assert_eq!(Level::Warning.max(Level::Info), Level::Warning);
		assert_eq!(Level::ALL.iter().max(), Some(&Level::Critical));
	}

	#[test]
	fn parses_names_and_ranks() {
		assert_eq!("warning".parse::<Level>(), Ok(Level::Warning));
		assert_eq!("WARN".parse::<Level>(), Ok(Level::Warning));
		assert_eq!(" Critical ".parse::<Level>(), Ok(Level::Critical));
		assert_eq!("10".parse::<Level>(), Ok(Level::Debug));
		assert_eq!(
			"15".parse::<Level>(),
			Err(LoggerError::UnknownLevel("15".to_string()))
		);
		assert!("verbose".parse::<Level>().is_err());
	}

	#[test]
	fn silent_has_no_default_color() {
		assert_eq!(Level::Silent.default_color(), None);
		assert_eq!(Level::Warning.default_color(), Some(Color::BrightYellow));
	}

	#[test]
	fn parses_color_names() {
		assert_eq!(parse_color("red"), Ok(Color::Red));
		assert_eq!(parse_color("bright cyan"), Ok(Color::BrightCyan));
		assert_eq!(
			parse_color("chartreuse"),
			Err(LoggerError::UnknownColor("chartreuse".to_string()))
		);
	}

	#[test]
	fn display_is_upper_case_name() {
		assert_eq!(Level::Info.to_string(), "INFO");
		assert_eq!(Level::default(), Level::Info);
	}
}
