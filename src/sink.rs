// ══════════════════════════════════════════════════════════════════════════════
// SINK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Where rendered lines end up. The console sink paints each line with its color
// and prints it to stdout; the memory sink keeps lines around so callers (and
// tests) can look at exactly what would have been printed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use colored::control::SHOULD_COLORIZE;
use colored::{Color, Colorize};

use crate::constants::ANSI_RESET;
use crate::level::Level;

/// One rendered log record, before painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
	pub level: Level,
	pub color: Option<Color>,
	pub text: String,
}

impl Line {
	/// The text wrapped in the line's ANSI color and a trailing reset. A line
	/// without a color is wrapped in resets on both sides.
	/// `colored` drops the escapes when NO_COLOR is set or stdout is not a tty.
	pub fn painted(&self) -> String {
		match self.color {
			Some(color) => self.text.as_str().color(color).to_string(),
			None if SHOULD_COLORIZE.should_colorize() => {
				format!("{}{}{}", ANSI_RESET, self.text, ANSI_RESET)
			}
			None => self.text.clone(),
		}
	}
}

pub trait LineSink {
	fn write_line(&self, line: &Line);
}

/// Prints painted lines to stdout. When stdout is piped or redirected,
/// `colored` leaves the escapes out, so files and pipes receive plain text
/// unless CLICOLOR_FORCE is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LineSink for ConsoleSink {
	fn write_line(&self, line: &Line) {
		println!("{}", line.painted());
	}
}

/// Collects lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
	lines: Arc<Mutex<Vec<Line>>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	fn buffer(&self) -> MutexGuard<'_, Vec<Line>> {
		self.lines.lock().unwrap_or_else(PoisonError::into_inner)
	}

	pub fn lines(&self) -> Vec<Line> {
		self.buffer().clone()
	}

	pub fn texts(&self) -> Vec<String> {
		self.buffer().iter().map(|line| line.text.clone()).collect()
	}

	pub fn count(&self, level: Level) -> usize {
		self.buffer().iter().filter(|line| line.level == level).count()
	}

	pub fn len(&self) -> usize {
		self.buffer().len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer().is_empty()
	}

	pub fn clear(&self) {
		self.buffer().clear();
	}
}

impl LineSink for MemorySink {
	fn write_line(&self, line: &Line) {
		self.buffer().push(line.clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn warning_line() -> Line {
		Line {
			level: Level::Warning,
			color: Some(Color::BrightYellow),
			text: "[2025-01-01 00:00:00] [Demo] [WARNING]: hi".to_string(),
		}
	}

	#[test]
	fn painted_line_is_wrapped_in_color_and_reset() {
		colored::control::set_override(true);
		let painted = warning_line().painted();
		assert!(painted.starts_with("\x1b[93m"), "{:?}", painted);
		assert!(painted.ends_with("\x1b[0m"), "{:?}", painted);
		assert!(painted.contains("[Demo] [WARNING]: hi"));
	}

	#[test]
	fn uncolored_line_is_wrapped_in_resets() {
		colored::control::set_override(true);
		let line = Line { level: Level::Silent, color: None, text: "quiet".to_string() };
		assert_eq!(line.painted(), "\x1b[0mquiet\x1b[0m");
	}

	#[test]
	fn memory_sink_clones_share_buffer() {
		let sink = MemorySink::new();
		let handle = sink.clone();
		sink.write_line(&warning_line());

		assert_eq!(handle.len(), 1);
		assert_eq!(handle.count(Level::Warning), 1);
		assert_eq!(handle.count(Level::Error), 0);
		assert_eq!(handle.lines()[0], warning_line());

		handle.clear();
		assert!(sink.is_empty());
	}
}
