// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// A named logger that prints colored, timestamped lines filtered by a minimum
// level. Every record looks like:
//
//   [2025-07-08 14:02:11] [Demo] [WARNING]: disk almost full (93,) {mount: "/"}
//
// The per-level helpers (`info`, `warning`, ...) emit regardless of the minimum
// level unless the logger uses `Policy::Filtered`; only `log` with
// `override_level == false` consults the filter by default.

use std::any::{type_name, Any};
use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use chrono::Local;
use colored::Color;

use crate::constants::{
	FIELDS, FIELD_COLORIZATION, FIELD_LEVEL, FIELD_NAME, FIELD_POLICY, TIMESTAMP_FORMAT, TYPE_NAME,
};
use crate::error::{LoggerError, Result};
use crate::extras::Extras;
use crate::level::{parse_color, Level};
use crate::sink::{ConsoleSink, Line, LineSink};

/// How the per-level helpers treat the minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
	/// Helpers always print, whatever the minimum level is.
	#[default]
	AlwaysEmit,
	/// Helpers are dropped below the minimum level, like `log` without override.
	Filtered,
}

impl Policy {
	fn override_flag(self) -> bool {
		matches!(self, Policy::AlwaysEmit)
	}
}

/// Value returned by attribute-style lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<'a> {
	Name(&'a str),
	Level(Level),
	Colorization(&'a HashMap<Level, Color>),
	Policy(Policy),
}

#[derive(Debug, Clone)]
pub struct Logger<S: LineSink = ConsoleSink> {
	name: String,
	level: Level,
	colorization: HashMap<Level, Color>,
	policy: Policy,
	sink: S,
}

impl Logger<ConsoleSink> {
	/// Creates a logger printing to stdout.
	pub fn create(name: impl Into<String>, level: Level) -> Result<Self> {
		Self::with_sink(name, level, ConsoleSink)
	}

	/// Creates a stdout logger at the default `INFO` level.
	pub fn named(name: impl Into<String>) -> Result<Self> {
		Self::create(name, Level::default())
	}
}

impl<S: LineSink> Logger<S> {
	pub fn with_sink(name: impl Into<String>, level: Level, sink: S) -> Result<Self> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(LoggerError::EmptyName);
		}

		Ok(Self {
			name,
			level,
			colorization: HashMap::new(),
			policy: Policy::default(),
			sink,
		})
	}

	pub fn with_policy(mut self, policy: Policy) -> Self {
		self.policy = policy;
		self
	}

	// ──────────────────────────────────────────────────────────────────────────
	// Configuration
	// ──────────────────────────────────────────────────────────────────────────

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Always fails: the name is fixed at construction. A CRITICAL line is
	/// written before the error is returned.
	pub fn set_name(&self, _value: impl Into<String>) -> Result<()> {
		self.critical(format!("Cannot set attribute '{}' in '{}'.", FIELD_NAME, TYPE_NAME));
		Err(LoggerError::ImmutableAttribute {
			attribute: FIELD_NAME,
			owner: TYPE_NAME,
		})
	}

	pub fn level(&self) -> Level {
		self.level
	}

	pub fn set_level(&mut self, level: Level) {
		self.level = level;
	}

	pub fn policy(&self) -> Policy {
		self.policy
	}

	pub fn set_policy(&mut self, policy: Policy) {
		self.policy = policy;
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}

	pub fn colorization(&self) -> &HashMap<Level, Color> {
		&self.colorization
	}

	/// The color a line at `level` is painted with: the override if one is set,
	/// otherwise the built-in palette.
	pub fn color_for(&self, level: Level) -> Option<Color> {
		self.colorization
			.get(&level)
			.copied()
			.or_else(|| level.default_color())
	}

	pub fn set_color(&mut self, level: Level, color: Color) {
		self.colorization.insert(level, color);
	}

	/// Same as `set_color`, with both sides given by name (`"warning"`, `"cyan"`).
	pub fn set_color_by_name(&mut self, level: &str, color: &str) -> Result<()> {
		let level: Level = level.parse()?;
		let color = parse_color(color)?;
		self.set_color(level, color);
		Ok(())
	}

	pub fn clear_color(&mut self, level: Level) -> Option<Color> {
		self.colorization.remove(&level)
	}

	/// Attribute-style lookup. Unknown keys yield `None`.
	pub fn get(&self, key: &str) -> Option<Field<'_>> {
		match key {
			FIELD_NAME => Some(Field::Name(&self.name)),
			FIELD_LEVEL => Some(Field::Level(self.level)),
			FIELD_COLORIZATION => Some(Field::Colorization(&self.colorization)),
			FIELD_POLICY => Some(Field::Policy(self.policy)),
			_ => None,
		}
	}

	pub fn contains(&self, key: &str) -> bool {
		FIELDS.contains(&key)
	}

	// ──────────────────────────────────────────────────────────────────────────
	// Writing
	// ──────────────────────────────────────────────────────────────────────────

	pub fn log(&self, message: impl Display, level: Level, override_level: bool) {
		self.log_with(message, level, override_level, &Extras::default());
	}

	/// Writes one line unless `level` is below the minimum and `override_level`
	/// is false.
	pub fn log_with(&self, message: impl Display, level: Level, override_level: bool, extras: &Extras) {
		if !override_level && level < self.level {
			return;
		}
		self.sink.write_line(&self.render(&message, level, extras));
	}

	fn render(&self, message: &dyn Display, level: Level, extras: &Extras) -> Line {
		let timestamp = Local::now().format(TIMESTAMP_FORMAT);
		let mut text = format!("[{}] [{}] [{}]: {}", timestamp, self.name, level, message);

		for part in [extras.positional_text(), extras.keyword_text()].into_iter().flatten() {
			text.push(' ');
			text.push_str(&part);
		}

		Line {
			level,
			color: self.color_for(level),
			text,
		}
	}

	fn emit(&self, level: Level, message: impl Display) {
		self.log(message, level, self.policy.override_flag());
	}

	pub fn silent(&self, message: impl Display) {
		self.emit(Level::Silent, message);
	}

	pub fn debug(&self, message: impl Display) {
		self.emit(Level::Debug, message);
	}

	pub fn info(&self, message: impl Display) {
		self.emit(Level::Info, message);
	}

	pub fn warning(&self, message: impl Display) {
		self.emit(Level::Warning, message);
	}

	pub fn error(&self, message: impl Display) {
		self.emit(Level::Error, message);
	}

	pub fn critical(&self, message: impl Display) {
		self.emit(Level::Critical, message);
	}

	// ──────────────────────────────────────────────────────────────────────────
	// Diagnostics
	// ──────────────────────────────────────────────────────────────────────────

	/// Runs `function(args)` and narrates it: start, success, elapsed time and
	/// result at INFO. A returned `Err` or a panic inside `function` is logged
	/// once at ERROR and turned into `None`; neither reaches the caller.
	pub fn execute<A, T, E, F>(&self, name: &str, args: A, function: F) -> Option<T>
	where
		A: Debug,
		T: Debug,
		E: Display,
		F: FnOnce(A) -> std::result::Result<T, E>,
	{
		let start = Instant::now();
		self.info(format!("Executing {} with args: {:?}", name, args));

		let failure = match panic::catch_unwind(AssertUnwindSafe(|| function(args))) {
			Ok(Ok(result)) => {
				let elapsed = start.elapsed();
				self.info(format!("{} executed successfully.", name));
				self.info(format!("Execution time: {:.2} seconds", elapsed.as_secs_f64()));
				self.info(format!("Result: {:?}", result));
				return Some(result);
			}
			Ok(Err(e)) => e.to_string(),
			Err(payload) => panic_message(payload.as_ref()),
		};

		self.error(format!("Error executing {}: {}", name, failure));
		None
	}

	/// Logs `message` at ERROR, optionally followed by the error's cause chain
	/// and a backtrace captured here. Unlike the level helpers this goes through
	/// the minimum-level filter.
	pub fn exception<E: Error>(&self, error: &E, message: impl Display, log_traceback: bool) {
		self.log_exception(short_type_name::<E>(), error, &message, log_traceback);
	}

	/// `exception` for type-erased errors such as `Box<dyn Error>`.
	pub fn exception_dyn(&self, error: &(dyn Error + 'static), message: impl Display, log_traceback: bool) {
		self.log_exception(DYN_ERROR_NAME, error, &message, log_traceback);
	}

	fn log_exception(&self, kind: &str, error: &dyn Error, message: &dyn Display, log_traceback: bool) {
		let mut text = message.to_string();
		if log_traceback {
			text.push_str(&format!("\n Traceback for {}:\n\n{}", kind, traceback(error)));
		}
		self.log(text, Level::Error, false);
	}
}

const DYN_ERROR_NAME: &str = "dyn Error";

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		format!("panicked: {}", message)
	} else if let Some(message) = payload.downcast_ref::<String>() {
		format!("panicked: {}", message)
	} else {
		"panicked".to_string()
	}
}

fn short_type_name<T>() -> &'static str {
	let full = type_name::<T>();
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

fn traceback(error: &dyn Error) -> String {
	let mut text = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		text.push_str(&format!("\nCaused by: {}", cause));
		source = cause.source();
	}
	text.push_str(&format!("\n\n{}", Backtrace::force_capture()));
	text
}

impl<S: LineSink, T: LineSink> PartialEq<Logger<T>> for Logger<S> {
	fn eq(&self, other: &Logger<T>) -> bool {
		self.name == other.name && self.level == other.level
	}
}

impl<S: LineSink> Eq for Logger<S> {}

impl<S: LineSink> fmt::Display for Logger<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}(name={}, level={})>", TYPE_NAME, self.name, self.level)
	}
}
