// ══════════════════════════════════════════════════════════════════════════════
// EXTRAS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Extra positional and keyword values appended after a log message. Values are
// captured with their Debug representation when they are added.

use std::fmt::Debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras {
	positional: Vec<String>,
	keyword: Vec<(String, String)>,
}

impl Extras {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn arg(mut self, value: impl Debug) -> Self {
		self.positional.push(format!("{:?}", value));
		self
	}

	pub fn kwarg(mut self, key: impl Into<String>, value: impl Debug) -> Self {
		self.keyword.push((key.into(), format!("{:?}", value)));
		self
	}

	pub fn is_empty(&self) -> bool {
		self.positional.is_empty() && self.keyword.is_empty()
	}

	/// `(a, b)`, or `(a,)` for a single value. `None` when there are no values.
	pub fn positional_text(&self) -> Option<String> {
		match self.positional.as_slice() {
			[] => None,
			[single] => Some(format!("({},)", single)),
			values => Some(format!("({})", values.join(", "))),
		}
	}

	/// `{key: value, ...}` in insertion order. `None` when there are no values.
	pub fn keyword_text(&self) -> Option<String> {
		if self.keyword.is_empty() {
			return None;
		}
		let pairs: Vec<String> = self.keyword.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
		Some(format!("{{{}}}", pairs.join(", ")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_extras_render_nothing() {
		let extras = Extras::new();
		assert!(extras.is_empty());
		assert_eq!(extras.positional_text(), None);
		assert_eq!(extras.keyword_text(), None);
	}

	#[test]
	fn positional_values_render_as_tuple() {
		assert_eq!(Extras::new().arg(1).positional_text().as_deref(), Some("(1,)"));
		assert_eq!(
			Extras::new().arg(1).arg("two").positional_text().as_deref(),
			Some("(1, \"two\")")
		);
	}

	#[test]
	fn keyword_values_keep_insertion_order() {
		let extras = Extras::new().kwarg("user", "bob").kwarg("attempt", 3);
		assert!(!extras.is_empty());
		assert_eq!(extras.keyword_text().as_deref(), Some("{user: \"bob\", attempt: 3}"));
	}
}
