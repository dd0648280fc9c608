//! Serializer settings.

/// Controls how [`JsonValue::dump_with`](crate::JsonValue::dump_with) renders a value.
///
/// The default renders compact JSON, copies strings verbatim and places no limit on nesting.
///
/// # Examples
///
/// ```rust
/// use aster_json::{DumpConfig, JsonValue};
/// let value = JsonValue::from(vec!["a\"b"]);
/// let config = DumpConfig::pretty(2).with_escape_strings(true);
/// assert_eq!(value.dump_with(&config).unwrap(), "[\n  \"a\\\"b\"\n]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DumpConfig {
	/// Spaces per nesting level. `0` disables all inserted whitespace.
	pub indent: usize,
	/// Escape quotes, backslashes and control characters in strings and keys.
	/// Off by default: text is emitted as-is, which yields invalid JSON for such strings.
	pub escape_strings: bool,
	/// Deepest allowed container nesting; the outermost container is level 1.
	pub max_depth: Option<usize>,
}

impl DumpConfig {
	#[must_use]
	pub fn new(indent: usize) -> Self {
		Self {
			indent,
			..Self::default()
		}
	}

	#[must_use]
	pub fn compact() -> Self {
		Self::new(0)
	}

	#[must_use]
	pub fn pretty(indent: usize) -> Self {
		Self::new(indent)
	}

	#[must_use]
	pub fn with_escape_strings(mut self, escape_strings: bool) -> Self {
		self.escape_strings = escape_strings;
		self
	}

	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = Some(max_depth);
		self
	}

	#[must_use]
	pub fn is_pretty(&self) -> bool {
		self.indent > 0
	}
}
