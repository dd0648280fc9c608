use std::fmt::Display;

/// The discriminant of a `JsonValue`: which of the seven variants is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonKind {
	Null,
	Boolean,
	Integer,
	Double,
	String,
	Array,
	Object,
}

impl JsonKind {
	/// Lowercase name of the kind (`"null"`, `"array"`, ...).
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use JsonKind::*;
		match self {
			Null => "null",
			Boolean => "boolean",
			Integer => "integer",
			Double => "double",
			String => "string",
			Array => "array",
			Object => "object",
		}
	}

	/// `true` for `Integer` and `Double`.
	#[must_use]
	pub fn is_number(&self) -> bool {
		matches!(self, JsonKind::Integer | JsonKind::Double)
	}
}

impl Display for JsonKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
