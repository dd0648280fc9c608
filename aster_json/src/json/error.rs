//! Error kinds raised by access, mutation and serialization of a `JsonValue`.
//!
//! All public functions return `anyhow::Result`. The concrete kind can be
//! recovered with `error.downcast_ref::<JsonError>()`.

use super::JsonKind;

/// Contract violations reported by `JsonValue` operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JsonError {
	/// An operation was invoked on a value whose active kind does not support it.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch { expected: &'static str, found: JsonKind },

	/// An array was indexed beyond its current length.
	#[error("index {index} is out of range for array of length {len}")]
	IndexOutOfRange { index: usize, len: usize },

	/// The serializer refused to render a value.
	#[error("serialization error: {0}")]
	Serialization(String),
}

impl JsonError {
	pub(crate) fn mismatch(expected: &'static str, found: JsonKind) -> Self {
		JsonError::TypeMismatch { expected, found }
	}

	/// Returns the `JsonError` carried by an `anyhow::Error`, if any.
	#[must_use]
	pub fn of(error: &anyhow::Error) -> Option<&JsonError> {
		error.downcast_ref::<JsonError>()
	}
}
