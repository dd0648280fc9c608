//! Checked conversion of a `JsonValue` payload into host types, used by `JsonValue::get`.

use crate::json::*;
use anyhow::{Context, Result};

/// Types that can be read out of a `JsonValue` whose kind matches.
pub trait FromJsonValue: Sized {
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if `value` does not hold this type.
	fn from_json_value(value: &JsonValue) -> Result<Self>;
}

impl FromJsonValue for bool {
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		value.as_bool()
	}
}

impl FromJsonValue for i64 {
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		value.as_i64()
	}
}

impl FromJsonValue for f64 {
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		value.as_f64()
	}
}

impl FromJsonValue for f32 {
	#[allow(clippy::cast_possible_truncation)]
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		value.as_f64().map(|v| v as f32)
	}
}

impl FromJsonValue for String {
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		value.as_string()
	}
}

impl FromJsonValue for JsonArray {
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		value.as_array().cloned()
	}
}

impl FromJsonValue for JsonObject {
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		value.as_object().cloned()
	}
}

impl FromJsonValue for JsonValue {
	fn from_json_value(value: &JsonValue) -> Result<Self> {
		Ok(value.clone())
	}
}

/// Read an integer and narrow it, failing if it does not fit the target type.
macro_rules! impl_from_json_value_narrowing {
	($($t:ty),+ $(,)?) => {
		$(
			impl FromJsonValue for $t {
				fn from_json_value(value: &JsonValue) -> Result<Self> {
					let integer = value.as_i64()?;
					<$t>::try_from(integer)
						.with_context(|| format!("integer {integer} does not fit into {}", stringify!($t)))
				}
			}
		)+
	};
}

impl_from_json_value_narrowing!(i8, i16, i32, isize, u8, u16, u32, u64, usize);
