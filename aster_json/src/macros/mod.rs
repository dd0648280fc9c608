//! Literal construction macros

/// Builds a [`JsonValue`](crate::JsonValue) from JSON-like syntax.
///
/// `null`, arrays `[...]` and objects `{"key": ...}` nest freely. Any other token tree,
/// including negative number literals, is converted with `JsonValue::from`. Object keys
/// must be string literals. Multi-token expressions have to be wrapped in parentheses.
///
/// # Example
/// ```
/// use aster_json::json_value;
/// let name = "aster";
/// let value = json_value!({
///     "name": name,
///     "offset": -3,
///     "tags": ["a", null, (1 + 1)],
///     "empty": {},
/// });
/// assert_eq!(value.dump(0).unwrap(), r#"{"empty":{},"name":"aster","offset":-3,"tags":["a",null,2]}"#);
/// ```
#[macro_export]
macro_rules! json_value {
	(@array $array:ident ()) => {};
	(@array $array:ident (- $element:literal $(, $($rest:tt)*)?)) => {
		$array.push($crate::json_value!(- $element));
		$crate::json_value!(@array $array ($($($rest)*)?));
	};
	(@array $array:ident ($element:tt $(, $($rest:tt)*)?)) => {
		$array.push($crate::json_value!($element));
		$crate::json_value!(@array $array ($($($rest)*)?));
	};

	(@object $object:ident ()) => {};
	(@object $object:ident ($key:literal : - $value:literal $(, $($rest:tt)*)?)) => {
		$object.set($key, $crate::json_value!(- $value));
		$crate::json_value!(@object $object ($($($rest)*)?));
	};
	(@object $object:ident ($key:literal : $value:tt $(, $($rest:tt)*)?)) => {
		$object.set($key, $crate::json_value!($value));
		$crate::json_value!(@object $object ($($($rest)*)?));
	};

	(null) => {
		$crate::JsonValue::Null
	};
	([ $($elements:tt)* ]) => {{
		#[allow(unused_mut)]
		let mut array = $crate::JsonArray::new();
		$crate::json_value!(@array array ($($elements)*));
		$crate::JsonValue::Array(array)
	}};
	({ $($entries:tt)* }) => {{
		#[allow(unused_mut)]
		let mut object = $crate::JsonObject::new();
		$crate::json_value!(@object object ($($entries)*));
		$crate::JsonValue::Object(object)
	}};
	($other:expr) => {
		$crate::JsonValue::from($other)
	};
}

#[cfg(test)]
mod tests {
	use crate::{JsonArray, JsonObject, JsonValue};

	#[test]
	fn test_scalars() {
		assert_eq!(json_value!(null), JsonValue::Null);
		assert_eq!(json_value!(true), JsonValue::Boolean(true));
		assert_eq!(json_value!(-7), JsonValue::Integer(-7));
		assert_eq!(json_value!(1.5), JsonValue::Double(1.5));
		assert_eq!(json_value!("s"), JsonValue::from("s"));
	}

	#[test]
	fn test_array() {
		assert_eq!(json_value!([]), JsonValue::new_array());
		assert_eq!(
			json_value!([1, -2, null, "x", [true],]),
			JsonValue::Array(JsonArray(vec![
				JsonValue::from(1),
				JsonValue::from(-2),
				JsonValue::Null,
				JsonValue::from("x"),
				JsonValue::from(vec![true]),
			]))
		);
	}

	#[test]
	fn test_object() {
		assert_eq!(json_value!({}), JsonValue::new_object());

		let count = 3;
		let value = json_value!({
			"count": count,
			"negative": -1.5,
			"nested": {"list": [1, 2]},
		});

		let mut nested = JsonObject::new();
		nested.set("list", vec![1, 2]);
		let mut expected = JsonObject::new();
		expected.set("count", 3);
		expected.set("negative", -1.5);
		expected.set("nested", nested);
		assert_eq!(value, JsonValue::Object(expected));
	}
}
