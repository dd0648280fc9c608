//! Conversions from Rust numeric types into `JsonValue::Integer` and `JsonValue::Double`.
//!
//! Integers that fit into `i64` become `Integer`. Wider unsigned or 128-bit values that do
//! not fit fall back to a `Double` with the usual `f64` precision loss.

use super::JsonValue;

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Double(input)
	}
}

impl From<f32> for JsonValue {
	fn from(input: f32) -> Self {
		JsonValue::Double(f64::from(input))
	}
}

/// Implement `From<Number>` for `JsonValue` for integer types that always fit into `i64`.
macro_rules! impl_from_integer_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Integer(i64::from(input))
				}
			}
		)+
	};
}

/// Implement `From<Number>` for `JsonValue` for integer types that may exceed `i64`.
macro_rules! impl_from_integer_fallible {
	($($t:ty),+ $(,)?) => {
		$(
			#[allow(clippy::cast_precision_loss)]
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					i64::try_from(input).map_or(JsonValue::Double(input as f64), JsonValue::Integer)
				}
			}
		)+
	};
}

impl_from_integer_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_from_integer_fallible!(u64, u128, usize, i128, isize);

#[cfg(test)]
mod tests {
	use super::*;

	/// Generate per-type tests that assert `From<T> for JsonValue` maps to `Integer(v as i64)`.
	macro_rules! gen_from_integer_tests {
		($($name:ident : $t:ty => [$($v:expr),+ $(,)?];)+) => {
			$(
				#[test]
				#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::unnecessary_cast)]
				fn $name() {
					let vals: &[$t] = &[$($v),+];
					for &v in vals {
						match JsonValue::from(v) {
							JsonValue::Integer(n) => assert_eq!(n, v as i64, "failed for value {:?} ({})", v, stringify!($t)),
							other => panic!("expected JsonValue::Integer for type {}, got {other:?}", stringify!($t)),
						}
					}
				}
			)+
		};
	}

	gen_from_integer_tests! {
		from_u8:  u8  => [0, 1, 255];
		from_u16: u16 => [0, 65535];
		from_u32: u32 => [0, 1, u32::MAX];
		from_u64: u64 => [0, 1, i64::MAX as u64];
		from_u128: u128 => [0, 1, 1_000_000_000_000u128];
		from_usize: usize => [0, 1, 123_456];

		from_i8:  i8  => [-128, -1, 0, 1, 127];
		from_i16: i16 => [-32768, -1, 0, 32767];
		from_i32: i32 => [i32::MIN, 0, i32::MAX];
		from_i64: i64 => [i64::MIN, 0, i64::MAX];
		from_i128: i128 => [-1_234_567_890_123_i128, 0i128, 1_234_567_890_123_i128];
		from_isize: isize => [-123_456, 0, 123_456];
	}

	#[test]
	fn test_from_floats() {
		assert_eq!(JsonValue::from(1.5_f32), JsonValue::Double(1.5));
		assert_eq!(JsonValue::from(-0.25_f64), JsonValue::Double(-0.25));
		assert_eq!(JsonValue::from(2.0), JsonValue::Double(2.0));
	}

	#[test]
	fn test_integers_beyond_i64_become_doubles() {
		match JsonValue::from(u64::MAX) {
			JsonValue::Double(n) => assert!(n.is_finite() && n > 1.8e19),
			other => panic!("expected Double, got {other:?}"),
		}
		match JsonValue::from(i128::MIN) {
			JsonValue::Double(n) => assert!(n.is_finite() && n < 0.0),
			other => panic!("expected Double, got {other:?}"),
		}
	}
}
