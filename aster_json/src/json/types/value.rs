//! JSON value enum holding exactly one of the seven JSON kinds, with auto-vivifying
//! access operators and checked typed accessors.

use crate::config::DumpConfig;
use crate::json::*;
use anyhow::{Result, bail};
use std::fmt::Display;

/// Represents any JSON data: null, booleans, integers, doubles, strings, arrays and objects.
///
/// A default-constructed value is `Null`. A `Null` value turns into an array on the first
/// [`push`](JsonValue::push), into an object on the first [`key_mut`](JsonValue::key_mut)
/// and into a string on the first [`string_mut`](JsonValue::string_mut). Every other kind
/// rejects these operations with [`JsonError::TypeMismatch`].
///
/// # Examples
///
/// ```rust
/// use aster_json::JsonValue;
/// let mut json = JsonValue::default();
/// json.set("int", 123).unwrap();
/// json.key_mut("array").unwrap().push("item").unwrap();
/// assert_eq!(json.dump(0).unwrap(), r#"{"array":["item"],"int":123}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JsonValue {
	#[default]
	Null,
	Boolean(bool),
	Integer(i64),
	Double(f64),
	String(String),
	Array(JsonArray),
	Object(JsonObject),
}

impl JsonValue {
	/// Create a new empty JSON array value.
	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	/// Create a new empty JSON object value.
	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	/// Create the zero value of a kind: `false`, `0`, `0.0`, `""`, `[]` or `{}`.
	#[must_use]
	pub fn from_kind(kind: JsonKind) -> JsonValue {
		match kind {
			JsonKind::Null => JsonValue::Null,
			JsonKind::Boolean => JsonValue::Boolean(false),
			JsonKind::Integer => JsonValue::Integer(0),
			JsonKind::Double => JsonValue::Double(0.0),
			JsonKind::String => JsonValue::String(String::new()),
			JsonKind::Array => JsonValue::new_array(),
			JsonKind::Object => JsonValue::new_object(),
		}
	}

	/// The active kind.
	#[must_use]
	pub fn kind(&self) -> JsonKind {
		match self {
			JsonValue::Null => JsonKind::Null,
			JsonValue::Boolean(_) => JsonKind::Boolean,
			JsonValue::Integer(_) => JsonKind::Integer,
			JsonValue::Double(_) => JsonKind::Double,
			JsonValue::String(_) => JsonKind::String,
			JsonValue::Array(_) => JsonKind::Array,
			JsonValue::Object(_) => JsonKind::Object,
		}
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		self.kind().as_str()
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	#[must_use]
	pub fn is_boolean(&self) -> bool {
		matches!(self, JsonValue::Boolean(_))
	}

	#[must_use]
	pub fn is_integer(&self) -> bool {
		matches!(self, JsonValue::Integer(_))
	}

	/// Same as [`is_integer`](JsonValue::is_integer): integers are always signed.
	#[must_use]
	pub fn is_signed(&self) -> bool {
		self.is_integer()
	}

	#[must_use]
	pub fn is_double(&self) -> bool {
		matches!(self, JsonValue::Double(_))
	}

	/// `true` for integers and doubles.
	#[must_use]
	pub fn is_number(&self) -> bool {
		self.kind().is_number()
	}

	#[must_use]
	pub fn is_string(&self) -> bool {
		matches!(self, JsonValue::String(_))
	}

	#[must_use]
	pub fn is_array(&self) -> bool {
		matches!(self, JsonValue::Array(_))
	}

	#[must_use]
	pub fn is_object(&self) -> bool {
		matches!(self, JsonValue::Object(_))
	}

	/// `true` for `Null` and for strings, arrays and objects without content.
	/// Booleans and numbers are never empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			JsonValue::Null => true,
			JsonValue::String(text) => text.is_empty(),
			JsonValue::Array(array) => array.is_empty(),
			JsonValue::Object(object) => object.is_empty(),
			JsonValue::Boolean(_) | JsonValue::Integer(_) | JsonValue::Double(_) => false,
		}
	}

	/// Number of elements: byte length of a string, entries of an array or object,
	/// `0` for `Null` and `1` for any scalar.
	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			JsonValue::Null => 0,
			JsonValue::String(text) => text.len(),
			JsonValue::Array(array) => array.len(),
			JsonValue::Object(object) => object.len(),
			JsonValue::Boolean(_) | JsonValue::Integer(_) | JsonValue::Double(_) => 1,
		}
	}

	/// Turn a `Null` value into the empty value of `kind`. Any other value is left untouched.
	fn promote(&mut self, kind: JsonKind) {
		if self.is_null() {
			log::trace!("promoting null to {kind}");
			*self = JsonValue::from_kind(kind);
		}
	}

	fn mismatch(&self, expected: &'static str) -> JsonError {
		JsonError::mismatch(expected, self.kind())
	}

	/// Append a value to an array. A `Null` value becomes an empty array first.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] for any other kind.
	pub fn push<T>(&mut self, value: T) -> Result<()>
	where
		JsonValue: From<T>,
	{
		self.promote(JsonKind::Array);
		match self {
			JsonValue::Array(array) => {
				array.push(value);
				Ok(())
			}
			other => bail!(other.mismatch("array")),
		}
	}

	/// Borrow the array element at `index`. Never grows the array.
	///
	/// # Errors
	/// Returns [`JsonError::IndexOutOfRange`] past the end and [`JsonError::TypeMismatch`]
	/// if the value is not an array.
	pub fn at(&self, index: usize) -> Result<&JsonValue> {
		match self {
			JsonValue::Array(array) => array.at(index),
			other => bail!(other.mismatch("array")),
		}
	}

	/// Mutably borrow the array element at `index`. Never grows the array.
	///
	/// # Errors
	/// Same as [`at`](JsonValue::at).
	pub fn at_mut(&mut self, index: usize) -> Result<&mut JsonValue> {
		match self {
			JsonValue::Array(array) => array.at_mut(index),
			other => bail!(other.mismatch("array")),
		}
	}

	/// Look up an object member without modifying the value. `Null` has no members.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if the value is neither `Null` nor an object.
	pub fn get_key(&self, key: &str) -> Result<Option<&JsonValue>> {
		match self {
			JsonValue::Null => Ok(None),
			JsonValue::Object(object) => Ok(object.get(key)),
			other => bail!(other.mismatch("object")),
		}
	}

	/// Mutably borrow the object member `key`, inserting `Null` if it is missing.
	/// A `Null` value becomes an empty object first.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] for any other kind.
	pub fn key_mut(&mut self, key: &str) -> Result<&mut JsonValue> {
		self.promote(JsonKind::Object);
		match self {
			JsonValue::Object(object) => Ok(object.entry(key)),
			other => bail!(other.mismatch("object")),
		}
	}

	/// Assign `value` to the object member `key`, vivifying like [`key_mut`](JsonValue::key_mut).
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if the value is neither `Null` nor an object.
	pub fn set<T>(&mut self, key: &str, value: T) -> Result<()>
	where
		JsonValue: From<T>,
	{
		self.key_mut(key)?.assign(value);
		Ok(())
	}

	/// Mutably borrow the text of a string. A `Null` value becomes an empty string first.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] for any other kind.
	pub fn string_mut(&mut self) -> Result<&mut String> {
		self.promote(JsonKind::String);
		match self {
			JsonValue::String(text) => Ok(text),
			other => bail!(other.mismatch("string")),
		}
	}

	/// Owned copy of the text, with the same promotion rule as [`string_mut`](JsonValue::string_mut).
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if the value is neither `Null` nor a string.
	pub fn to_text(&mut self) -> Result<String> {
		Ok(self.string_mut()?.clone())
	}

	/// Replace the current payload with `value`, exactly as `JsonValue::from(value)` would build it.
	pub fn assign<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		*self = JsonValue::from(value);
	}

	/// Move the payload out, leaving `Null` behind.
	#[must_use]
	pub fn take(&mut self) -> JsonValue {
		std::mem::take(self)
	}

	/// Read the payload as `T`.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if the active kind does not hold a `T`.
	///
	/// # Examples
	///
	/// ```rust
	/// use aster_json::JsonValue;
	/// assert_eq!(JsonValue::from(42).get::<i64>().unwrap(), 42);
	/// assert!(JsonValue::from("42").get::<i64>().is_err());
	/// ```
	pub fn get<T: FromJsonValue>(&self) -> Result<T> {
		T::from_json_value(self)
	}

	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not a boolean.
	pub fn as_bool(&self) -> Result<bool> {
		match self {
			JsonValue::Boolean(value) => Ok(*value),
			other => bail!(other.mismatch("boolean")),
		}
	}

	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not an integer.
	pub fn as_i64(&self) -> Result<i64> {
		match self {
			JsonValue::Integer(value) => Ok(*value),
			other => bail!(other.mismatch("integer")),
		}
	}

	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not a double.
	pub fn as_f64(&self) -> Result<f64> {
		match self {
			JsonValue::Double(value) => Ok(*value),
			other => bail!(other.mismatch("double")),
		}
	}

	/// Either numeric kind as `f64`.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if the value is not a number.
	#[allow(clippy::cast_precision_loss)]
	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Integer(value) => Ok(*value as f64),
			JsonValue::Double(value) => Ok(*value),
			other => bail!(other.mismatch("number")),
		}
	}

	/// Return a string slice if this value is a JSON string.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not a string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			other => bail!(other.mismatch("string")),
		}
	}

	/// Return the string value as `String`, cloning it.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not a string.
	pub fn as_string(&self) -> Result<String> {
		self.as_str().map(str::to_owned)
	}

	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			other => bail!(other.mismatch("array")),
		}
	}

	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not an array.
	pub fn as_array_mut(&mut self) -> Result<&mut JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			other => bail!(other.mismatch("array")),
		}
	}

	/// Consume the value and extract the `JsonArray`.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not an array.
	pub fn into_array(self) -> Result<JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			other => bail!(other.mismatch("array")),
		}
	}

	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			other => bail!(other.mismatch("object")),
		}
	}

	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not an object.
	pub fn as_object_mut(&mut self) -> Result<&mut JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			other => bail!(other.mismatch("object")),
		}
	}

	/// Consume the value and extract the `JsonObject`.
	///
	/// # Errors
	/// Returns [`JsonError::TypeMismatch`] if not an object.
	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			other => bail!(other.mismatch("object")),
		}
	}

	/// Serialize the value. `indent == 0` renders compact JSON, any other width
	/// pretty-prints with that many spaces per nesting level.
	///
	/// # Errors
	/// Propagates [`JsonError::Serialization`] from the serializer.
	pub fn dump(&self, indent: usize) -> Result<String> {
		stringify(self, &DumpConfig::new(indent))
	}

	/// Serialize the value with a full [`DumpConfig`].
	///
	/// # Errors
	/// Returns [`JsonError::Serialization`] if the nesting exceeds `config.max_depth`.
	pub fn dump_with(&self, config: &DumpConfig) -> Result<String> {
		stringify(self, config)
	}
}

impl Display for JsonValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let text = self.dump(0).map_err(|_| std::fmt::Error)?;
		f.write_str(&text)
	}
}

impl From<()> for JsonValue {
	fn from(_: ()) -> Self {
		JsonValue::Null
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<char> for JsonValue {
	fn from(input: char) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<T> From<Option<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Null, JsonValue::from)
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl FromIterator<JsonValue> for JsonValue {
	fn from_iter<T: IntoIterator<Item = JsonValue>>(iter: T) -> Self {
		JsonValue::Array(iter.into_iter().collect())
	}
}
