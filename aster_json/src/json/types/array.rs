//! JSON array type: an insertion-ordered sequence of `JsonValue`.
use crate::json::*;
use anyhow::{Result, bail};
use std::fmt::Debug;

#[derive(Clone, Default, PartialEq)]
/// A JSON array, backed by a `Vec<JsonValue>`.
///
/// Elements keep the order in which they were pushed. Indexed access never grows the array.
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Append a value at the end.
	///
	/// # Examples
	///
	/// ```rust
	/// use aster_json::{JsonArray, JsonValue};
	/// let mut array = JsonArray::new();
	/// array.push(1);
	/// array.push("two");
	/// assert_eq!(JsonValue::from(array).dump(0).unwrap(), r#"[1,"two"]"#);
	/// ```
	pub fn push<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.push(JsonValue::from(value));
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
		self.0.get_mut(index)
	}

	/// Borrow the element at `index`.
	///
	/// # Errors
	/// Returns [`JsonError::IndexOutOfRange`] if `index >= len()`.
	pub fn at(&self, index: usize) -> Result<&JsonValue> {
		let len = self.0.len();
		match self.0.get(index) {
			Some(value) => Ok(value),
			None => bail!(JsonError::IndexOutOfRange { index, len }),
		}
	}

	/// Mutably borrow the element at `index`.
	///
	/// # Errors
	/// Returns [`JsonError::IndexOutOfRange`] if `index >= len()`.
	pub fn at_mut(&mut self, index: usize) -> Result<&mut JsonValue> {
		let len = self.0.len();
		match self.0.get_mut(index) {
			Some(value) => Ok(value),
			None => bail!(JsonError::IndexOutOfRange { index, len }),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, JsonValue> {
		self.0.iter_mut()
	}

	/// Get a reference to the underlying `Vec<JsonValue>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	/// Convert all elements to Rust `String`s, returning an error if any element is not a string.
	pub fn as_string_vec(&self) -> Result<Vec<String>> {
		self.0.iter().map(JsonValue::as_string).collect::<Result<Vec<_>>>()
	}

	/// Convert all elements to `f64`, returning an error if any element is not numeric.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect::<Result<Vec<_>>>()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(Vec::from_iter(input.into_iter().map(JsonValue::from)))
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray(Vec::from_iter(input.iter().map(|v| JsonValue::from(v.clone()))))
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray(Vec::from_iter(input.iter().map(|v| JsonValue::from(*v))))
	}
}

impl<T> FromIterator<T> for JsonArray
where
	JsonValue: From<T>,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		JsonArray(iter.into_iter().map(JsonValue::from).collect())
	}
}

impl IntoIterator for JsonArray {
	type Item = JsonValue;
	type IntoIter = std::vec::IntoIter<JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
