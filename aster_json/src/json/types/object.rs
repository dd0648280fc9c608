//! JSON object type: unique string keys mapped to `JsonValue`, iterated in key order.
use crate::json::*;
use anyhow::Result;
use std::{collections::BTreeMap, fmt::Debug};

/// A JSON object backed by a `BTreeMap<String, JsonValue>`.
///
/// Keys are unique and always iterate (and serialize) in sorted order, regardless of the
/// order in which they were inserted.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Merge entries from another `JsonObject` into this one, overwriting existing keys.
	pub fn assign(&mut self, object: JsonObject) {
		self.0.extend(object.0);
	}

	/// Get a reference to the raw `JsonValue` for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
		self.0.get_mut(key)
	}

	/// Borrow the entry for `key`, inserting `Null` first if the key is missing.
	pub fn entry(&mut self, key: &str) -> &mut JsonValue {
		if !self.0.contains_key(key) {
			log::trace!("inserting null entry for key {key:?}");
		}
		self.0.entry(key.to_owned()).or_default()
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	/// Retrieve a string value for the specified key. Missing keys yield `None`, other kinds an error.
	pub fn get_string(&self, key: &str) -> Result<Option<String>> {
		self.get(key).map(JsonValue::as_string).transpose()
	}

	/// Retrieve a numeric value as `f64` for the specified key.
	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	/// Retrieve a `JsonArray` reference for the specified key, if present and an array.
	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
		self.get(key).map(JsonValue::as_object).transpose()
	}

	/// Set the specified key to the given value, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	/// Set the specified key only if the provided `Option` is `Some`, converting it into a `JsonValue`.
	pub fn set_optional<T>(&mut self, key: &str, value: &Option<T>)
	where
		JsonValue: From<T>,
		T: Clone,
	{
		if let Some(v) = value {
			self.0.insert(key.to_owned(), JsonValue::from(v.clone()));
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

	/// Return an iterator over key-value pairs in sorted key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.keys()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonValue::Object` by converting into a `JsonObject`.
impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonObject`. Later duplicates of a key win.
impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

impl<T> From<BTreeMap<String, T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: BTreeMap<String, T>) -> Self {
		JsonValue::Object(input.into_iter().collect())
	}
}

impl<K, T> FromIterator<(K, T)> for JsonObject
where
	K: Into<String>,
	JsonValue: From<T>,
{
	fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
		JsonObject(
			iter
				.into_iter()
				.map(|(key, value)| (key.into(), JsonValue::from(value)))
				.collect(),
		)
	}
}
