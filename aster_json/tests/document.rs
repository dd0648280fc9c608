use anyhow::Result;
use aster_json::{DumpConfig, JsonError, JsonKind, JsonValue, json_value};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Builds the document used throughout these tests, the same way a caller would:
/// by assigning into keys of a fresh value and pushing onto vivified arrays.
fn build_document() -> Result<JsonValue> {
	let mut json = JsonValue::default();
	json.set("null", ())?;
	json.set("bool", true)?;
	json.set("int", 123)?;
	json.set("double", 456.789)?;
	*json.key_mut("string")?.string_mut()? = "utf8 😋".to_string();
	json.key_mut("array")?.push("item1")?;
	json.key_mut("array")?.push(2.000_001)?;
	json.key_mut("array")?.push(3)?;
	json.key_mut("object")?.set("key", "value")?;
	Ok(json)
}

#[test]
fn compact_document() -> Result<()> {
	assert_eq!(
		build_document()?.dump(0)?,
		r#"{"array":["item1",2.000001,3],"bool":true,"double":456.789,"int":123,"null":null,"object":{"key":"value"},"string":"utf8 😋"}"#
	);
	Ok(())
}

#[test]
fn pretty_document() -> Result<()> {
	let expected = r#"{
  "array": [
    "item1",
    2.000001,
    3
  ],
  "bool": true,
  "double": 456.789,
  "int": 123,
  "null": null,
  "object": {
    "key": "value"
  },
  "string": "utf8 😋"
}"#;
	assert_eq!(build_document()?.dump(2)?, expected);
	Ok(())
}

#[test]
fn object_keys_serialize_sorted_not_in_insertion_order() -> Result<()> {
	let mut json = JsonValue::default();
	json.set("null", ())?;
	json.set("bool", true)?;
	json.set("int", 123)?;
	json.key_mut("array")?.push(1)?;
	json.key_mut("array")?.push(2)?;
	assert_eq!(json.dump(0)?, r#"{"array":[1,2],"bool":true,"int":123,"null":null}"#);
	Ok(())
}

#[test]
fn scalar_leaves_render_canonically() -> Result<()> {
	let json = json_value!({"a": 1, "b": true});
	assert_eq!(json.dump(0)?, r#"{"a":1,"b":true}"#);
	Ok(())
}

#[rstest]
#[case(0)]
#[case(2)]
fn serialization_is_idempotent(#[case] indent: usize) -> Result<()> {
	let json = build_document()?;
	assert_eq!(json.dump(indent)?, json.dump(indent)?);
	Ok(())
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(8)]
fn empty_containers_have_no_whitespace(#[case] indent: usize) -> Result<()> {
	assert_eq!(JsonValue::new_array().dump(indent)?, "[]");
	assert_eq!(JsonValue::new_object().dump(indent)?, "{}");
	Ok(())
}

#[test]
fn deep_copy_isolation() -> Result<()> {
	let mut a = build_document()?;
	let mut b = a.clone();

	*b.key_mut("array")?.at_mut(0)? = JsonValue::from("changed in b");
	assert_eq!(a.get_key("array")?.unwrap().at(0)?.as_str()?, "item1");

	a.key_mut("array")?.push("only in a")?;
	assert_eq!(a.get_key("array")?.unwrap().len(), 4);
	assert_eq!(b.get_key("array")?.unwrap().len(), 3);
	Ok(())
}

#[test]
fn vivified_object_rejects_index_access() -> Result<()> {
	let mut json = JsonValue::default();
	assert!(json.key_mut("k")?.is_null());
	assert_eq!(json.kind(), JsonKind::Object);

	let error = json.at(0).unwrap_err();
	assert_eq!(
		JsonError::of(&error),
		Some(&JsonError::TypeMismatch {
			expected: "array",
			found: JsonKind::Object
		})
	);
	Ok(())
}

#[test]
fn out_of_range_index_does_not_grow() -> Result<()> {
	let mut json = JsonValue::default();
	json.push(1)?;
	let error = json.at_mut(1).unwrap_err();
	assert_eq!(
		JsonError::of(&error),
		Some(&JsonError::IndexOutOfRange { index: 1, len: 1 })
	);
	assert_eq!(json.dump(0)?, "[1]");
	Ok(())
}

#[test]
fn reassignment_replaces_payload() -> Result<()> {
	let mut json = build_document()?;
	json.key_mut("object")?.assign(vec![1, 2]);
	json.key_mut("array")?.assign(());
	assert_eq!(
		json.dump(0)?,
		r#"{"array":null,"bool":true,"double":456.789,"int":123,"null":null,"object":[1,2],"string":"utf8 😋"}"#
	);
	Ok(())
}

#[test]
fn primitives_read_back_unchanged() -> Result<()> {
	assert!(JsonValue::from(true).get::<bool>()?);
	assert_eq!(JsonValue::from(-123_i64).get::<i64>()?, -123);
	assert_eq!(JsonValue::from(456.789).get::<f64>()?, 456.789);
	assert_eq!(JsonValue::from("text").get::<String>()?, "text");
	assert!(JsonValue::from(()).is_null());
	Ok(())
}

#[test]
fn unescaped_strings_are_a_known_gap() -> Result<()> {
	let json = json_value!(["say \"hi\"\n"]);
	assert_eq!(json.dump(0)?, "[\"say \"hi\"\n\"]");
	assert_eq!(
		json.dump_with(&DumpConfig::compact().with_escape_strings(true))?,
		r#"["say \"hi\"\n"]"#
	);
	Ok(())
}

#[test]
fn depth_limit_reports_serialization_error() {
	let json = json_value!([[[[1]]]]);
	let error = json.dump_with(&DumpConfig::pretty(2).with_max_depth(3)).unwrap_err();
	assert!(matches!(JsonError::of(&error), Some(JsonError::Serialization(_))));
}
