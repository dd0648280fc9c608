//! Recursive JSON serializer.
//!
//! With `indent == 0` nothing but the JSON tokens is emitted. With `indent > 0` every element
//! of a non-empty container starts on its own line, indented by `depth * indent` spaces, and
//! object keys are followed by `": "`. Empty containers always render as `[]` and `{}`.

use super::{JsonError, JsonValue};
use crate::config::DumpConfig;
use anyhow::{Result, bail};

/// Serialize `json` into a freshly allocated string.
///
/// # Errors
/// Returns [`JsonError::Serialization`] if the nesting exceeds `config.max_depth`.
pub fn stringify(json: &JsonValue, config: &DumpConfig) -> Result<String> {
	log::debug!("stringify {} value with indent {}", json.kind(), config.indent);
	let mut out = String::new();
	write_value(&mut out, json, 0, config)?;
	Ok(out)
}

fn write_value(out: &mut String, json: &JsonValue, depth: usize, config: &DumpConfig) -> Result<()> {
	match json {
		JsonValue::Null => out.push_str("null"),
		JsonValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
		JsonValue::Integer(n) => out.push_str(&n.to_string()),
		JsonValue::Double(n) => {
			if !n.is_finite() {
				log::warn!("emitting non-finite number {n}, output is not valid JSON");
			}
			out.push_str(&n.to_string());
		}
		JsonValue::String(s) => write_string(out, s, config),
		JsonValue::Array(array) => {
			let inner = enter(depth, config)?;
			out.push('[');
			if !array.is_empty() {
				for (index, item) in array.iter().enumerate() {
					if index > 0 {
						out.push(',');
					}
					write_newline(out, inner, config);
					write_value(out, item, inner, config)?;
				}
				write_newline(out, depth, config);
			}
			out.push(']');
		}
		JsonValue::Object(object) => {
			let inner = enter(depth, config)?;
			out.push('{');
			if !object.is_empty() {
				for (index, (key, value)) in object.iter().enumerate() {
					if index > 0 {
						out.push(',');
					}
					write_newline(out, inner, config);
					write_string(out, key, config);
					out.push(':');
					if config.is_pretty() {
						out.push(' ');
					}
					write_value(out, value, inner, config)?;
				}
				write_newline(out, depth, config);
			}
			out.push('}');
		}
	}
	Ok(())
}

/// Depth of the children of a container opened at `depth`.
fn enter(depth: usize, config: &DumpConfig) -> Result<usize> {
	let inner = depth + 1;
	if let Some(max_depth) = config.max_depth
		&& inner > max_depth
	{
		bail!(JsonError::Serialization(format!(
			"nesting depth {inner} exceeds the maximum of {max_depth}"
		)));
	}
	Ok(inner)
}

fn write_newline(out: &mut String, depth: usize, config: &DumpConfig) {
	if config.is_pretty() {
		out.push('\n');
		out.push_str(&" ".repeat(depth * config.indent));
	}
}

fn write_string(out: &mut String, text: &str, config: &DumpConfig) {
	out.push('"');
	if config.escape_strings {
		push_escaped(out, text);
	} else {
		if needs_escaping(text) {
			log::warn!("emitting unescaped string {text:?}, output is not valid JSON");
		}
		out.push_str(text);
	}
	out.push('"');
}

fn needs_escaping(text: &str) -> bool {
	text.chars().any(|c| c == '"' || c == '\\' || c.is_control())
}

fn push_escaped(out: &mut String, input: &str) {
	for c in input.chars() {
		match c {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\u{08}' => out.push_str("\\b"),
			'\u{0c}' => out.push_str("\\f"),
			c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
			c => out.push(c),
		}
	}
}

/// Escape `input` for use inside a JSON string literal (without the surrounding quotes).
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	push_escaped(&mut out, input);
	out
}
