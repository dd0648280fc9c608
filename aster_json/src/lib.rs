//! A dynamically-typed JSON value that can be built up incrementally and rendered as
//! compact or indented JSON text.
//!
//! # Examples
//!
//! ```rust
//! use aster_json::JsonValue;
//!
//! let mut json = JsonValue::default();
//! json.set("null", ())?;
//! json.set("bool", true)?;
//! json.set("int", 123)?;
//! json.key_mut("array")?.push(1)?;
//! json.key_mut("array")?.push(2)?;
//!
//! assert_eq!(json.dump(0)?, r#"{"array":[1,2],"bool":true,"int":123,"null":null}"#);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod json;
pub mod macros;

pub use config::DumpConfig;
pub use json::*;
