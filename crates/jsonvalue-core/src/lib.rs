//! # jsonvalue-core
//!
//! A small, self-contained JSON document model with a recursive-descent
//! **reader** and a compact, deterministic **writer**.
//!
//! Every document node is a [`Value`]: `null`, `undefined`, a boolean, a
//! number (always `f64`), a string, an array, or an object whose members are
//! kept in sorted key order. Output never contains whitespace, so two equal
//! trees always serialize to the same bytes.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonvalue_core::{parse, serialize, Value};
//!
//! // text → Value
//! let value = parse(r#"{ "b": [1, 2.5], "a": "x" }"#).unwrap();
//! assert_eq!(value["b"].len(), 2);
//! assert!(value["missing"].is_undefined());
//!
//! // Value → text (keys sorted, no whitespace, fixed-point fractions)
//! assert_eq!(serialize(&value), r#"{"a":"x","b":[1,2.500000]}"#);
//!
//! // Build a tree by hand
//! let mut doc = Value::object();
//! doc.insert("name", "Alice");
//! doc.insert("tags", Value::from(vec![Value::from("rust")]));
//! assert_eq!(doc.to_string(), r#"{"name":"Alice","tags":["rust"]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree, factories, accessors and mutation
//! - [`reader`] — text → `Value` (with [`ReaderConfig`] for depth limits)
//! - [`writer`] — `Value` → compact text
//! - [`path`] — dotted-path lookup (`"servers.0.host"`)
//! - [`interop`] — `serde` / `serde_json` bridging
//! - [`unicode`] — codepoint → UTF-8 helper used by `\uXXXX` escapes
//! - [`error`] — parse error types

pub mod error;
pub mod interop;
pub mod path;
pub mod reader;
pub mod unicode;
pub mod value;
pub mod writer;

pub use error::{ErrorKind, JsonError, Result};
pub use path::lookup;
pub use reader::{parse, parse_with, ReaderConfig};
pub use value::{Map, Value, ValueType};
pub use writer::{serialize, write_to};
