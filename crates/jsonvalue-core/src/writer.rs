//! JSON Writer — converts a [`Value`] tree into compact text.
//!
//! Output is fully compact (no spaces or newlines) and deterministic: object
//! members come out in sorted key order. Writing cannot fail.
//!
//! - **Numbers**: integral values below 2^63 in magnitude are written as plain
//!   integers; everything else uses six-digit fixed-point notation
//!   (`3.5` → `3.500000`), never an exponent. Non-finite numbers write `null`.
//! - **Strings**: `"` `\` and the common control characters get two-character
//!   escapes, other controls become `\u00XX`; everything else, including
//!   non-ASCII text, is written as-is.
//! - **Undefined** writes nothing, even inside a container.
//!
//! # Example
//! ```
//! use jsonvalue_core::{serialize, Value};
//! let mut v = Value::array();
//! v.push(3.0);
//! v.push(3.5);
//! v.push("a\"b");
//! assert_eq!(serialize(&v), r#"[3,3.500000,"a\"b"]"#);
//! ```

use crate::value::{Map, Value};

/// 2^63: the first magnitude that no longer fits a truncating `i64` conversion.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Serialize a value to a new compact JSON string.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_to(value, &mut out);
    out
}

/// Append the compact serialization of `value` to `out`.
///
/// Existing contents of `out` are kept; call `out.clear()` first to reuse one
/// buffer across many documents.
pub fn write_to(value: &Value, out: &mut String) {
    match value {
        Value::Undefined => {}
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => write_array(items, out),
        Value::Object(members) => write_object(members, out),
    }
}

fn write_array(items: &[Value], out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_to(item, out);
    }
    out.push(']');
}

fn write_object(members: &Map, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in members.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        write_to(value, out);
    }
    out.push('}');
}

/// An `f64` is written as an integer when truncating it to `i64` and back
/// gives the same value.
fn write_number(n: f64, out: &mut String) {
    if !n.is_finite() {
        out.push_str("null");
    } else if n.abs() < I64_LIMIT && (n as i64) as f64 == n {
        out.push_str(&format!("{}", n as i64));
    } else {
        out.push_str(&format!("{:.6}", n));
    }
}

fn write_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
