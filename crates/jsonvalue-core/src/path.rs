//! Dotted-path queries over a [`Value`] tree.
//!
//! # Path syntax
//!
//! - `""` -- the root value itself
//! - `"name"` -- member `name` of the root object
//! - `"servers.0.host"` -- member `host` of the first element of `servers`
//! - `"servers.*.host"` -- with [`select`], `host` of every element
//!
//! A segment indexes an array when it parses as a `usize` and the current
//! value is an array; otherwise it is an object key. Lookups never panic: a
//! missing step yields `Value::Undefined`, the same sentinel `value[key]`
//! returns.

use crate::value::{Value, UNDEFINED};

/// A parsed path, split on dots.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    fn parse(path: &'a str) -> Self {
        if path.is_empty() {
            return Self {
                segments: Vec::new(),
            };
        }
        Self {
            segments: path.split('.').collect(),
        }
    }
}

/// Resolve one segment against one value.
fn step<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(members) => members.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Follow `path` from `root`, returning `Undefined` if any step is missing.
///
/// # Examples
///
/// ```
/// use jsonvalue_core::{lookup, parse};
///
/// let doc = parse(r#"{"servers":[{"host":"a"},{"host":"b"}]}"#).unwrap();
/// assert_eq!(lookup(&doc, "servers.1.host").as_str(), Some("b"));
/// assert!(lookup(&doc, "servers.9.host").is_undefined());
/// ```
pub fn lookup<'v>(root: &'v Value, path: &str) -> &'v Value {
    Path::parse(path)
        .segments
        .iter()
        .try_fold(root, |current, segment| step(current, segment))
        .unwrap_or(&UNDEFINED)
}

/// Collect every value matched by `path`, where a `*` segment matches all
/// elements of an array or all members of an object (in key order).
///
/// Missing steps simply contribute no matches.
pub fn select<'v>(root: &'v Value, path: &str) -> Vec<&'v Value> {
    let parsed = Path::parse(path);
    let mut matches = Vec::new();
    collect(root, &parsed.segments, &mut matches);
    matches
}

fn collect<'v>(value: &'v Value, segments: &[&str], out: &mut Vec<&'v Value>) {
    let Some((first, rest)) = segments.split_first() else {
        out.push(value);
        return;
    };

    if *first == "*" {
        match value {
            Value::Array(items) => items.iter().for_each(|item| collect(item, rest, out)),
            Value::Object(members) => members.values().for_each(|child| collect(child, rest, out)),
            // Wildcards do not match through scalars.
            _ => {}
        }
        return;
    }

    if let Some(child) = step(value, first) {
        collect(child, rest, out);
    }
}

impl Value {
    /// Shorthand for [`lookup`].
    pub fn pointer(&self, path: &str) -> &Value {
        lookup(self, path)
    }
}
