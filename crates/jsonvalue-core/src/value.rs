//! The JSON document value tree.
//!
//! A [`Value`] owns its children outright, so dropping a value tears down the
//! whole subtree and cycles cannot be built. Objects use a `BTreeMap`, which
//! gives unique keys (last insert wins) and sorted iteration, so the writer's
//! output is deterministic regardless of how a tree was assembled.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::JsonError;

/// Object member storage: unique keys, iterated in sorted order.
pub type Map = BTreeMap<String, Value>;

/// Shared sentinel returned by reference from failed lookups.
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A JSON document node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value. Never produced by the reader; returned by failed key
    /// lookups and by `Value::default()`. Writes as nothing.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    /// All numbers are stored as `f64`; integral output is decided when writing.
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Undefined => "undefined",
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    pub fn null() -> Self {
        Value::Null
    }

    pub fn undefined() -> Self {
        Value::Undefined
    }

    pub fn boolean(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// An empty array, ready to be filled with [`Value::push`].
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// An empty object, ready to be filled with [`Value::insert`].
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    // ------------------------------------------------------------------
    // Tag inspection
    // ------------------------------------------------------------------

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Undefined => ValueType::Undefined,
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    // ------------------------------------------------------------------
    // Payload accessors
    // ------------------------------------------------------------------

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The number truncated toward zero, saturating at the `i64` bounds.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Look up an object member. Returns `None` for missing keys and for
    /// values that are not objects; `value[key]` returns `Undefined` instead.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|members| members.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|members| members.get_mut(key))
    }

    /// Look up an array element without panicking on out-of-range indices.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Number of elements (array) or members (object); zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append an element to an array.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an array.
    pub fn push(&mut self, value: impl Into<Value>) {
        match self {
            Value::Array(items) => items.push(value.into()),
            other => panic!("cannot push onto a JSON {}", other.type_name()),
        }
    }

    /// Insert or overwrite an object member, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an object.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        match self {
            Value::Object(members) => members.insert(key.into(), value.into()),
            other => panic!("cannot insert a member into a JSON {}", other.type_name()),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Missing keys, and keys on non-objects, yield `Value::Undefined`.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&UNDEFINED)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `self` is not an array or `index` is out of range.
    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => &items[index],
            other => panic!("cannot index into a JSON {} by position", other.type_name()),
        }
    }
}

impl fmt::Display for Value {
    /// Compact JSON, identical to [`crate::writer::serialize`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::writer::write_to(self, &mut out);
        f.write_str(&out)
    }
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::reader::parse(s)
    }
}

// ----------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    /// Values beyond ±2^53 lose precision.
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(members: Map) -> Self {
        Value::Object(members)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_undefined() {
        assert!(Value::default().is_undefined());
        assert_ne!(Value::default(), Value::Null);
    }

    #[test]
    fn factories_set_tags() {
        assert_eq!(Value::null().value_type(), ValueType::Null);
        assert_eq!(Value::boolean(true).value_type(), ValueType::Boolean);
        assert_eq!(Value::number(1.5).value_type(), ValueType::Number);
        assert_eq!(Value::string("s").value_type(), ValueType::String);
        assert_eq!(Value::array().value_type(), ValueType::Array);
        assert_eq!(Value::object().value_type(), ValueType::Object);
    }

    #[test]
    fn accessors_reject_other_tags() {
        let v = Value::from("text");
        assert_eq!(v.as_str(), Some("text"));
        assert_eq!(v.as_f64(), None);
        assert_eq!(v.as_bool(), None);
        assert!(v.as_array().is_none());
        assert!(v.as_object().is_none());
    }

    #[test]
    fn as_i64_truncates() {
        assert_eq!(Value::from(3.9).as_i64(), Some(3));
        assert_eq!(Value::from(-3.9).as_i64(), Some(-3));
    }

    #[test]
    fn insert_overwrites_and_returns_previous() {
        let mut obj = Value::object();
        assert_eq!(obj.insert("a", 1), None);
        assert_eq!(obj.insert("a", 2), Some(Value::Number(1.0)));
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["a"], Value::Number(2.0));
    }

    #[test]
    fn missing_key_is_undefined() {
        let obj = Value::object();
        assert!(obj["nope"].is_undefined());
        assert!(Value::from(1)["nope"].is_undefined());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let arr = Value::array();
        let _ = &arr[0];
    }

    #[test]
    #[should_panic(expected = "cannot push onto a JSON object")]
    fn push_on_object_panics() {
        Value::object().push(1);
    }

    #[test]
    fn collect_into_containers() {
        let arr: Value = (1..=3).map(Value::from).collect();
        assert_eq!(arr.len(), 3);

        let obj: Value = vec![("b", Value::from(2)), ("a", Value::from(1))]
            .into_iter()
            .collect();
        let keys: Vec<&String> = obj.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }
}
