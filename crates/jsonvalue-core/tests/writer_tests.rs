use jsonvalue_core::{serialize, write_to, Map, Value};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn write_literals() {
    assert_eq!(serialize(&Value::Null), "null");
    assert_eq!(serialize(&Value::Bool(true)), "true");
    assert_eq!(serialize(&Value::Bool(false)), "false");
}

#[test]
fn write_undefined_is_empty() {
    assert_eq!(serialize(&Value::Undefined), "");
}

#[test]
fn write_numbers() {
    assert_eq!(serialize(&Value::from(3.0)), "3");
    assert_eq!(serialize(&Value::from(3.5)), "3.500000");
    assert_eq!(serialize(&Value::from(0)), "0");
    assert_eq!(serialize(&Value::from(-17)), "-17");
    assert_eq!(serialize(&Value::from(2.0f64.powi(53))), "9007199254740992");
    assert_eq!(serialize(&Value::from(1.0 / 3.0)), "0.333333");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn write_quote_and_newline() {
    let v = Value::from("she said \"hi\"\n");
    assert_eq!(serialize(&v), r#""she said \"hi\"\n""#);
}

#[test]
fn write_all_short_escapes() {
    let v = Value::from("\\\u{8}\u{c}\n\r\t");
    assert_eq!(serialize(&v), r#""\\\b\f\n\r\t""#);
}

#[test]
fn solidus_is_not_escaped() {
    assert_eq!(serialize(&Value::from("a/b")), r#""a/b""#);
}

#[test]
fn other_controls_use_u00xx() {
    let v = Value::from("\u{0}\u{b}\u{1b}");
    assert_eq!(serialize(&v), r#""\u0000\u000b\u001b""#);
}

#[test]
fn non_ascii_is_written_raw() {
    let v = Value::from("caf\u{e9} \u{4f60} \u{1f600}");
    assert_eq!(serialize(&v), "\"caf\u{e9} \u{4f60} \u{1f600}\"");
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn write_empty_containers() {
    assert_eq!(serialize(&Value::array()), "[]");
    assert_eq!(serialize(&Value::object()), "{}");
}

#[test]
fn write_array_in_order() {
    let v: Value = vec![Value::from(3), Value::from("x"), Value::Null].into();
    assert_eq!(serialize(&v), r#"[3,"x",null]"#);
}

#[test]
fn object_keys_are_sorted() {
    let mut v = Value::object();
    v.insert("zebra", 1);
    v.insert("apple", 2);
    v.insert("Mango", 3);
    v.insert("", 4);
    assert_eq!(serialize(&v), r#"{"":4,"Mango":3,"apple":2,"zebra":1}"#);
}

#[test]
fn keys_are_escaped() {
    let mut m = Map::new();
    m.insert("a\"b".to_string(), Value::Null);
    assert_eq!(serialize(&Value::Object(m)), r#"{"a\"b":null}"#);
}

#[test]
fn nested_output_is_compact() {
    let mut inner = Value::object();
    inner.insert("list", Value::from(vec![Value::array(), Value::object()]));
    let mut outer = Value::array();
    outer.push(inner);
    outer.push(false);
    let text = serialize(&outer);
    assert_eq!(text, r#"[{"list":[[],{}]},false]"#);
    assert!(!text.contains(' ') && !text.contains('\n'));
}

#[test]
fn undefined_inside_containers_writes_nothing() {
    let v: Value = vec![Value::from(1), Value::Undefined].into();
    assert_eq!(serialize(&v), "[1,]");

    let v: Value = vec![Value::Undefined].into();
    assert_eq!(serialize(&v), "[]");

    let mut o = Value::object();
    o.insert("k", Value::Undefined);
    assert_eq!(serialize(&o), r#"{"k":}"#);
}

#[test]
fn display_matches_serialize() {
    let v = jsonvalue_core::parse(r#"{"b":[1.25,true],"a":"\t"}"#).unwrap();
    assert_eq!(v.to_string(), serialize(&v));
    assert_eq!(format!("{v}"), r#"{"a":"\t","b":[1.250000,true]}"#);
}

#[test]
fn write_to_reuses_buffer() {
    let mut buf = String::new();
    for n in 1..=3 {
        write_to(&Value::from(n), &mut buf);
        buf.push('\n');
    }
    assert_eq!(buf, "1\n2\n3\n");
}
