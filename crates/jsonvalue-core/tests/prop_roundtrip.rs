/// Property-Based Roundtrip Tests
///
/// Uses the `proptest` crate to generate random `Value` trees and verify that
/// `parse(serialize(v)) == v` holds for all generated inputs.
///
/// Strategies generate:
/// - Arbitrary Unicode strings (including control characters and quotes)
/// - Integral numbers, plus fractions with denominator 64 (these have at most
///   six decimal places, so the fixed-point writer is exact for them)
/// - Booleans and null
/// - Nested arrays and objects up to 4 levels deep
///
/// Excluded by construction: `Undefined` (writes nothing, so it cannot
/// roundtrip) and fractions needing more than six decimal places.
use jsonvalue_core::{parse, serialize, Map, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => (-1_000_000_000i64..1_000_000_000i64).prop_map(|n| Value::Number(n as f64)),
        1 => (-1_000_000i64..1_000_000i64, 0i64..64i64)
            .prop_map(|(whole, sixty_fourths)| Value::Number(whole as f64 + sixty_fourths as f64 / 64.0)),
    ]
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-zA-Z0-9 ]{0,20}",
        prop::string::string_regex("[\"\\\\/\\x00-\\x1f]{0,10}").unwrap(),
        Just("caf\u{e9} \u{4f60}\u{597d} \u{1f600}".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_number(),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map(arb_string(), inner, 0..8)
                .prop_map(|m: Map| Value::Object(m)),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tree_roundtrips(v in arb_value()) {
        let text = serialize(&v);
        let back = parse(&text).expect("writer output must parse");
        prop_assert_eq!(back, v, "via {}", text);
    }

    #[test]
    fn serialization_is_idempotent(v in arb_value()) {
        let once = serialize(&v);
        let twice = serialize(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_valid_json_for_serde(v in arb_value()) {
        let text = serialize(&v);
        let theirs: serde_json::Value = serde_json::from_str(&text).expect("serde_json rejects output");
        prop_assert_eq!(Value::from(theirs), v);
    }

    #[test]
    fn strings_roundtrip_exactly(s in any::<String>()) {
        let text = serialize(&Value::String(s.clone()));
        let back = parse(&text).unwrap();
        prop_assert_eq!(back.as_str(), Some(s.as_str()));
    }

    #[test]
    fn arbitrary_input_never_panics(s in any::<String>()) {
        let _ = parse(&s);
    }

    #[test]
    fn integral_numbers_have_no_fraction(n in -1_000_000_000i64..1_000_000_000i64) {
        prop_assert_eq!(serialize(&Value::Number(n as f64)), n.to_string());
    }
}
