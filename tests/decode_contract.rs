//! Purpose: Lock the public fail-safe decode contract.
//! Exports: Integration tests only.
//! Role: Verify totality, empty-input, and round-trip laws of `decode`.
//! Invariants: `decode` never panics and always yields a JSON object map.
//! Invariants: Malformed inputs collapse to the empty-map sentinel deterministically.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value, json};
use urljson::decode;

fn percent_encode(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}

#[test]
fn empty_input_yields_empty_object() {
    assert_eq!(decode(""), Map::new());
}

#[test]
fn totality_over_hostile_inputs() {
    let cases = [
        "%zz",
        "%",
        "%2",
        "%FF%FE",
        "café",
        "\u{0}binary\u{7f}garbage",
        "{invalid",
        "a=b&c=d",
        "%%%%%%",
        "%7B%7B%7B",
        "++++",
    ];
    for case in cases {
        assert_eq!(decode(case), Map::new(), "input {case:?}");
    }

    let long = "%41".repeat(10_000);
    assert_eq!(decode(&long), Map::new());
}

#[test]
fn round_trip_preserves_keys_and_values() {
    let original = json!({
        "command": "track",
        "attempts": 3,
        "sampled": true,
        "trace": null,
        "payload": {
            "event": "launch",
            "tags": ["a", "b", "c"]
        }
    });
    let encoded = percent_encode(&original.to_string());
    let decoded = decode(&encoded);
    assert_eq!(Value::Object(decoded), original);
}

#[test]
fn unencoded_json_passes_through() {
    let decoded = decode(r#"{"a":1,"b":"two"}"#);
    assert_eq!(decoded.get("a"), Some(&json!(1)));
    assert_eq!(decoded.get("b"), Some(&json!("two")));
}

#[test]
fn plus_decodes_as_space_inside_values() {
    let decoded = decode("%7B%22msg%22%3A%22hello+world%22%7D");
    assert_eq!(decoded.get("msg"), Some(&json!("hello world")));
}

#[test]
fn non_object_top_levels_yield_empty_object() {
    for text in ["[1,2,3]", "\"text\"", "42", "true", "null"] {
        assert_eq!(decode(&percent_encode(text)), Map::new(), "input {text:?}");
    }
}

#[test]
fn malformed_json_yields_empty_object() {
    for text in ["{invalid", "{\"a\":}", "{\"a\" 1}", "}{"] {
        assert_eq!(decode(&percent_encode(text)), Map::new(), "input {text:?}");
    }
}

#[test]
fn failure_is_deterministic_across_calls() {
    for _ in 0..5 {
        assert_eq!(decode("%zz"), Map::new());
        assert_eq!(decode("{invalid"), Map::new());
    }
}
