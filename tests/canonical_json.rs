use canonical_json::{canonical_json, canonicalize_value, is_canonical, CanonicalError};
use serde_json::json;

#[test]
fn sorts_top_level_keys() {
    assert_eq!(canonical_json(r#"{"b":2,"a":1}"#).unwrap(), r#"{"a":1,"b":2}"#);
}

#[test]
fn leaves_arrays_untouched() {
    assert_eq!(canonical_json(r#"{"a":[3,1,2]}"#).unwrap(), r#"{"a":[3,1,2]}"#);
}

#[test]
fn sorts_nested_objects() {
    assert_eq!(
        canonical_json(r#"{"z":{"y":1,"x":2},"a":0}"#).unwrap(),
        r#"{"a":0,"z":{"x":2,"y":1}}"#
    );
}

#[test]
fn keeps_non_ascii_unescaped() {
    assert_eq!(canonical_json(r#"{"a":"héllo"}"#).unwrap(), r#"{"a":"héllo"}"#);
    assert_eq!(canonical_json(r#"{"a":"h\u00e9llo"}"#).unwrap(), r#"{"a":"héllo"}"#);
}

#[test]
fn last_duplicate_wins() {
    assert_eq!(canonical_json(r#"{"a":1,"a":2}"#).unwrap(), r#"{"a":2}"#);
    assert_eq!(
        canonical_json(r#"{"a":{"x":1},"b":0,"a":{"y":2}}"#).unwrap(),
        r#"{"a":{"y":2},"b":0}"#
    );
}

#[test]
fn rejects_malformed_input() {
    assert!(matches!(
        canonical_json(r#"{"a":}"#),
        Err(CanonicalError::Parse { .. })
    ));
    assert!(matches!(canonical_json(""), Err(CanonicalError::Parse { .. })));
    assert!(matches!(
        canonical_json(r#"{"a":1} trailing"#),
        Err(CanonicalError::Parse { .. })
    ));
    assert!(matches!(
        canonical_json(r#"{"a":Infinity}"#),
        Err(CanonicalError::Parse { .. })
    ));
}

#[test]
fn rejects_deep_nesting() {
    let deep = format!("{}{}", "[".repeat(65), "]".repeat(65));
    assert_eq!(
        canonical_json(&deep),
        Err(CanonicalError::DepthExceeded { limit: 64 })
    );

    let ok = format!("{}{}", "[".repeat(64), "]".repeat(64));
    assert_eq!(canonical_json(&ok).unwrap(), ok);
}

#[test]
fn scalar_documents() {
    assert_eq!(canonical_json(" null ").unwrap(), "null");
    assert_eq!(canonical_json("true").unwrap(), "true");
    assert_eq!(canonical_json("\"x\"").unwrap(), "\"x\"");
    assert_eq!(canonical_json("2.50").unwrap(), "2.5");
}

#[test]
fn no_trailing_newline() {
    let output = canonical_json("{\"a\": 1}\n").unwrap();
    assert!(!output.ends_with('\n'));
}

#[test]
fn mixed_document() {
    let input = r#"
    {
        "version": 2,
        "data": {"ratio": 0.5, "big": 98765432109876543210, "tiny": 1e-9},
        "tags": ["b", "a"],
        "empty": {},
        "none": null
    }"#;
    assert_eq!(
        canonical_json(input).unwrap(),
        r#"{"data":{"big":98765432109876543210,"ratio":0.5,"tiny":1e-09},"empty":{},"none":null,"tags":["b","a"],"version":2}"#
    );
}

#[test]
fn canonicalizes_serde_values() {
    let value = json!({"b": [{"d": 1, "c": 2}], "a": "é"});
    assert_eq!(
        canonicalize_value(&value).unwrap(),
        r#"{"a":"é","b":[{"c":2,"d":1}]}"#
    );
}

#[test]
fn detects_canonical_text() {
    assert!(is_canonical(r#"{"a":[1,{"b":2}]}"#).unwrap());
    assert!(!is_canonical(r#"{"a":[1,{"b":2}]} "#).unwrap());
}

#[test]
fn serde_json_keeps_literals_and_insertion_order() {
    let value = json!({"b": 1, "a": 2});
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["b", "a"]);

    let one: serde_json::Value = serde_json::from_str("1.0").unwrap();
    let one_again: serde_json::Value = serde_json::from_str("1.00").unwrap();
    assert_ne!(one, one_again);
    assert_eq!(canonicalize_value(&one).unwrap(), canonicalize_value(&one_again).unwrap());
}
