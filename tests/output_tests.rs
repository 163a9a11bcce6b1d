// tests/output_tests.rs

use flume_lang::output::{to_json, to_json_pretty, to_source};
use flume_lang::{parse, parse_or_panic};
use serde_json::json;

fn round_trips(source: &str) {
    let expr = parse_or_panic(source);
    let printed = to_source(&expr);
    let reparsed = parse_or_panic(&printed);
    assert_eq!(expr, reparsed, "source {:?} printed as {:?}", source, printed);
}

// ============================================================================
// Source Round-Trips
// ============================================================================

#[test]
fn test_literals_round_trip() {
    for source in ["1", "3.5", r#""hi""#, "true", "false", "null"] {
        round_trips(source);
    }
}

#[test]
fn test_string_escapes_round_trip() {
    round_trips(r#""line\nbreak \"quoted\" back\\slash""#);
}

#[test]
fn test_references_round_trip() {
    for source in ["somefn", "@", "@.hello.there", "there.is.much.to.learn"] {
        round_trips(source);
    }
}

#[test]
fn test_collections_round_trip() {
    for source in ["[1, 2, 3]", "[]", "{}", r#"{"a": 1, "b": [x, y]}"#] {
        round_trips(source);
    }
}

#[test]
fn test_applications_and_pipelines_round_trip() {
    for source in [
        "sup nernd hi",
        "sup nernd | hi there",
        "hello | (there | hi) | (whatup)",
        "sup (nernd | hi) there",
        "(compose f g) x",
        "[a | b, c]",
    ] {
        round_trips(source);
    }
}

#[test]
fn test_printed_form_is_canonical() {
    // Grouping parens that carry no information disappear
    assert_eq!(to_source(&parse_or_panic("((((hello))))")), "hello");
    // Needed parens survive
    assert_eq!(
        to_source(&parse_or_panic("hello|(there|hi)")),
        "hello | (there | hi)"
    );
    assert_eq!(
        to_source(&parse_or_panic("sup nernd|hi there")),
        "sup nernd | hi there"
    );
}

#[test]
fn test_whole_numbers_print_without_fraction() {
    assert_eq!(to_source(&parse_or_panic("100")), "100");
    assert_eq!(to_source(&parse_or_panic("1.5")), "1.5");
}

// ============================================================================
// JSON Description
// ============================================================================

#[test]
fn test_json_literal_shape() {
    let dumped: serde_json::Value =
        serde_json::from_str(&to_json(&parse_or_panic("1"))).unwrap();
    assert_eq!(
        dumped,
        json!({"type": "literal", "valueType": "number", "value": 1.0})
    );
}

#[test]
fn test_json_reference_is_path_based() {
    let dumped: serde_json::Value =
        serde_json::from_str(&to_json(&parse_or_panic("@.hello.there"))).unwrap();
    assert_eq!(
        dumped,
        json!({"type": "reference", "path": ["@", "hello", "there"]})
    );
}

#[test]
fn test_json_application_shape() {
    let dumped: serde_json::Value =
        serde_json::from_str(&to_json(&parse_or_panic("sup nernd"))).unwrap();
    assert_eq!(
        dumped,
        json!({
            "type": "application",
            "function": {"type": "reference", "path": ["sup"]},
            "arguments": [{"type": "reference", "path": ["nernd"]}],
        })
    );
}

#[test]
fn test_json_pipeline_shape() {
    let dumped: serde_json::Value =
        serde_json::from_str(&to_json(&parse_or_panic("a | b"))).unwrap();
    assert_eq!(
        dumped,
        json!({
            "type": "pipeline",
            "stages": [
                {"type": "reference", "path": ["a"]},
                {"type": "reference", "path": ["b"]},
            ],
        })
    );
}

#[test]
fn test_json_object_literal_nests_descriptions() {
    let dumped: serde_json::Value =
        serde_json::from_str(&to_json(&parse_or_panic(r#"{"k": v}"#))).unwrap();
    assert_eq!(
        dumped,
        json!({
            "type": "literal",
            "valueType": "object",
            "value": {"k": {"type": "reference", "path": ["v"]}},
        })
    );
}

#[test]
fn test_pretty_json_parses_to_the_same_value() {
    let expr = parse_or_panic("hello | there hi");
    let compact: serde_json::Value = serde_json::from_str(&to_json(&expr)).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&to_json_pretty(&expr)).unwrap();
    assert_eq!(compact, pretty);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_reparsing_identical_source_is_deterministic() {
    let source = r#"load "users.json" | filter {"active": true} | map @.name"#;
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    assert_eq!(to_json(&parse_or_panic(source)), to_json(&parse_or_panic(source)));
}
