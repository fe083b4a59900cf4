//! Tests for CLI output formatting helpers
//!
//! Tests the output formatting utilities:
//! - Pretty-printed values
//! - Indentation
//! - Color helpers (respects NO_COLOR)

use jsonsearch::cli::output::{colors, format_value, indent};
use jsonsearch::JsonValue;

/// Test scalars print as plain JSON
#[test]
fn test_format_scalars() {
    assert_eq!(format_value(&JsonValue::Null), "null");
    assert_eq!(format_value(&JsonValue::Integer(-3)), "-3");
    assert_eq!(format_value(&JsonValue::Float(12.9)), "12.9");
    assert_eq!(format_value(&JsonValue::String("a\"b".into())), r#""a\"b""#);
}

/// Test nested values print with sorted members
#[test]
fn test_format_nested() {
    let value = JsonValue::parse(r#"{"z": 1, "a": {"tags": []}}"#).unwrap();
    let text = format_value(&value);
    assert!(text.find("\"a\"").unwrap() < text.find("\"z\"").unwrap());
    assert!(text.contains("\"tags\": []"));
}

/// Test indentation of multi-line text
#[test]
fn test_indent_multiline() {
    let text = format_value(&JsonValue::parse("[1]").unwrap());
    assert_eq!(indent(&text, 2), "  [\n    1\n  ]");
}

/// Test color helpers preserve text
#[test]
fn test_color_helpers_preserve_text() {
    colored::control::set_override(false);
    assert_eq!(colors::document("orgs").to_string(), "orgs");
    assert_eq!(colors::key("_id").to_string(), "_id");
    assert_eq!(colors::number("3").to_string(), "3");
    colored::control::unset_override();
}
