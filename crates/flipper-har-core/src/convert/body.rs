//! Body text helpers: compact dump, JSON pretty-printing, and the image
//! list-wrapper strip.

use serde_json::Value;

use crate::har::{to_compact_string, to_pretty_string};

const BODY_INDENT: usize = 4;

/// One-line JSON text of a raw body value (a string body comes out quoted),
/// laid out as `{"a": 1, "b": "caf\u00e9"}`.
pub fn body_text(body: &Value) -> String {
    to_compact_string(body).unwrap_or_else(|_| body.to_string())
}

/// Pretty-prints a body with 4-space indentation.
///
/// A string body is parsed as JSON first; if it does not parse it is
/// returned unchanged. Structured bodies are printed directly.
pub fn format_json_text(body: &Value) -> String {
    match body {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => to_pretty_string(&parsed, BODY_INDENT).unwrap_or_else(|_| text.clone()),
            Err(err) => {
                tracing::trace!("body is not JSON ({err}); keeping raw text");
                text.clone()
            }
        },
        other => to_pretty_string(other, BODY_INDENT).unwrap_or_else(|_| body_text(other)),
    }
}

/// Image bodies arrive as a one-element list holding a base64 string, which
/// dumps as `["...."]`. Every `["` and `"]` is removed, leaving the payload.
pub fn strip_list_wrapper(text: &str) -> String {
    text.replace("[\"", "").replace("\"]", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_text_is_single_line_json() {
        assert_eq!(body_text(&json!({"a": [1, 2]})), r#"{"a": [1, 2]}"#);
        assert_eq!(body_text(&json!("hi")), r#""hi""#);
        assert_eq!(body_text(&json!("")), r#""""#);
    }

    #[test]
    fn body_text_escapes_non_ascii() {
        assert_eq!(
            body_text(&json!({"a": 1, "b": "caf\u{e9}"})),
            r#"{"a": 1, "b": "caf\u00e9"}"#
        );
        assert_eq!(body_text(&json!("\u{1F600}")), r#""\ud83d\ude00""#);
    }

    #[test]
    fn pretty_escapes_non_ascii() {
        assert_eq!(
            format_json_text(&json!(r#"{"b":"caf\u00e9"}"#)),
            "{\n    \"b\": \"caf\\u00e9\"\n}"
        );
        assert_eq!(
            format_json_text(&json!({"b": "caf\u{e9}"})),
            "{\n    \"b\": \"caf\\u00e9\"\n}"
        );
    }

    #[test]
    fn pretty_prints_json_string() {
        assert_eq!(
            format_json_text(&json!(r#"{"a":1,"b":[true]}"#)),
            "{\n    \"a\": 1,\n    \"b\": [\n        true\n    ]\n}"
        );
    }

    #[test]
    fn pretty_prints_structured_value() {
        assert_eq!(format_json_text(&json!({"a": 1})), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn non_json_text_is_returned_unchanged() {
        assert_eq!(format_json_text(&json!("a=1&b=2")), "a=1&b=2");
        assert_eq!(format_json_text(&json!("")), "");
    }

    #[test]
    fn pretty_round_trips() {
        let original = json!({"user": {"id": 7, "tags": ["x", "y"]}, "ok": null});
        let text = format_json_text(&Value::String(original.to_string()));
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn strips_single_element_list() {
        let dumped = body_text(&json!(["iVBORw0KGgo="]));
        assert_eq!(strip_list_wrapper(&dumped), "iVBORw0KGgo=");
    }

    #[test]
    fn strip_removes_every_occurrence() {
        assert_eq!(strip_list_wrapper(r#"["a","b"]"#), r#"a","b"#);
        assert_eq!(strip_list_wrapper("plain"), "plain");
    }
}
