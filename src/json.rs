//! JSON input adapter: validate preference data that arrives as
//! [`serde_json::Value`] — request bodies, web-origin settings, anything a
//! browser or API hands over.
//!
//! JSON `null` has no TOML counterpart; it maps to the unset arm of the field
//! sum, so a `null` field defaults exactly like a missing one.

use serde_json::Value as Json;
use toml::{Table, Value};

use crate::spec::Spec;

/// Convert a JSON value into a TOML value.
///
/// `null` converts to `None`. Null-valued object entries are omitted and
/// nulls inside arrays are dropped. Numbers become `Integer` when they fit
/// `i64`, otherwise `Float`.
pub fn from_json(json: &Json) -> Option<Value> {
    match json {
        Json::Null => None,
        Json::Bool(b) => Some(Value::Boolean(*b)),
        Json::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Some(Value::Integer(i)),
            (None, Some(f)) => Some(Value::Float(f)),
            // Unreachable without serde_json's arbitrary-precision feature.
            (None, None) => None,
        },
        Json::String(s) => Some(Value::String(s.clone())),
        Json::Array(items) => Some(Value::Array(items.iter().filter_map(from_json).collect())),
        Json::Object(entries) => {
            let mut table = Table::new();
            for (key, value) in entries {
                if let Some(converted) = from_json(value) {
                    table.insert(key.clone(), converted);
                }
            }
            Some(Value::Table(table))
        }
    }
}

/// Validate a JSON value against `spec`.
///
/// Non-object JSON — including `null` — degrades to the all-defaults table,
/// the same contract [`Spec::validate`] applies to non-table TOML input.
pub fn validate_json(spec: &Spec, json: &Json) -> Table {
    match from_json(json) {
        Some(value) => spec.validate(&value),
        None => spec.defaults(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fixtures::test::prefs_spec;

    #[test]
    fn null_converts_to_unset() {
        assert_eq!(from_json(&Json::Null), None);
    }

    #[test]
    fn scalars_convert_directly() {
        assert_eq!(from_json(&json!(true)), Some(Value::Boolean(true)));
        assert_eq!(from_json(&json!("hi")), Some(Value::String("hi".into())));
        assert_eq!(from_json(&json!(42)), Some(Value::Integer(42)));
        assert_eq!(from_json(&json!(2.5)), Some(Value::Float(2.5)));
    }

    #[test]
    fn integers_beyond_i64_become_floats() {
        let converted = from_json(&json!(u64::MAX)).unwrap();
        assert!(matches!(converted, Value::Float(_)));
    }

    #[test]
    fn arrays_drop_nulls() {
        let converted = from_json(&json!([1, null, 3])).unwrap();
        assert_eq!(
            converted,
            Value::Array(vec![Value::Integer(1), Value::Integer(3)])
        );
    }

    #[test]
    fn objects_omit_null_entries() {
        let converted = from_json(&json!({"keep": 1, "drop": null})).unwrap();
        let table = converted.as_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["keep"].as_integer(), Some(1));
    }

    #[test]
    fn nested_objects_convert_recursively() {
        let converted = from_json(&json!({"editor": {"tab_width": 4}})).unwrap();
        assert_eq!(converted["editor"]["tab_width"].as_integer(), Some(4));
    }

    #[test]
    fn validate_json_applies_the_spec() {
        let out = validate_json(
            &prefs_spec(),
            &json!({"theme": "light", "font_size": "huge", "accent": "#f0f"}),
        );
        assert_eq!(out["theme"].as_str(), Some("light"));
        assert_eq!(out["font_size"].as_integer(), Some(13));
        assert!(!out.contains_key("accent"));
    }

    #[test]
    fn validate_json_null_field_defaults_like_a_missing_one() {
        let spec = prefs_spec();
        let with_null = validate_json(&spec, &json!({"theme": null}));
        let without = validate_json(&spec, &json!({}));
        assert_eq!(with_null, without);
    }

    #[test]
    fn validate_json_non_object_top_level_defaults_entirely() {
        let spec = prefs_spec();
        let expected = spec.defaults();
        for input in [json!(null), json!("garbage"), json!(7), json!([1, 2])] {
            assert_eq!(validate_json(&spec, &input), expected, "input: {input}");
        }
    }
}
