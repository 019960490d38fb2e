//! JSON file helpers.
//!
//! Patched files are written back with four-space indentation and keep
//! their original key order.
//!
//! # Merge Rules
//!
//! [`spread`] follows object spread semantics: keys of `base` keep their
//! position, keys of `overlay` replace values in place or are appended.
//! Nothing is merged recursively.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{NdxError, Result};
use crate::host::Host;

/// Read and parse a JSON file through the host.
pub fn read_json(host: &mut dyn Host, path: &Path) -> Result<Value> {
    let raw = host.read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| NdxError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a value as JSON indented with four spaces.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| NdxError::Other(e.into()))?;
    String::from_utf8(buf).map_err(|e| NdxError::Other(e.into()))
}

/// Write a value as pretty JSON through the host.
pub fn write_json(host: &mut dyn Host, path: &Path, value: &Value) -> Result<()> {
    let content = to_pretty_json(value)?;
    host.write(path, &content)
}

/// `{...base, ...overlay}` for JSON objects.
///
/// Non-object values contribute no keys, like spreading `undefined`.
pub fn spread(base: &Value, overlay: &Value) -> Value {
    let mut result = Map::new();

    for source in [base, overlay] {
        if let Value::Object(map) = source {
            for (key, value) in map {
                result.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use serde_json::json;

    #[test]
    fn spread_overlay_wins_and_keeps_base_order() {
        let base = json!({"a": 1, "b": 2, "c": 3});
        let overlay = json!({"b": 20, "d": 4});

        let merged = spread(&base, &overlay);

        assert_eq!(merged, json!({"a": 1, "b": 20, "c": 3, "d": 4}));
        let keys: Vec<_> = merged.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn spread_ignores_non_objects() {
        assert_eq!(spread(&Value::Null, &json!({"a": 1})), json!({"a": 1}));
        assert_eq!(spread(&json!({"a": 1}), &json!("text")), json!({"a": 1}));
    }

    #[test]
    fn pretty_json_uses_four_spaces() {
        let out = to_pretty_json(&json!({"include": ["src"]})).unwrap();
        assert_eq!(out, "{\n    \"include\": [\n        \"src\"\n    ]\n}");
    }

    #[test]
    fn read_json_reports_parse_errors_with_path() {
        let mut host = MockHost::new().with_file("tsconfig.json", "{ not json");

        let err = read_json(&mut host, Path::new("tsconfig.json")).unwrap_err();

        match err {
            NdxError::JsonParse { path, .. } => assert_eq!(path, Path::new("tsconfig.json")),
            other => panic!("Expected JsonParse, got {other:?}"),
        }
    }

    #[test]
    fn write_json_round_trips_through_host() {
        let mut host = MockHost::new();
        let value = json!({"name": "pkg", "version": "1.0.0"});

        write_json(&mut host, Path::new("package.json"), &value).unwrap();

        assert_eq!(read_json(&mut host, Path::new("package.json")).unwrap(), value);
    }
}
