//! RFC 6901 JSON Pointer lookups over quality-gate documents.

use serde_json::Value;

pub(crate) const STATUS: &str = "/projectStatus/status";
pub(crate) const CONDITIONS: &str = "/projectStatus/conditions";

/// Resolve a JSON Pointer against a JSON value.
///
/// - `""` is the whole document
/// - `"/projectStatus/status"` walks object keys
/// - `"/projectStatus/conditions/0"` indexes into arrays
/// - `~1` and `~0` unescape to `/` and `~`
///
/// ```
/// use serde_json::json;
/// use sqreport_gate::resolve_pointer;
///
/// let doc = json!({"projectStatus": {"status": "OK"}});
/// assert_eq!(resolve_pointer(&doc, "/projectStatus/status"), Some(&json!("OK")));
/// ```
pub fn resolve_pointer<'a>(value: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return Some(value);
    }
    let rest = pointer.strip_prefix('/')?;

    let mut current = value;
    for token in rest.split('/') {
        let token = unescape_token(token);
        current = match current {
            Value::Object(map) => map.get(&token)?,
            Value::Array(items) => items.get(token.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Render a scalar as text. Objects, arrays and null yield `None`.
pub(crate) fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_pointer_is_document() {
        let doc = json!({"projectStatus": {}});
        assert_eq!(resolve_pointer(&doc, ""), Some(&doc));
    }

    #[test]
    fn walks_objects_and_arrays() {
        let doc = json!({"projectStatus": {"conditions": [{"metricKey": "coverage"}]}});
        assert_eq!(
            resolve_pointer(&doc, "/projectStatus/conditions/0/metricKey"),
            Some(&json!("coverage"))
        );
        assert_eq!(resolve_pointer(&doc, "/projectStatus/conditions/1"), None);
    }

    #[test]
    fn escaped_tokens() {
        let doc = json!({"a/b": {"c~d": 1}});
        assert_eq!(resolve_pointer(&doc, "/a~1b/c~0d"), Some(&json!(1)));
    }

    #[test]
    fn pointer_without_slash_is_none() {
        let doc = json!({"projectStatus": 1});
        assert_eq!(resolve_pointer(&doc, "projectStatus"), None);
    }

    #[test]
    fn scalar_text_stringifies_scalars_only() {
        assert_eq!(scalar_text(Some(&json!("40.0"))), Some("40.0".into()));
        assert_eq!(scalar_text(Some(&json!(40))), Some("40".into()));
        assert_eq!(scalar_text(Some(&json!(false))), Some("false".into()));
        assert_eq!(scalar_text(Some(&json!(null))), None);
        assert_eq!(scalar_text(Some(&json!([1]))), None);
        assert_eq!(scalar_text(None), None);
    }
}
