//! Objects bound to a form and the values read from them.

use serde_json::{Map, Value};

use crate::path::PropertyPath;

/// A data source for field values in an edit context.
///
/// Implemented for JSON values so any `Serialize` model can be bound
/// through `serde_json::to_value`.
pub trait BoundObject {
    /// Returns the top-level property `name`, if present.
    fn field(&self, name: &str) -> Option<Value>;
}

impl BoundObject for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name)).cloned()
    }
}

impl BoundObject for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Reads the value for column `name` from `object`.
///
/// A property named exactly `name` wins; otherwise bracketed names are
/// walked segment by segment. Missing or null steps yield `Value::Null`.
pub fn lookup(object: &dyn BoundObject, name: &str) -> Value {
    if let Some(value) = object.field(name).filter(|v| !v.is_null()) {
        return value;
    }

    let path = PropertyPath::parse(name);
    if !path.is_nested() {
        return path
            .segments()
            .first()
            .filter(|segment| segment.as_str() != name)
            .and_then(|segment| object.field(segment))
            .unwrap_or(Value::Null);
    }

    let Some(root) = path.segments().first().and_then(|s| object.field(s)) else {
        return Value::Null;
    };

    path.tail().resolve(&root).cloned().unwrap_or(Value::Null)
}

/// Renders a value as attribute or element text.
///
/// Booleans follow the form convention of `1` for true and the empty
/// string for false.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Returns whether `value` equals `candidate` or, for arrays, contains it.
///
/// Array items that are objects are compared through their `key` property.
pub fn value_matches(value: &Value, candidate: &str, key: Option<&str>) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => items.iter().any(|item| match (item, key) {
            (Value::Object(row), Some(key)) => row
                .get(key)
                .is_some_and(|v| display_value(v) == candidate),
            _ => display_value(item) == candidate,
        }),
        _ => display_value(value) == candidate,
    }
}

/// Returns whether a value marks a single checkbox as checked.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !matches!(s.as_str(), "" | "0" | "false" | "off"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_top_level() {
        let user = json!({"name": "Ada", "age": 36});
        assert_eq!(lookup(&user, "name"), json!("Ada"));
        assert_eq!(lookup(&user, "age"), json!(36));
        assert_eq!(lookup(&user, "missing"), Value::Null);
    }

    #[test]
    fn test_lookup_nested() {
        let user = json!({"meta": {"user": {"phone": "555-0100"}}});
        assert_eq!(lookup(&user, "meta[user][phone]"), json!("555-0100"));
    }

    #[test]
    fn test_lookup_null_intermediate() {
        let user = json!({"meta": {"user": null}});
        assert_eq!(lookup(&user, "meta[user][phone]"), Value::Null);

        let user = json!({"meta": null});
        assert_eq!(lookup(&user, "meta[user][phone]"), Value::Null);
    }

    #[test]
    fn test_lookup_exact_name_wins() {
        let user = json!({"meta[user]": "flat", "meta": {"user": "nested"}});
        assert_eq!(lookup(&user, "meta[user]"), json!("flat"));
    }

    #[test]
    fn test_lookup_array_handle() {
        let user = json!({"roles": [1, 2]});
        assert_eq!(lookup(&user, "roles[]"), json!([1, 2]));
    }

    #[test]
    fn test_lookup_on_map() {
        let mut map = Map::new();
        map.insert("email".to_string(), json!("ada@example.com"));
        assert_eq!(lookup(&map, "email"), json!("ada@example.com"));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!(true)), "1");
        assert_eq!(display_value(&json!(false)), "");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!("x")), "x");
    }

    #[test]
    fn test_value_matches() {
        assert!(value_matches(&json!("a"), "a", None));
        assert!(value_matches(&json!(2), "2", None));
        assert!(value_matches(&json!(["a", "b"]), "b", None));
        assert!(value_matches(&json!([{"id": 3}]), "3", Some("id")));
        assert!(!value_matches(&Value::Null, "", None));
        assert!(!value_matches(&json!("a"), "b", None));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("on")));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!("0")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&Value::Null));
    }
}
