use serde_json::{Map, Value};
use std::collections::HashMap;

/// Read access to the raw parameters of one request.
///
/// `get` returns `None` when the key is absent and `Some(Value::Null)` when the
/// request explicitly carries a null. Implementations must be side-effect free
/// from the caller's point of view, but the normalizer still only reads the keys
/// it needs.
pub trait ParameterSource {
    fn get(&self, key: &str) -> Option<Value>;

    /// Falls back to `default` only when the key is absent; an explicit null is kept.
    fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn get(&self, key: &str) -> Option<Value> {
        T::get(*self, key)
    }
}

impl ParameterSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<Value> {
        HashMap::get(self, key).map(|v| Value::String(v.clone()))
    }
}

impl ParameterSource for Map<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        Map::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_or_keeps_explicit_null() {
        let mut body = Map::new();
        body.insert("filters".to_string(), Value::Null);

        assert_eq!(body.get_or("filters", json!("")), Value::Null);
        assert_eq!(body.get_or("sortBy", json!("")), json!(""));
    }

    #[test]
    fn test_string_map_yields_strings() {
        let mut query = HashMap::new();
        query.insert("page".to_string(), "2".to_string());

        assert_eq!(ParameterSource::get(&query, "page"), Some(json!("2")));
        assert_eq!(ParameterSource::get(&query, "rowsPerPage"), None);
    }
}
