use crate::core::coerce;
use crate::utils::error::{ParamsError, Result};
use serde_json::{Map, Value};

/// Parses a JSON request body. The document must be an object; its entries
/// become the parameter source, with explicit nulls preserved.
pub fn parse_body(body: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ParamsError::malformed("body", format!("invalid JSON: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ParamsError::malformed(
            "body",
            format!("expected a JSON object, got {}", coerce::kind(&other)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ParameterSource;
    use serde_json::json;

    #[test]
    fn test_parse_body_keeps_types_and_nulls() {
        let body = parse_body(r#"{"rowsPerPage": 10, "descending": true, "filters": null}"#).unwrap();
        assert_eq!(ParameterSource::get(&body, "rowsPerPage"), Some(json!(10)));
        assert_eq!(ParameterSource::get(&body, "filters"), Some(Value::Null));
    }

    #[test]
    fn test_parse_body_rejects_non_objects() {
        assert!(parse_body("[1, 2]").is_err());
        assert!(parse_body("not json").is_err());
    }
}
