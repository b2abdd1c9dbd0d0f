use crate::utils::error::{ParamsError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ParamsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ParamsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects the first value that appears twice in `values`.
pub fn validate_distinct(field_name: &str, values: &[&str]) -> Result<()> {
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(*value) {
            return Err(ParamsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Each parameter must use a different name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("pagination.max_rows_per_page", 5, 1).is_ok());
        assert!(validate_positive_number("pagination.max_rows_per_page", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("keys.filters", "filters").is_ok());
        assert!(validate_non_empty_string("keys.filters", "   ").is_err());
    }

    #[test]
    fn test_validate_distinct() {
        assert!(validate_distinct("keys", &["filters", "sortBy", "page"]).is_ok());

        let err = validate_distinct("keys", &["filters", "page", "page"]).unwrap_err();
        match err {
            ParamsError::InvalidConfigValueError { value, .. } => assert_eq!(value, "page"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
