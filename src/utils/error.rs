use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Malformed input for '{field}': {reason}")]
    MalformedInput { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ParamsError>;

impl ParamsError {
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        ParamsError::MalformedInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Caller-side errors: the request carried something the normalizer refuses.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ParamsError::MalformedInput { .. } | ParamsError::UrlError(_)
        )
    }

    /// 輸入錯誤 1，配置或 IO 錯誤 2
    pub fn exit_code(&self) -> i32 {
        if self.is_malformed_input() {
            1
        } else {
            2
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ParamsError::MalformedInput { field, reason } => {
                format!("The '{}' parameter could not be read: {}", field, reason)
            }
            ParamsError::ConfigError { message } => {
                format!("The configuration could not be loaded: {}", message)
            }
            ParamsError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' = '{}' is invalid: {}", field, value, reason)
            }
            ParamsError::IoError(e) => format!("Could not read input: {}", e),
            ParamsError::UrlError(e) => format!("The request URL is not valid: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ParamsError::MalformedInput { .. } => {
                "Send filters as a JSON object string (e.g. filters={\"name\":\"x\"}) or leave it empty"
            }
            ParamsError::ConfigError { .. } => "Check that the config file is valid TOML",
            ParamsError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and try again"
            }
            ParamsError::IoError(_) => "Check that the file exists and is readable",
            ParamsError::UrlError(_) => "Pass an absolute URL, a path with '?query', or a bare query string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_classification() {
        let err = ParamsError::malformed("filters", "null is not allowed");
        assert!(err.is_malformed_input());
        assert_eq!(
            err.to_string(),
            "Malformed input for 'filters': null is not allowed"
        );

        let err = ParamsError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_malformed_input());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(ParamsError::malformed("filters", "x").exit_code(), 1);
    }
}
