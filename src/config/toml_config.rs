use crate::core::{ParamKeys, ParamsNormalizer};
use crate::utils::error::{ParamsError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub keys: ParamKeys,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub max_rows_per_page: Option<u64>,
}

impl NormalizerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ParamsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_ROWS})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ParamsError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn build_normalizer(&self) -> ParamsNormalizer {
        ParamsNormalizer::new(self.keys.clone(), self.pagination.max_rows_per_page)
    }
}

impl Validate for NormalizerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("keys.filters", &self.keys.filters)?;
        validation::validate_non_empty_string("keys.sort_by", &self.keys.sort_by)?;
        validation::validate_non_empty_string("keys.descending", &self.keys.descending)?;
        validation::validate_non_empty_string("keys.rows_per_page", &self.keys.rows_per_page)?;
        validation::validate_non_empty_string("keys.page", &self.keys.page)?;
        validation::validate_distinct("keys", &self.keys.as_array())?;

        if let Some(max) = self.pagination.max_rows_per_page {
            validation::validate_positive_number("pagination.max_rows_per_page", max, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_canonical_keys() {
        let config = NormalizerConfig::from_toml_str("").unwrap();
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.build_normalizer(), ParamsNormalizer::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_key_overrides() {
        let toml_content = r#"
[keys]
rows_per_page = "perPage"
sort_by = "order"

[pagination]
max_rows_per_page = 100
"#;

        let config = NormalizerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.keys.rows_per_page, "perPage");
        assert_eq!(config.keys.sort_by, "order");
        assert_eq!(config.keys.filters, "filters");
        assert_eq!(config.pagination.max_rows_per_page, Some(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("REQUEST_PARAMS_TEST_MAX_ROWS", "25");

        let toml_content = r#"
[pagination]
max_rows_per_page = ${REQUEST_PARAMS_TEST_MAX_ROWS}
"#;

        let config = NormalizerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.pagination.max_rows_per_page, Some(25));

        std::env::remove_var("REQUEST_PARAMS_TEST_MAX_ROWS");
    }

    #[test]
    fn test_config_validation() {
        let zero_cap = NormalizerConfig::from_toml_str("[pagination]\nmax_rows_per_page = 0\n").unwrap();
        assert!(zero_cap.validate().is_err());

        let clashing = NormalizerConfig::from_toml_str("[keys]\npage = \"filters\"\n").unwrap();
        assert!(clashing.validate().is_err());

        let blank = NormalizerConfig::from_toml_str("[keys]\nsort_by = \" \"\n").unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = NormalizerConfig::from_toml_str("[keys\n").unwrap_err();
        assert!(matches!(err, ParamsError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[keys]\nfilters = \"where\"\n")
            .unwrap();

        let config = NormalizerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.keys.filters, "where");
    }
}
