use crate::domain::ports::ParameterSource;
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use url::{form_urlencoded, Url};

/// Decoded `application/x-www-form-urlencoded` query parameters.
///
/// Repeated keys keep the last value, matching what PHP-style frameworks hand
/// to controllers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let values = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect::<HashMap<_, _>>();
        Self { values }
    }

    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        let values = url.query_pairs().into_owned().collect::<HashMap<_, _>>();
        Ok(Self { values })
    }

    /// Accepts an absolute URL, a request target such as `/items?page=2`, or a
    /// bare query string.
    pub fn from_target(target: &str) -> Result<Self> {
        let target = target.trim();
        if is_absolute_url(target) {
            return Self::from_url(target);
        }
        match target.split_once('?') {
            Some((_, query)) => Ok(Self::parse(query)),
            None if target.starts_with('/') => Ok(Self::default()),
            None => Ok(Self::parse(target)),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `scheme://` before any `?`; query values may themselves contain URLs.
fn is_absolute_url(target: &str) -> bool {
    let before_query = target.split('?').next().unwrap_or(target);
    match before_query.split_once("://") {
        Some((scheme, _)) => {
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

impl ParameterSource for QueryParams {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).map(|v| Value::String(v.clone()))
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}
