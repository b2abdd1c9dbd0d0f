use crate::core::coerce;
use crate::domain::model::{NormalizedParams, Sort, SortDirection};
use crate::domain::ports::ParameterSource;
use crate::utils::error::{ParamsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Names under which the raw parameters are looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamKeys {
    pub filters: String,
    pub sort_by: String,
    pub descending: String,
    pub rows_per_page: String,
    pub page: String,
}

impl Default for ParamKeys {
    fn default() -> Self {
        Self {
            filters: "filters".to_string(),
            sort_by: "sortBy".to_string(),
            descending: "descending".to_string(),
            rows_per_page: "rowsPerPage".to_string(),
            page: "page".to_string(),
        }
    }
}

impl ParamKeys {
    pub fn as_array(&self) -> [&str; 5] {
        [
            self.filters.as_str(),
            self.sort_by.as_str(),
            self.descending.as_str(),
            self.rows_per_page.as_str(),
            self.page.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsNormalizer {
    keys: ParamKeys,
    max_rows_per_page: Option<u64>,
}

impl ParamsNormalizer {
    pub fn new(keys: ParamKeys, max_rows_per_page: Option<u64>) -> Self {
        Self {
            keys,
            max_rows_per_page,
        }
    }

    pub fn keys(&self) -> &ParamKeys {
        &self.keys
    }

    pub fn max_rows_per_page(&self) -> Option<u64> {
        self.max_rows_per_page
    }

    /// Reads filters, sort and pagination from `source`.
    ///
    /// `descending` is only read once a sort field is present and `page` only
    /// once `rowsPerPage` is positive. The only failure is a `filters` value
    /// that is null or not a JSON object.
    pub fn normalize<S: ParameterSource + ?Sized>(&self, source: &S) -> Result<NormalizedParams> {
        let filters = self.resolve_filters(source)?;
        let sort = self.resolve_sort(source);
        let (limit, offset) = self.resolve_window(source);

        tracing::debug!(
            filters = filters.len(),
            sort = ?sort,
            limit = ?limit,
            offset,
            "Normalized request parameters"
        );

        Ok(NormalizedParams::new(filters, sort, limit, offset))
    }

    fn resolve_filters<S: ParameterSource + ?Sized>(&self, source: &S) -> Result<Map<String, Value>> {
        let key = self.keys.filters.as_str();
        match source.get_or(key, Value::String(String::new())) {
            Value::String(raw) => decode_filters(key, &raw),
            // Typed JSON bodies may hand over the object already decoded.
            Value::Object(map) => Ok(map),
            other => Err(ParamsError::malformed(
                key,
                format!("expected a JSON object string, got {}", coerce::kind(&other)),
            )),
        }
    }

    fn resolve_sort<S: ParameterSource + ?Sized>(&self, source: &S) -> Option<Sort> {
        let field = source
            .get(&self.keys.sort_by)
            .as_ref()
            .and_then(coerce::as_field_name)?;

        let descending = source
            .get(&self.keys.descending)
            .as_ref()
            .is_some_and(coerce::as_flag);

        Some(Sort {
            field,
            direction: SortDirection::from_descending(descending),
        })
    }

    fn resolve_window<S: ParameterSource + ?Sized>(&self, source: &S) -> (Option<u64>, u64) {
        let rows_per_page = source
            .get(&self.keys.rows_per_page)
            .as_ref()
            .and_then(coerce::as_integer)
            .filter(|rows| *rows > 0);

        let Some(rows_per_page) = rows_per_page else {
            return (None, 0);
        };

        let mut limit = rows_per_page.unsigned_abs();
        if let Some(max) = self.max_rows_per_page {
            if limit > max {
                tracing::warn!(requested = limit, max, "rowsPerPage exceeds the configured maximum, clamping");
                limit = max;
            }
        }

        let page = source
            .get(&self.keys.page)
            .as_ref()
            .and_then(coerce::as_integer)
            .unwrap_or(1);

        let offset = if page > 1 {
            (page.unsigned_abs() - 1).saturating_mul(limit)
        } else {
            0
        };

        (Some(limit), offset)
    }
}

fn decode_filters(key: &str, raw: &str) -> Result<Map<String, Value>> {
    if raw.is_empty() {
        return Ok(Map::new());
    }

    let decoded: Value = serde_json::from_str(raw)
        .map_err(|e| ParamsError::malformed(key, format!("invalid JSON: {}", e)))?;

    match decoded {
        Value::Object(map) => Ok(map),
        other => Err(ParamsError::malformed(
            key,
            format!("expected a JSON object, got {}", coerce::kind(&other)),
        )),
    }
}

impl NormalizedParams {
    /// Normalizes `source` with the canonical key names and no row cap.
    pub fn from_source<S: ParameterSource + ?Sized>(source: &S) -> Result<Self> {
        ParamsNormalizer::default().normalize(source)
    }
}
