use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

pub const FILTERS: &str = "filters";
pub const SORT_BY: &str = "sortBy";
pub const LIMIT: &str = "limit";
pub const OFFSET: &str = "offset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

/// Canonical list-endpoint parameters: decoded filters, an optional single-field
/// sort and a limit/offset window.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedParams {
    filters: Map<String, Value>,
    sort: Option<Sort>,
    limit: Option<u64>,
    offset: u64,
}

impl NormalizedParams {
    pub(crate) fn new(
        filters: Map<String, Value>,
        sort: Option<Sort>,
        limit: Option<u64>,
        offset: u64,
    ) -> Self {
        Self {
            filters,
            sort,
            limit,
            offset,
        }
    }

    pub fn filters(&self) -> &Map<String, Value> {
        &self.filters
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// `None` means unbounded.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// `{field: "ASC"|"DESC"}`, or an empty object when no sort was requested.
    pub fn sort_by(&self) -> Map<String, Value> {
        let mut sort_by = Map::new();
        if let Some(sort) = &self.sort {
            sort_by.insert(
                sort.field.clone(),
                Value::String(sort.direction.as_str().to_string()),
            );
        }
        sort_by
    }

    /// Looks up one of the canonical keys. An unbounded limit is `Some(Value::Null)`;
    /// keys outside `filters`, `sortBy`, `limit` and `offset` return `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            FILTERS => Some(Value::Object(self.filters.clone())),
            SORT_BY => Some(Value::Object(self.sort_by())),
            LIMIT => Some(self.limit.map_or(Value::Null, Value::from)),
            OFFSET => Some(Value::from(self.offset)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for key in [FILTERS, SORT_BY, LIMIT, OFFSET] {
            if let Some(value) = self.get(key) {
                map.insert(key.to_string(), value);
            }
        }
        Value::Object(map)
    }
}

impl Serialize for NormalizedParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
