// Adapters layer: concrete parameter sources built from raw request data.

pub mod json;
pub mod query;

pub use query::QueryParams;
