pub mod coerce;
pub mod normalizer;

pub use crate::domain::model::{NormalizedParams, Sort, SortDirection};
pub use crate::domain::ports::ParameterSource;
pub use crate::utils::error::Result;
pub use normalizer::{ParamKeys, ParamsNormalizer};
