pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    NormalizedParams, ParamKeys, ParameterSource, ParamsNormalizer, Sort, SortDirection,
};
pub use adapters::QueryParams;
pub use config::NormalizerConfig;
pub use utils::error::{ParamsError, Result};
