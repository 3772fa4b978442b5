pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpRecipeFetcher;
pub use config::{LogFormat, Settings};
pub use core::{engine::AggregatorEngine, fanout::FanOut};
pub use domain::model::{Ingredient, Recipe};
pub use utils::error::{AggregatorError, FetchError, Result};
