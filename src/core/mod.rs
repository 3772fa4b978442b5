pub mod aggregate;
pub mod engine;
pub mod fanout;
pub mod request;

pub use crate::domain::model::{FetchOutcome, Ingredient, Recipe};
pub use crate::domain::ports::{ConfigProvider, RecipeFetcher};
pub use crate::utils::error::Result;
