pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{
    AllowAll, HttpRecipeSource, JsonFileStore, LocalReportSink, TokenAuthorizer,
};
pub use crate::core::classify::classify;
pub use crate::core::engine::{SearchEngine, SearchOutcome};
pub use crate::core::pipeline::RecipePipeline;
pub use crate::core::search::search;
pub use crate::domain::model::{
    Difficulty, Recipe, RecipeDraft, SearchCriterion, SearchResult,
};
pub use crate::utils::error::{RecipeError, Result};
