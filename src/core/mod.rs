pub mod classify;
pub mod engine;
pub mod pipeline;
pub mod search;

pub use crate::domain::model::{
    Difficulty, Recipe, RecipeDraft, SearchCriterion, SearchResult, TableRow,
};
pub use crate::domain::ports::{
    Authorizer, ConfigProvider, RecipeSource, RecipeStore, ReportSink, SearchPipeline,
};
pub use crate::utils::error::Result;
