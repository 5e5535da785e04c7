use crate::domain::model::{Recipe, RecipeDraft, SearchCriterion, SearchResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the immutable recipe snapshot a search runs over.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn list(&self) -> Result<Vec<Recipe>>;
}

/// A source that also persists recipes. `add` validates the draft and assigns
/// the next id; `get` fails with `NotFoundError` for absent ids.
#[async_trait]
pub trait RecipeStore: RecipeSource {
    async fn get(&self, id: u64) -> Result<Recipe>;
    async fn add(&self, draft: RecipeDraft) -> Result<Recipe>;
}

/// Destination for the published search bundle.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write_report(&self, name: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    /// HTTP endpoint serving the collection as JSON; `None` means read from
    /// `recipes_path` instead.
    fn source_endpoint(&self) -> Option<&str>;
    fn recipes_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Capability token callers must present, when access is restricted.
    fn expected_token(&self) -> Option<&str> {
        None
    }
}

/// Single authorization check wrapping every pipeline entry.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, token: Option<&str>) -> Result<()>;
}

#[async_trait]
pub trait SearchPipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Recipe>>;
    fn search(&self, recipes: Vec<Recipe>, criterion: &SearchCriterion) -> Result<SearchResult>;
    async fn publish(&self, result: &SearchResult) -> Result<String>;
}
