use crate::core::{Authorizer, SearchPipeline};
use crate::domain::model::{SearchCriterion, SearchResult};
use crate::utils::error::Result;

/// Runs a search end to end: authorize, fetch, filter and aggregate, then
/// publish the bundle. Empty results skip the publish step.
pub struct SearchEngine<P: SearchPipeline> {
    pipeline: P,
    authorizer: Box<dyn Authorizer>,
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub result: SearchResult,
    /// Location of the published bundle; `None` when nothing matched.
    pub output_path: Option<String>,
}

impl<P: SearchPipeline> SearchEngine<P> {
    pub fn new(pipeline: P, authorizer: Box<dyn Authorizer>) -> Self {
        Self {
            pipeline,
            authorizer,
        }
    }

    pub async fn run(
        &self,
        criterion: &SearchCriterion,
        token: Option<&str>,
    ) -> Result<SearchOutcome> {
        // Every entry point requires an authorized caller, before any
        // pipeline stage runs.
        self.authorizer.authorize(token)?;

        tracing::info!("Fetching recipes...");
        let recipes = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} recipes", recipes.len());

        let result = self.pipeline.search(recipes, criterion)?;
        if result.is_empty() {
            tracing::info!("No recipes matched");
            return Ok(SearchOutcome {
                result,
                output_path: None,
            });
        }
        tracing::info!("Matched {} recipes", result.len());

        let output_path = self.pipeline.publish(&result).await?;
        tracing::info!("Search bundle saved to: {}", output_path);

        Ok(SearchOutcome {
            result,
            output_path: Some(output_path),
        })
    }
}
