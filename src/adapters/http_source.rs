use crate::domain::model::Recipe;
use crate::domain::ports::RecipeSource;
use crate::utils::error::Result;
use reqwest::Client;

/// Fetches the recipe collection as a JSON array over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    endpoint: String,
    client: Client,
}

impl HttpRecipeSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn list(&self) -> Result<Vec<Recipe>> {
        tracing::debug!("Requesting recipes from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Recipe source response status: {}", response.status());
        let response = response.error_for_status()?;

        let recipes: Vec<Recipe> = response.json().await?;
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn lists_recipes_from_json_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/recipes");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 1, "name": "Tea", "ingredients": "Tea leaves, Sugar, Water", "cooking_time": 5},
                    {"id": 2, "name": "Stew", "ingredients": "Beef, Water, Salt, Carrots", "cooking_time": 90, "pic": "stew.jpg"}
                ]));
        });

        let source = HttpRecipeSource::new(server.url("/recipes"));
        let recipes = source.list().await.unwrap();

        mock.assert();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "Tea");
        assert_eq!(recipes[0].pic, "no_picture.jpg");
        assert_eq!(recipes[1].pic, "stew.jpg");
    }

    #[tokio::test]
    async fn empty_array_is_an_empty_collection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/recipes");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let source = HttpRecipeSource::new(server.url("/recipes"));
        assert!(source.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/recipes");
            then.status(500);
        });

        let source = HttpRecipeSource::new(server.url("/recipes"));
        assert!(source.list().await.is_err());
    }
}
