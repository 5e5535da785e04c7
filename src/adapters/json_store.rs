use crate::domain::model::{Recipe, RecipeDraft};
use crate::domain::ports::{RecipeSource, RecipeStore};
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::Validate;
use std::fs;
use std::path::PathBuf;

/// Recipe store backed by a JSON array on disk. A missing file reads as an
/// empty collection; ids are max+1 and never reused within the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<Recipe>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, recipes: &[Recipe]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(recipes)?)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecipeSource for JsonFileStore {
    async fn list(&self) -> Result<Vec<Recipe>> {
        self.load()
    }
}

#[async_trait::async_trait]
impl RecipeStore for JsonFileStore {
    async fn get(&self, id: u64) -> Result<Recipe> {
        self.load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(RecipeError::NotFoundError { id })
    }

    async fn add(&self, draft: RecipeDraft) -> Result<Recipe> {
        draft.validate()?;

        let mut recipes = self.load()?;
        let id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let recipe = draft.into_recipe(id);

        recipes.push(recipe.clone());
        self.save(&recipes)?;

        tracing::debug!("Added recipe {} ({})", recipe.id, recipe.name);
        Ok(recipe)
    }
}
