use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File-based configuration for embedding or repeatable runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub auth: Option<AuthConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// "file" or "http"
    pub r#type: String,
    pub path: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub expected_token: String,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_str(&text)
    }

    pub fn from_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RecipeError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn source_endpoint(&self) -> Option<&str> {
        if self.source.r#type == "http" {
            self.source.endpoint.as_deref()
        } else {
            None
        }
    }

    fn recipes_path(&self) -> &str {
        self.source.path.as_deref().unwrap_or("./recipes.json")
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn expected_token(&self) -> Option<&str> {
        self.auth.as_ref().map(|a| a.expected_token.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validate_non_empty_string("load.output_path", &self.load.output_path)?;

        match self.source.r#type.as_str() {
            "file" => {
                let path = self.source.path.as_deref().unwrap_or_default();
                validate_non_empty_string("source.path", path)
            }
            "http" => {
                let endpoint = self.source.endpoint.as_deref().unwrap_or_default();
                validate_url("source.endpoint", endpoint)
            }
            other => Err(RecipeError::ValidationError {
                field: "source.type".to_string(),
                value: other.to_string(),
                reason: "expected file or http".to_string(),
            }),
        }
    }
}
