use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-box")]
#[command(about = "Search a recipe collection and bundle the results for display")]
pub struct CliConfig {
    /// Search dimension: name, cooking_time or difficulty
    #[arg(long, default_value = "name")]
    pub search_by: String,

    /// Term for name searches (case-insensitive substring)
    #[arg(long)]
    pub search_term: Option<String>,

    /// Exact cooking time in minutes for cooking_time searches
    #[arg(long)]
    pub cooking_time: Option<String>,

    /// Easy, Medium, Intermediate or Hard for difficulty searches
    #[arg(long)]
    pub difficulty: Option<String>,

    /// HTTP endpoint serving the recipe collection as JSON; overrides the
    /// local recipes file
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// JSON file holding the recipe collection
    #[arg(long, default_value = "./recipes.json")]
    pub recipes_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Load source and output settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    /// Capability token to present to the engine
    #[arg(long)]
    pub access_token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn source_endpoint(&self) -> Option<&str> {
        self.api_endpoint.as_deref()
    }

    fn recipes_path(&self) -> &str {
        &self.recipes_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.api_endpoint {
            validate_url("api_endpoint", endpoint)?;
        } else {
            validate_non_empty_string("recipes_path", &self.recipes_path)?;
        }
        validate_non_empty_string("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CliConfig {
        CliConfig {
            search_by: "name".to_string(),
            search_term: None,
            cooking_time: None,
            difficulty: None,
            api_endpoint: None,
            recipes_path: "./recipes.json".to_string(),
            output_path: "./output".to_string(),
            config: None,
            access_token: None,
            verbose: false,
        }
    }

    #[test]
    fn defaults_validate() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn endpoint_must_be_http_or_https() {
        let mut cfg = base();
        cfg.api_endpoint = Some("ftp://example.com/recipes".to_string());
        assert!(cfg.validate().is_err());

        cfg.api_endpoint = Some("https://example.com/recipes".to_string());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_paths_are_rejected() {
        let mut cfg = base();
        cfg.recipes_path = String::new();
        assert!(cfg.validate().is_err());

        let mut cfg = base();
        cfg.output_path = "  ".to_string();
        assert!(cfg.validate().is_err());
    }
}
