use crate::domain::model::{RecipeDraft, SearchCriterion};
use crate::utils::error::{RecipeError, Result};
use url::Url;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_INGREDIENTS_LEN: usize = 225;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Raw search-form input as submitted by a user. `search_by` selects the
/// dimension; the matching value field must be present and well-formed.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub search_by: String,
    pub search_term: Option<String>,
    pub cooking_time: Option<String>,
    pub difficulty: Option<String>,
}

impl SearchForm {
    /// Builds the closed criterion variant, rejecting unknown selectors and
    /// malformed values instead of silently filtering nothing.
    pub fn criterion(&self) -> Result<SearchCriterion> {
        match self.search_by.as_str() {
            // A missing or empty term is allowed; it matches nothing.
            "name" => Ok(SearchCriterion::ByName(
                self.search_term.clone().unwrap_or_default(),
            )),
            "cooking_time" => {
                let raw = self.cooking_time.as_deref().ok_or_else(|| {
                    RecipeError::ValidationError {
                        field: "cooking_time".to_string(),
                        value: String::new(),
                        reason: "required when searching by cooking time".to_string(),
                    }
                })?;
                let minutes: i32 =
                    raw.trim()
                        .parse()
                        .map_err(|_| RecipeError::ValidationError {
                            field: "cooking_time".to_string(),
                            value: raw.to_string(),
                            reason: "must be a whole number of minutes".to_string(),
                        })?;
                Ok(SearchCriterion::ByCookingTime(minutes))
            }
            "difficulty" => {
                let raw = self.difficulty.as_deref().ok_or_else(|| {
                    RecipeError::ValidationError {
                        field: "difficulty".to_string(),
                        value: String::new(),
                        reason: "required when searching by difficulty".to_string(),
                    }
                })?;
                Ok(SearchCriterion::ByDifficulty(raw.parse()?))
            }
            other => Err(RecipeError::ValidationError {
                field: "search_by".to_string(),
                value: other.to_string(),
                reason: "unknown search selector, expected name, cooking_time or difficulty"
                    .to_string(),
            }),
        }
    }
}

impl Validate for RecipeDraft {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_max_length("name", &self.name, MAX_NAME_LEN)?;
        validate_non_empty_string("ingredients", &self.ingredients)?;
        validate_max_length("ingredients", &self.ingredients, MAX_INGREDIENTS_LEN)?;
        Ok(())
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecipeError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(RecipeError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("length {} exceeds maximum of {}", len, max),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RecipeError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RecipeError::ValidationError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RecipeError::ValidationError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}
