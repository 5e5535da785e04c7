use crate::domain::ports::Authorizer;
use crate::utils::error::{RecipeError, Result};

/// Accepts callers presenting the expected capability token.
#[derive(Debug, Clone)]
pub struct TokenAuthorizer {
    expected: String,
}

impl TokenAuthorizer {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Authorizer for TokenAuthorizer {
    fn authorize(&self, token: Option<&str>) -> Result<()> {
        match token {
            Some(t) if t == self.expected => Ok(()),
            _ => Err(RecipeError::UnauthorizedError),
        }
    }
}

/// Used where the caller is already trusted, e.g. the local CLI.
#[derive(Debug, Clone, Copy)]
pub struct AllowAll;

impl Authorizer for AllowAll {
    fn authorize(&self, _token: Option<&str>) -> Result<()> {
        Ok(())
    }
}
