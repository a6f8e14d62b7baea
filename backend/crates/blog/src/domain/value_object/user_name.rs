//! User Name Value Object

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Display name: non-empty after trimming, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> ApiResult<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ApiError::invalid_field("name", "Invalid name."));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_is_trimmed() {
        let name = UserName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
        assert!(UserName::new("\t\n").is_err());
    }

    #[test]
    fn test_rejects_report_name_field() {
        match UserName::new("  ").unwrap_err() {
            ApiError::InvalidField { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
