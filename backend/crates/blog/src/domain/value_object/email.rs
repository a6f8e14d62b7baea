//! Email Value Object
//!
//! Represents a validated email address.
//! Validation is the conventional `local@domain.tld` pattern: lowercase
//! letters, digits, dot, dash and underscore in the local part and in each
//! domain label, with one to four dot-separated labels after the first.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> ApiResult<Self> {
        let email = email.into();
        let email = email.trim();

        if email.is_empty() || !Self::is_valid_format(email) {
            return Err(ApiError::invalid_field("email", "Invalid email."));
        }

        Ok(Self(email.to_string()))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        fn part_ok(part: &str) -> bool {
            !part.is_empty()
                && part.chars().all(|c| {
                    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_')
                })
        }

        if local.is_empty()
            || !local.chars().all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_')
            })
        {
            return false;
        }

        // First label plus one to four dot-separated labels.
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.len() > 5 {
            return false;
        }

        labels.iter().all(|label| part_ok(label))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
