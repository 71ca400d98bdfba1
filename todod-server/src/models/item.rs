//! Item entity and name validation

use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// A persisted todo item.
///
/// Rows and JSON both use PascalCase: clients see `{Id, Name, IsComplete}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Validated item name.
///
/// Empty and all-whitespace input is rejected before any statement is
/// issued. The stored value is the submitted string, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
