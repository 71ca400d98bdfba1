//! Validation error types
//!
//! Each variant displays the exact message the API contract promises for
//! that rejected input.

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Create request carries no usable name
    MissingName,

    /// Update target id is zero, or the body is absent/undecodable
    InvalidPayload,

    /// Delete target id is zero or negative
    InvalidId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Name is required."),
            Self::InvalidPayload => write!(f, "Invalid data."),
            Self::InvalidId => write!(f, "Invalid id."),
        }
    }
}

impl std::error::Error for ValidationError {}
