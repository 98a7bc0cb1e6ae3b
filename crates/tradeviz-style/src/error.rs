//! Error types for tradeviz-style
//!
//! A missing token is a programmer error, not a recoverable runtime
//! condition: lookups fail eagerly instead of substituting a default, so a
//! typo'd path surfaces during development rather than silently rendering
//! the wrong visuals.

use thiserror::Error;

/// Main error type for style token lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A dotted color path, derived-style name, or typography key that
    /// does not exist in the theme
    #[error("style token not found: {path}")]
    TokenNotFound { path: String },
}

impl StyleError {
    /// Build a `TokenNotFound` for the given path
    pub fn not_found(path: impl Into<String>) -> Self {
        StyleError::TokenNotFound { path: path.into() }
    }
}

/// Result type alias for style token lookups
pub type StyleResult<T> = Result<T, StyleError>;
