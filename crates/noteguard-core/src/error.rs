//! Error types for noteguard-core

use thiserror::Error;

/// Result type alias using noteguard-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a page
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration payload could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration decoded but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Render-time snapshot payload is malformed
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Reasons a note form submission is rejected before it leaves the page.
///
/// These are user-correctable conditions, not failures. The text shown to the
/// user comes from [`crate::Messages`]; `Display` here is for logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title or content is empty after trimming
    #[error("title and content must both be non-empty")]
    EmptyField,

    /// Trimmed title is longer than the configured limit
    #[error("title has {chars} characters, limit is {max}")]
    TitleTooLong { chars: usize, max: usize },

    /// Edit form values match the rendered snapshot
    #[error("no changes compared to the saved note")]
    NoChangesDetected,
}
