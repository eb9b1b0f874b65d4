//! Error types for the venue index crate.

use thiserror::Error;

/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building or querying an index.
///
/// A prefix that matches nothing is not an error; it yields an empty
/// [`PrefixMatch`](crate::PrefixMatch).
#[derive(Debug, Error)]
pub enum SearchError {
    /// Attempted to insert a token with no characters
    #[error("Cannot index an empty token")]
    EmptyToken,

    /// Venue record violates the identity contract
    #[error("Invalid venue: {0}")]
    InvalidVenue(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with the application's error reporting.
/// Range: 11xxx for index errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Empty token inserted
    EmptyToken = 11001,
    /// Venue record failed validation
    InvalidVenue = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::EmptyToken => SearchErrorCode::EmptyToken,
            SearchError::InvalidVenue(_) => SearchErrorCode::InvalidVenue,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
        }
    }
}
