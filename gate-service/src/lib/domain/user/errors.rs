use thiserror::Error;

/// Error for UserUri parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserUriError {
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidFormat { uri: String, reason: String },
}

/// Top-level error for identity lookups
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user URI: {0}")]
    InvalidUri(#[from] UserUriError),

    #[error("User not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
