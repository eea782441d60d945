use auth::CredentialError;
use thiserror::Error;

/// Error reported by a subject verifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Token is expired")]
    Expired,

    #[error("Token carries no subject")]
    MissingSubject,

    #[error("Token rejected: {0}")]
    Rejected(String),
}

/// Error for bearer credential decoding
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing credential")]
    MissingCredential,

    #[error("Malformed credential: {0}")]
    MalformedCredential(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

impl From<CredentialError> for TokenError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Missing => TokenError::MissingCredential,
            CredentialError::Malformed { .. } => TokenError::MalformedCredential(err.to_string()),
        }
    }
}

impl From<VerificationError> for TokenError {
    fn from(err: VerificationError) -> Self {
        TokenError::InvalidCredential(err.to_string())
    }
}
