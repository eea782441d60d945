use thiserror::Error;

use crate::domain::gate::models::DenialReason;
use crate::domain::gate::models::Outcome;
use crate::domain::token::errors::TokenError;
use crate::user::errors::UserError;

/// Every way an authentication attempt can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No authorization header")]
    MissingCredential,

    #[error("{0}")]
    MalformedCredential(String),

    #[error("{0}")]
    InvalidCredential(String),

    #[error("No user for subject {0}")]
    IdentityNotFound(String),

    #[error("Identity resolution failed: {0}")]
    ResolutionError(String),
}

impl AuthError {
    /// Outcome reported for this failure.
    ///
    /// Credential and identity failures share a single denial so callers
    /// cannot tell an unknown user from a bad token.
    pub fn outcome(&self) -> Outcome {
        match self {
            AuthError::MissingCredential => Outcome::Denied(DenialReason::MissingToken),
            AuthError::MalformedCredential(_) => Outcome::Denied(DenialReason::InvalidScheme),
            AuthError::InvalidCredential(_) | AuthError::IdentityNotFound(_) => {
                Outcome::Denied(DenialReason::InvalidToken)
            }
            AuthError::ResolutionError(cause) => Outcome::InternalError(cause.clone()),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingCredential => AuthError::MissingCredential,
            TokenError::MalformedCredential(msg) => AuthError::MalformedCredential(msg),
            TokenError::InvalidCredential(msg) => AuthError::InvalidCredential(msg),
        }
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(uri) => AuthError::IdentityNotFound(uri),
            UserError::InvalidUri(_) | UserError::DatabaseError(_) => {
                AuthError::ResolutionError(err.to_string())
            }
        }
    }
}
