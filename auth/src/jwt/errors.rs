use thiserror::Error;

/// Failure signing or verifying a token.
///
/// Verification failures are split so callers can tell an expired token
/// apart from one that was never valid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    EncodingFailed(String),

    /// The token is not three base64url segments of valid JSON.
    #[error("Malformed token: {0}")]
    DecodingFailed(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token signature does not match")]
    InvalidSignature,

    /// Well-formed and signed, but rejected by validation (issuer, algorithm).
    #[error("Token rejected: {0}")]
    InvalidToken(String),

    #[error("Token lacks required claim: {0}")]
    MissingClaim(String),
}
