use std::fmt;

/// Why a request was refused.
///
/// Kept for logs only; every reason produces the same response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    MissingToken,
    InvalidScheme,
    InvalidToken,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DenialReason::MissingToken => "missing token",
            DenialReason::InvalidScheme => "invalid scheme",
            DenialReason::InvalidToken => "invalid token",
        };
        f.write_str(reason)
    }
}

/// Result of one gate pass over a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Request may reach its operation.
    Proceed,
    Denied(DenialReason),
    /// Authentication could not be completed; carries the cause.
    InternalError(String),
}
