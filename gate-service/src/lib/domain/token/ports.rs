use crate::domain::token::errors::VerificationError;

/// Cryptographic verification of bearer tokens.
pub trait SubjectVerifier: Send + Sync + 'static {
    /// Verify signature and expiry of `token` and return its subject.
    ///
    /// # Arguments
    /// * `token` - Raw token, scheme prefix already removed
    ///
    /// # Returns
    /// The subject claim, unparsed
    ///
    /// # Errors
    /// * `Expired` - Token lifetime is over
    /// * `MissingSubject` - Token verified but has no subject
    /// * `Rejected` - Malformed token or bad signature
    fn verify_and_extract_subject(&self, token: &str) -> Result<String, VerificationError>;
}
