use std::sync::Arc;

use auth::BearerScheme;

use crate::domain::token::errors::TokenError;
use crate::domain::token::ports::SubjectVerifier;
use crate::domain::user::models::UserUri;

/// Turns an authorization header value into a verified subject URI.
pub struct TokenCodec {
    scheme: BearerScheme,
    verifier: Arc<dyn SubjectVerifier>,
}

impl TokenCodec {
    /// Create a new codec.
    ///
    /// # Arguments
    /// * `scheme` - Expected authorization scheme
    /// * `verifier` - Token verification collaborator
    pub fn new(scheme: BearerScheme, verifier: Arc<dyn SubjectVerifier>) -> Self {
        Self { scheme, verifier }
    }

    /// Decode an authorization header value.
    ///
    /// # Arguments
    /// * `header` - Header value, `None` when absent
    ///
    /// # Returns
    /// Subject URI of a token whose signature and expiry were verified
    ///
    /// # Errors
    /// * `MissingCredential` - Header absent or empty
    /// * `MalformedCredential` - Value is not `<Scheme> <token>`
    /// * `InvalidCredential` - Verification failed or subject is not a URI
    pub fn decode(&self, header: Option<&str>) -> Result<UserUri, TokenError> {
        let credential = self.scheme.parse(header)?;

        let subject = self
            .verifier
            .verify_and_extract_subject(credential.token())?;

        UserUri::parse(&subject).map_err(|e| TokenError::InvalidCredential(e.to_string()))
    }
}
