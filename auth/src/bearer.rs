use thiserror::Error;

/// Scheme announced in `Authorization` headers carrying a JWT.
pub const DEFAULT_SCHEME: &str = "Bearer";

/// Errors raised while reading an authorization header value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Missing authorization credential")]
    Missing,

    #[error("Authorization value does not match '{scheme} <token>'")]
    Malformed { scheme: String },
}

/// Token extracted from an `Authorization: <Scheme> <token>` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerCredential(String);

impl BearerCredential {
    /// Get the raw token.
    pub fn token(&self) -> &str {
        &self.0
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for BearerCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerCredential(***)")
    }
}

/// Parser for `<Scheme> <token>` authorization values.
///
/// The scheme comparison is case-sensitive and exactly one space must separate
/// the scheme from a non-empty token.
#[derive(Debug, Clone)]
pub struct BearerScheme {
    prefix: String,
}

impl BearerScheme {
    /// Create a parser for the given scheme name (e.g. `Bearer`).
    pub fn new(scheme: impl Into<String>) -> Self {
        let mut prefix = scheme.into();
        prefix.push(' ');
        Self { prefix }
    }

    /// Scheme name without the trailing separator.
    pub fn name(&self) -> &str {
        self.prefix.trim_end()
    }

    /// Extract the credential from an authorization header value.
    ///
    /// # Arguments
    /// * `value` - Header value, `None` when the header is absent
    ///
    /// # Errors
    /// * `Missing` - Header absent or empty
    /// * `Malformed` - Value is not `<Scheme> <token>`
    pub fn parse(&self, value: Option<&str>) -> Result<BearerCredential, CredentialError> {
        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ => return Err(CredentialError::Missing),
        };

        match value.strip_prefix(self.prefix.as_str()) {
            Some(token) if !token.is_empty() => Ok(BearerCredential(token.to_string())),
            _ => Err(CredentialError::Malformed {
                scheme: self.name().to_string(),
            }),
        }
    }
}

impl Default for BearerScheme {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEME)
    }
}
