use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use url::Url;

use crate::user::errors::UserUriError;

/// User identity record.
///
/// Resolved from the subject of a verified token and attached to the request
/// security context as its principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uri: UserUri,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
///
/// Users are keyed by an absolute URI, which is also the `sub` claim of the
/// tokens issued to them. The text is kept exactly as given: it is the
/// store key, so it must not be normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserUri(String);

impl UserUri {
    /// Parse a user URI from string.
    ///
    /// # Arguments
    /// * `uri` - Absolute URI string
    ///
    /// # Returns
    /// UserUri holding `uri` unchanged
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an absolute URI
    pub fn parse(uri: &str) -> Result<Self, UserUriError> {
        Url::parse(uri).map_err(|e| UserUriError::InvalidFormat {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self(uri.to_string()))
    }

    /// Get URI as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserUri {
    type Err = UserUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
