use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserUri;
use crate::user::errors::UserError;

/// Persistence operations for user identities.
///
/// Implementations are shared by every in-flight request and must allow
/// concurrent reads.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by URI.
    ///
    /// # Arguments
    /// * `uri` - User URI (token subject)
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `InvalidUri` - Stored record carries a malformed URI
    async fn find_by_uri(&self, uri: &UserUri) -> Result<Option<User>, UserError>;
}
