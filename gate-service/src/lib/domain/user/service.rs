use std::sync::Arc;

use crate::domain::user::models::User;
use crate::domain::user::models::UserUri;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Resolves verified token subjects to user identities.
pub struct IdentityResolver {
    repository: Arc<dyn UserRepository>,
}

impl IdentityResolver {
    /// Create a new resolver over the given identity store.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Resolve a subject URI to its user record.
    ///
    /// The store's own errors (timeouts included) are passed through untouched;
    /// nothing is retried.
    ///
    /// # Errors
    /// * `NotFound` - No user with this URI
    /// * `DatabaseError` / `InvalidUri` - Lookup itself failed
    pub async fn resolve(&self, uri: &UserUri) -> Result<User, UserError> {
        self.repository
            .find_by_uri(uri)
            .await?
            .ok_or_else(|| UserError::NotFound(uri.to_string()))
    }
}
