use std::fmt;
use std::sync::Arc;

use crate::domain::user::models::User;

/// Per-request answer to "who is making this request".
pub trait SecurityContext: Send + Sync + fmt::Debug {
    /// Authenticated user, `None` for anonymous requests.
    fn user_principal(&self) -> Option<&User>;

    fn is_user_in_role(&self, role: &str) -> bool;

    /// Whether the request came over a secure transport.
    fn is_secure(&self) -> bool;

    fn authentication_scheme(&self) -> Option<&str>;
}

/// Context installed for every request before authentication runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnonymousContext {
    secure: bool,
}

impl AnonymousContext {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }
}

impl SecurityContext for AnonymousContext {
    fn user_principal(&self) -> Option<&User> {
        None
    }

    fn is_user_in_role(&self, _role: &str) -> bool {
        false
    }

    fn is_secure(&self) -> bool {
        self.secure
    }

    fn authentication_scheme(&self) -> Option<&str> {
        None
    }
}

/// Wraps the original context of a request with its resolved user.
///
/// Only the principal is answered here; every other query goes to the
/// original context.
#[derive(Debug)]
pub struct AuthenticatedContext {
    original: Arc<dyn SecurityContext>,
    user: User,
}

impl AuthenticatedContext {
    pub fn new(original: Arc<dyn SecurityContext>, user: User) -> Self {
        Self { original, user }
    }

    pub fn original(&self) -> &dyn SecurityContext {
        self.original.as_ref()
    }
}

impl SecurityContext for AuthenticatedContext {
    fn user_principal(&self) -> Option<&User> {
        Some(&self.user)
    }

    fn is_user_in_role(&self, role: &str) -> bool {
        self.original.is_user_in_role(role)
    }

    fn is_secure(&self) -> bool {
        self.original.is_secure()
    }

    fn authentication_scheme(&self) -> Option<&str> {
        self.original.authentication_scheme()
    }
}

/// Security context slot carried in request extensions.
#[derive(Debug, Clone)]
pub struct RequestSecurity(Arc<dyn SecurityContext>);

impl RequestSecurity {
    pub fn new(context: Arc<dyn SecurityContext>) -> Self {
        Self(context)
    }

    pub fn anonymous(secure: bool) -> Self {
        Self(Arc::new(AnonymousContext::new(secure)))
    }

    /// New slot whose context wraps this one with `user`.
    pub fn authenticated(&self, user: User) -> Self {
        Self(Arc::new(AuthenticatedContext::new(Arc::clone(&self.0), user)))
    }

    pub fn context(&self) -> &dyn SecurityContext {
        self.0.as_ref()
    }

    /// Current principal of the request.
    pub fn principal(&self) -> Option<&User> {
        self.0.user_principal()
    }
}

impl Default for RequestSecurity {
    fn default() -> Self {
        Self::anonymous(false)
    }
}
