use http::header::AUTHORIZATION;
use http::Request;

use crate::domain::exemption::models::OperationMetadata;
use crate::domain::exemption::models::RequestDescriptor;
use crate::domain::exemption::policy::ExemptionPolicy;
use crate::domain::gate::errors::AuthError;
use crate::domain::gate::models::Outcome;
use crate::domain::security::RequestSecurity;
use crate::domain::token::codec::TokenCodec;
use crate::domain::user::models::User;
use crate::domain::user::models::UserUri;
use crate::domain::user::service::IdentityResolver;

/// Operation assumed for requests that were not tagged by the router.
static UNTAGGED_OPERATION: OperationMetadata = OperationMetadata {
    module: String::new(),
    resource: String::new(),
    method: String::new(),
};

/// Authentication filter run in front of every operation.
///
/// One linear pass per request: exemption check, credential decoding,
/// identity resolution, security context installation. The first failure
/// ends the pass; nothing is retried.
pub struct AuthenticationGate {
    policy: ExemptionPolicy,
    codec: TokenCodec,
    resolver: IdentityResolver,
}

impl AuthenticationGate {
    /// Create a new gate with injected collaborators.
    ///
    /// # Arguments
    /// * `policy` - Rules deciding which requests need a token
    /// * `codec` - Authorization header decoding and verification
    /// * `resolver` - Subject to user lookup
    pub fn new(policy: ExemptionPolicy, codec: TokenCodec, resolver: IdentityResolver) -> Self {
        Self {
            policy,
            codec,
            resolver,
        }
    }

    /// Check exemption and credential of a request.
    ///
    /// # Returns
    /// `None` when the request is exempt, otherwise the verified subject
    ///
    /// # Errors
    /// * `MissingCredential` - No authorization header
    /// * `MalformedCredential` - Header does not use the expected scheme
    /// * `InvalidCredential` - Token failed verification
    pub fn verify(&self, request: &RequestDescriptor<'_>) -> Result<Option<UserUri>, AuthError> {
        if !self.policy.requires_authentication(request) {
            tracing::debug!(
                path = request.path,
                method = %request.method,
                "Authentication not required"
            );
            return Ok(None);
        }

        let authorization = request.header(&AUTHORIZATION);
        let subject = self.codec.decode(authorization.as_deref())?;

        Ok(Some(subject))
    }

    /// Authenticate a request descriptor without touching the request.
    ///
    /// # Returns
    /// `None` when the request is exempt, otherwise the resolved user
    ///
    /// # Errors
    /// Any `AuthError`; see [`AuthError::outcome`] for how each is reported.
    pub async fn authenticate(
        &self,
        request: &RequestDescriptor<'_>,
    ) -> Result<Option<User>, AuthError> {
        match self.verify(request)? {
            Some(subject) => Ok(Some(self.resolver.resolve(&subject).await?)),
            None => Ok(None),
        }
    }

    /// Run the gate over a request.
    ///
    /// On success the request's security context is replaced by one wrapping
    /// it with the resolved user. Requests that fail are left untouched.
    pub async fn filter<B>(&self, request: &mut Request<B>) -> Outcome {
        let path = request.uri().path().to_string();

        let verified = {
            let operation = request
                .extensions()
                .get::<OperationMetadata>()
                .unwrap_or(&UNTAGGED_OPERATION);
            let descriptor =
                RequestDescriptor::new(&path, request.method(), request.headers(), operation);
            self.verify(&descriptor)
        };

        let subject = match verified {
            Ok(Some(subject)) => subject,
            Ok(None) => return Outcome::Proceed,
            Err(err) => return reject(&path, err),
        };

        let user = match self.resolver.resolve(&subject).await {
            Ok(user) => user,
            Err(err) => return reject(&path, err.into()),
        };

        tracing::debug!(path = %path, subject = %user.uri, "Request authenticated");

        let security = request
            .extensions()
            .get::<RequestSecurity>()
            .cloned()
            .unwrap_or_default();
        request.extensions_mut().insert(security.authenticated(user));

        Outcome::Proceed
    }
}

fn reject(path: &str, err: AuthError) -> Outcome {
    if let AuthError::ResolutionError(_) = err {
        tracing::error!(path = %path, error = %err, "Authentication failed");
    } else {
        tracing::warn!(path = %path, error = %err, "Request denied");
    }
    err.outcome()
}
