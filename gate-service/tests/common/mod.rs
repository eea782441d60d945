use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::BearerScheme;
use auth::Claims;
use auth::JwtHandler;
use chrono::Duration;
use chrono::Utc;
use gate_service::domain::exemption::policy::ExemptionPolicy;
use gate_service::domain::gate::service::AuthenticationGate;
use gate_service::domain::token::codec::TokenCodec;
use gate_service::domain::user::service::IdentityResolver;
use gate_service::inbound::http::router::create_router;
use gate_service::outbound::verifiers::JwtSubjectVerifier;
use gate_service::user::errors::UserError;
use gate_service::user::models::User;
use gate_service::user::models::UserUri;
use gate_service::user::ports::UserRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const ALICE_URI: &str = "http://www.opensilex.org/demo/id/agent/alice";

/// Identity store backed by a map.
pub struct InMemoryUserRepository {
    users: HashMap<UserUri, User>,
}

impl InMemoryUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.uri.clone(), u)).collect(),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_uri(&self, uri: &UserUri) -> Result<Option<User>, UserError> {
        Ok(self.users.get(uri).cloned())
    }
}

/// Identity store whose backend is unreachable.
pub struct UnreachableUserRepository;

#[async_trait]
impl UserRepository for UnreachableUserRepository {
    async fn find_by_uri(&self, _uri: &UserUri) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError(
            "pool timed out while waiting for an open connection".to_string(),
        ))
    }
}

pub fn alice() -> User {
    User {
        email: "alice@opensilex.org".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Martin".to_string(),
        ..user(ALICE_URI)
    }
}

/// Plain, non-admin user stored under `uri`
pub fn user(uri: &str) -> User {
    User {
        uri: UserUri::parse(uri).expect("Invalid test URI"),
        email: "someone@opensilex.org".to_string(),
        first_name: "Some".to_string(),
        last_name: "One".to_string(),
        admin: false,
        created_at: Utc::now(),
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application with Alice as the only known user
    pub async fn spawn() -> Self {
        Self::spawn_with(Arc::new(InMemoryUserRepository::with_users(vec![alice()]))).await
    }

    /// Spawn the application in a background task over the given identity store
    pub async fn spawn_with(repository: Arc<dyn UserRepository>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let gate = Arc::new(AuthenticationGate::new(
            ExemptionPolicy::default(),
            TokenCodec::new(
                BearerScheme::default(),
                Arc::new(JwtSubjectVerifier::new(JwtHandler::new(JWT_SECRET))),
            ),
            IdentityResolver::new(repository),
        ));

        let router = create_router(gate);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    /// Create a valid token for the given subject
    pub fn create_token_for(&self, subject: &str) -> String {
        self.jwt_handler
            .encode(&Claims::for_subject(subject, Duration::hours(1)))
            .expect("Failed to create token")
    }

    /// Create a correctly signed token that expired an hour ago
    pub fn create_expired_token_for(&self, subject: &str) -> String {
        let claims = Claims::new()
            .with_subject(subject)
            .with_issued_at(Utc::now().timestamp() - 7200)
            .with_expiration(Utc::now().timestamp() - 3600);
        self.jwt_handler
            .encode(&claims)
            .expect("Failed to create token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with an Authorization header
    pub fn get_with_authorization(&self, path: &str, value: &str) -> reqwest::RequestBuilder {
        self.get(path).header(reqwest::header::AUTHORIZATION, value)
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}
