use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::MethodRouter;
use axum::Extension;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::calls::list_calls;
use super::handlers::current_user::current_user;
use super::handlers::hello::hello;
use super::handlers::swagger::swagger;
use super::middleware::authenticate;
use super::middleware::security_context;
use crate::domain::exemption::models::OperationMetadata;
use crate::domain::gate::service::AuthenticationGate;

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<AuthenticationGate>,
}

pub fn create_router(gate: Arc<AuthenticationGate>) -> Router {
    let state = AppState { gate };

    let routes = Router::new()
        .route(
            "/hello",
            guarded(&state, get(hello), OperationMetadata::new("HealthResource", "hello")),
        )
        .route(
            "/calls",
            guarded(&state, get(list_calls), OperationMetadata::new("CallsResource", "getCalls")),
        )
        .route(
            "/swagger.json",
            guarded(&state, get(swagger), OperationMetadata::new("ApiDescription", "getSwagger")),
        )
        .route(
            "/users/me",
            guarded(
                &state,
                get(current_user),
                OperationMetadata::new("UserResource", "getCurrentUser"),
            ),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    routes
        .layer(middleware::from_fn(security_context))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Put the gate in front of `route` and tag it with its operation.
///
/// The tagging layer is outermost so the gate sees the metadata.
fn guarded(
    state: &AppState,
    route: MethodRouter<AppState>,
    operation: OperationMetadata,
) -> MethodRouter<AppState> {
    route
        .layer::<_, Infallible>(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(Extension(operation))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use auth::BearerScheme;
    use auth::JwtHandler;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::exemption::policy::ExemptionPolicy;
    use crate::domain::token::codec::TokenCodec;
    use crate::domain::user::service::IdentityResolver;
    use crate::inbound::http::middleware::DeniedResponseBody;
    use crate::outbound::verifiers::JwtSubjectVerifier;
    use crate::user::errors::UserError;
    use crate::user::models::User;
    use crate::user::models::UserUri;
    use crate::user::ports::UserRepository;

    struct EmptyUserRepository;

    #[async_trait]
    impl UserRepository for EmptyUserRepository {
        async fn find_by_uri(&self, _uri: &UserUri) -> Result<Option<User>, UserError> {
            Ok(None)
        }
    }

    fn app() -> Router {
        let gate = AuthenticationGate::new(
            ExemptionPolicy::default(),
            TokenCodec::new(
                BearerScheme::default(),
                Arc::new(JwtSubjectVerifier::new(JwtHandler::new(
                    b"test-secret-key-for-jwt-signing-at-least-32-bytes",
                ))),
            ),
            IdentityResolver::new(Arc::new(EmptyUserRepository)),
        );
        create_router(Arc::new(gate))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_hello_is_public() {
        let response = app().oneshot(get("/hello")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_current_user_requires_token() {
        let response = app().oneshot(get("/users/me")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::to_value(DeniedResponseBody::invalid_token()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app().oneshot(get("/data/resource")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
