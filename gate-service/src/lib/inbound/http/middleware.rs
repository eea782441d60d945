use axum::extract::Request;
use axum::extract::State;
use axum::http::header::HeaderName;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::handlers::ApiError;
use crate::domain::gate::models::Outcome;
use crate::domain::security::RequestSecurity;
use crate::inbound::http::router::AppState;

const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Message of every authentication denial.
pub const ACCESS_DENIED_MESSAGE: &str = "You cannot access this resource.";

/// Installs the anonymous security context every request starts with.
pub async fn security_context(mut req: Request, next: Next) -> Response {
    let secure = req.uri().scheme_str() == Some("https")
        || req
            .headers()
            .get(&X_FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|proto| proto.eq_ignore_ascii_case("https"));

    req.extensions_mut()
        .insert(RequestSecurity::anonymous(secure));

    next.run(req).await
}

/// Middleware running the authentication gate in front of an operation.
///
/// Denials all produce the same 401 body whatever the reason; resolution
/// failures produce a 500 carrying the cause.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    match state.gate.filter(&mut req).await {
        Outcome::Proceed => Ok(next.run(req).await),
        Outcome::Denied(_) => Err(access_denied()),
        Outcome::InternalError(cause) => Err(ApiError::InternalServerError(cause).into_response()),
    }
}

fn access_denied() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(DeniedResponseBody::invalid_token()),
    )
        .into_response()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeniedResponseBody {
    metadata: DeniedMetadata,
    result: DeniedResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DeniedMetadata {
    pagination: Option<()>,
    status: Vec<StatusMessage>,
    datafiles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct StatusMessage {
    message: String,
    exception: StatusException,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct StatusException {
    #[serde(rename = "type")]
    kind: String,
    details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DeniedResult {
    data: Vec<String>,
}

impl DeniedResponseBody {
    pub fn invalid_token() -> Self {
        Self {
            metadata: DeniedMetadata {
                pagination: None,
                status: vec![StatusMessage {
                    message: ACCESS_DENIED_MESSAGE.to_string(),
                    exception: StatusException {
                        kind: "ERR".to_string(),
                        details: "Invalid token".to_string(),
                    },
                }],
                datafiles: Vec::new(),
            },
            result: DeniedResult { data: Vec::new() },
        }
    }
}
