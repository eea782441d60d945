use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::security::RequestSecurity;
use crate::domain::user::models::User;

pub async fn current_user(
    security: Option<Extension<RequestSecurity>>,
) -> Result<ApiSuccess<CurrentUserResponseData>, ApiError> {
    security
        .as_ref()
        .and_then(|Extension(security)| security.principal())
        .map(|user| ApiSuccess::new(StatusCode::OK, user.into()))
        .ok_or_else(|| ApiError::Unauthorized("No authenticated user".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub uri: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for CurrentUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            uri: user.uri.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            admin: user.admin,
            created_at: user.created_at,
        }
    }
}
