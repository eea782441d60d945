use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn hello() -> ApiSuccess<HelloResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HelloResponseData {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelloResponseData {
    pub status: String,
    pub version: String,
}
