use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// Calls served by this service, without leading slash.
pub const AVAILABLE_CALLS: [&str; 4] = ["hello", "calls", "swagger.json", "users/me"];

pub async fn list_calls() -> ApiSuccess<Vec<CallData>> {
    let calls = AVAILABLE_CALLS
        .iter()
        .map(|call| CallData {
            call: call.to_string(),
            methods: vec!["GET".to_string()],
            data_types: vec!["json".to_string()],
        })
        .collect();

    ApiSuccess::new(StatusCode::OK, calls)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallData {
    pub call: String,
    pub methods: Vec<String>,
    #[serde(rename = "dataTypes")]
    pub data_types: Vec<String>,
}
