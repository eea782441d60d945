use axum::Json;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

use super::calls::AVAILABLE_CALLS;

/// Minimal OpenAPI description of the service.
pub async fn swagger() -> Json<Value> {
    let paths: Map<String, Value> = AVAILABLE_CALLS
        .iter()
        .map(|call| {
            (
                format!("/{call}"),
                json!({ "get": { "responses": { "200": { "description": "OK" } } } }),
            )
        })
        .collect();

    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            }
        },
        "security": [{ "bearerAuth": [] }],
        "paths": paths,
    }))
}
