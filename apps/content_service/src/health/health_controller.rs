use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_STATUS: &str = "SEO Content Generator backend running";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness only: never touches the credential or the upstream.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: SERVICE_STATUS.to_string(),
    })
}
