use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use seo_llm::LLMError;
use serde_json::json;
use thiserror::Error;

pub const UNSUPPORTED_CONTENT_TYPE_MESSAGE: &str = "Content type not supported yet.";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Gemini API error";

/// Failures of a content generation request.
///
/// Every variant is resolved at the HTTP boundary into a JSON body with an
/// `error` field and, for upstream failures, a `details` field. Bodies the
/// `Json` extractor rejects keep the extractor's status (400, 415 or 422).
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] JsonRejection),

    #[error("Content type not supported: {0}")]
    UnsupportedContentType(String),

    #[error("Upstream returned status {status}")]
    ExternalApi { status: u16, body: String },

    #[error("Upstream request failed: {0}")]
    Transport(String),
}

impl ContentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::InvalidRequest(rejection) => rejection.status(),
            ContentError::UnsupportedContentType(_) => StatusCode::BAD_REQUEST,
            ContentError::ExternalApi { .. } | ContentError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<LLMError> for ContentError {
    fn from(error: LLMError) -> Self {
        match error {
            LLMError::Upstream { status, body } => ContentError::ExternalApi { status, body },
            LLMError::Transport(e) => ContentError::Transport(e.to_string()),
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ContentError::InvalidRequest(rejection) => {
                let message = rejection.body_text();
                tracing::warn!(error = %message, "Rejected malformed request body");
                json!({ "error": message })
            }
            ContentError::UnsupportedContentType(content_type) => {
                tracing::warn!(%content_type, "Rejected unsupported content type");
                json!({ "error": UNSUPPORTED_CONTENT_TYPE_MESSAGE })
            }
            ContentError::ExternalApi {
                status: upstream_status,
                body,
            } => {
                tracing::error!(upstream_status, "Content generation failed upstream");
                json!({ "error": UPSTREAM_ERROR_MESSAGE, "details": body })
            }
            ContentError::Transport(message) => {
                tracing::error!(error = %message, "Could not reach upstream");
                json!({ "error": UPSTREAM_ERROR_MESSAGE, "details": message })
            }
        };

        (status, Json(body)).into_response()
    }
}
