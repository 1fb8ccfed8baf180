use axum::{extract::rejection::JsonRejection, routing::post, Extension, Json, Router};
use seo_llm::GeneratedContent;
use serde::{Deserialize, Serialize};

use super::content_service::GenerationRequest;
use crate::{app_module::AppState, error::ContentError};

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub content: GeneratedContent,
}

pub fn content_router() -> Router {
    Router::new()
        .route("/generate-content", post(generate_content))
        .with_state(())
}

pub async fn generate_content(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateContentResponse>, ContentError> {
    let Json(request) = payload?;
    let content = ctx.service.content_service.generate(&request).await?;

    Ok(Json(GenerateContentResponse { content }))
}
