use std::sync::Arc;

use seo_llm::{GeneratedContent, LLMService};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::template_store::TemplateStore;
use crate::error::ContentError;

/// Body of `POST /generate-content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub bdc_data: Map<String, Value>,
    pub city: String,
    pub country: String,
    pub currency: String,
    pub content_type: String,
}

/// Turns generation requests into prompts and relays them to the model.
///
/// Holds no per-request state: the template store and the model client are
/// shared read-only between concurrent requests.
#[derive(Clone)]
pub struct ContentService {
    templates: Arc<TemplateStore>,
    language_model: Arc<dyn LLMService>,
}

impl ContentService {
    pub fn new(templates: TemplateStore, language_model: Arc<dyn LLMService>) -> Self {
        Self {
            templates: Arc::new(templates),
            language_model,
        }
    }

    pub fn render_prompt(&self, request: &GenerationRequest) -> Result<String, ContentError> {
        let template = self
            .templates
            .lookup(&request.content_type)
            .ok_or_else(|| ContentError::UnsupportedContentType(request.content_type.clone()))?;

        let prompt = template.render(&request.city, &request.currency, &request.bdc_data);
        tracing::debug!(
            content_type = template.content_type(),
            city = %request.city,
            country = %request.country,
            prompt_chars = prompt.chars().count(),
            "Rendered prompt"
        );

        Ok(prompt)
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, ContentError> {
        let prompt = self.render_prompt(request)?;
        let content = self.language_model.execute_prompt(&prompt).await?;

        Ok(content)
    }
}
