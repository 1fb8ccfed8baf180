use std::sync::Arc;

use seo_llm::LLMService;

use crate::content::{content_service::ContentService, template_store::TemplateStore};

#[derive(Clone)]
pub struct AppService {
    pub content_service: ContentService,
}

impl AppService {
    pub fn new(templates: TemplateStore, language_model: Arc<dyn LLMService>) -> Self {
        let content_service = ContentService::new(templates, language_model);

        Self { content_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(templates: TemplateStore, language_model: Arc<dyn LLMService>) -> Self {
        Self {
            service: AppService::new(templates, language_model),
        }
    }
}
