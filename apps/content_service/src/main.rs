use std::sync::Arc;

use anyhow::Context;
use content_service::{
    app_config::AppConfig,
    app_module::AppState,
    app_router::build_application,
    content::template_store::TemplateStore,
    telemetry::init_tracing,
};
use dotenvy::dotenv;
use seo_llm::{GeminiService, LLMService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env();
    // Without a valid config the environment is unknown; log for development.
    init_tracing(config.as_ref().map_or(true, AppConfig::is_dev))?;

    let config = config.inspect_err(|e| {
        tracing::error!(error = %e, "Refusing to start without valid configuration");
    })?;
    tracing::info!(gemini = ?config.gemini, cors = ?config.cors, "Loaded configuration");

    let language_model: Arc<dyn LLMService> = Arc::new(GeminiService::new(config.gemini.clone()));
    let templates = TemplateStore::builtin();
    tracing::info!(content_types = ?templates.content_types(), "Loaded prompt templates");
    let state = AppState::new(templates, language_model);
    let app = build_application(state, &config.cors);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("unable to bind {address}"))?;

    tracing::info!(%address, "Server started");
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
