//! Sends a fixed prompt straight to Gemini to confirm the key and endpoint
//! work, without going through the HTTP service.

use anyhow::bail;
use content_service::{app_config::AppConfig, telemetry::init_tracing};
use dotenvy::dotenv;
use seo_llm::GeminiService;

const CHECK_PROMPT: &str = "Say hello";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env();
    init_tracing(config.as_ref().map_or(true, AppConfig::is_dev))?;

    let config = config?;
    let service = GeminiService::new(config.gemini);
    tracing::info!(endpoint = %service.config().endpoint_url(), "Checking Gemini connectivity");

    let response = service.send(CHECK_PROMPT).await?;
    tracing::info!(status = response.status.as_u16(), "Status code");
    tracing::info!(body = %response.body, "Response");

    if !response.status.is_success() {
        bail!("Gemini returned {}", response.status);
    }

    Ok(())
}
