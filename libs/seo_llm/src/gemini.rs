use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::{GeneratedContent, LLMError, LLMService};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Endpoint and credential for the Gemini `generateContent` API.
///
/// The key travels as the `key` query parameter. `Debug` output redacts it so
/// the config can be logged.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// URL of the `generateContent` method, without the credential.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// Single-turn request with default generation settings.
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

/// Status and untouched body of an upstream response.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Sends one `generateContent` request and returns the response as-is,
    /// whatever its status.
    pub async fn send(&self, prompt: &str) -> Result<RawResponse, LLMError> {
        let url = self.config.endpoint_url();
        tracing::debug!(%url, prompt_chars = prompt.chars().count(), "Sending prompt to Gemini");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::info!(status = status.as_u16(), body_bytes = body.len(), "Gemini API responded");

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl LLMService for GeminiService {
    async fn execute_prompt(&self, prompt: &str) -> Result<GeneratedContent, LLMError> {
        let RawResponse { status, body } = self.send(prompt).await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), %body, "Gemini API returned an error");
            return Err(LLMError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_generated_content(&body))
    }
}

/// Value at `candidates[0].content.parts[0].text`, whatever its JSON type.
pub fn extract_text(body: &Value) -> Option<&Value> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")
}

fn parse_generated_content(body: &str) -> GeneratedContent {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Gemini response is not JSON, returning body as text");
            return GeneratedContent::Raw(Value::String(body.to_string()));
        }
    };

    match extract_text(&parsed) {
        Some(Value::String(text)) => GeneratedContent::Text(text.clone()),
        Some(other) => GeneratedContent::Raw(other.clone()),
        None => {
            tracing::warn!("Gemini response has no candidate text, returning raw body");
            GeneratedContent::Raw(parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const GENERATE_PATH: &str = "/models/gemini-2.5-pro:generateContent";

    fn service_for(server: &mockito::ServerGuard) -> GeminiService {
        GeminiService::new(GeminiConfig::new("test-key").with_api_base(server.url()))
    }

    #[test]
    fn endpoint_url_joins_base_and_model() {
        let config = GeminiConfig::new("k")
            .with_api_base("http://localhost:9000/v1beta/")
            .with_model("gemini-2.5-flash");

        assert_eq!(
            config.endpoint_url(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let rendered = format!("{:?}", GeminiConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("gemini-2.5-pro"));
    }

    #[test]
    fn request_body_has_only_contents() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("Say hello")).unwrap();
        assert_eq!(body, json!({"contents": [{"parts": [{"text": "Say hello"}]}]}));
    }

    #[test]
    fn extract_text_returns_value_at_path() {
        let body = json!({"candidates": [{"content": {"parts": [{"text": "Hi"}]}}]});
        assert_eq!(extract_text(&body), Some(&json!("Hi")));
        assert_eq!(extract_text(&json!({"candidates": []})), None);
    }

    #[test]
    fn non_string_text_is_returned_instead_of_whole_body() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":42}]}}],"usageMetadata":{}}"#;
        assert_eq!(parse_generated_content(body), GeneratedContent::Raw(json!(42)));
    }

    #[tokio::test]
    async fn transport_error_does_not_expose_api_key() {
        let service = GeminiService::new(
            GeminiConfig::new("secret-key-123").with_api_base("http://127.0.0.1:9"),
        );

        let err = service.execute_prompt("Say hello").await.unwrap_err();

        assert!(matches!(err, LLMError::Transport(_)));
        assert!(!err.to_string().contains("secret-key-123"));
        assert!(!format!("{err:?}").contains("secret-key-123"));
    }

    #[tokio::test]
    async fn returns_first_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::Json(
                json!({"contents": [{"parts": [{"text": "Say hello"}]}]}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#)
            .create_async()
            .await;

        let content = service_for(&server).execute_prompt("Say hello").await.unwrap();

        assert_eq!(content, GeneratedContent::Text("Hello".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn falls_back_to_raw_body_when_text_path_is_missing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let content = service_for(&server).execute_prompt("anything").await.unwrap();

        assert_eq!(content, GeneratedContent::Raw(json!({})));
    }

    #[tokio::test]
    async fn non_json_success_body_is_returned_as_string() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("plain text")
            .create_async()
            .await;

        let content = service_for(&server).execute_prompt("anything").await.unwrap();

        assert_eq!(content, GeneratedContent::Raw(json!("plain text")));
    }

    #[tokio::test]
    async fn error_status_carries_body_verbatim() {
        let upstream_body = r#"{"error":{"code":500,"message":"Internal error encountered."}}"#;
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(upstream_body)
            .expect(1)
            .create_async()
            .await;

        let err = service_for(&server).execute_prompt("anything").await.unwrap_err();

        match err {
            LLMError::Upstream { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, upstream_body);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_exposes_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body("API key not valid")
            .create_async()
            .await;

        let raw = service_for(&server).send("Say hello").await.unwrap();

        assert_eq!(raw.status, StatusCode::FORBIDDEN);
        assert_eq!(raw.body, "API key not valid");
    }
}
