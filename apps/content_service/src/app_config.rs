use std::env;

use axum::http::HeaderValue;
use seo_llm::gemini::{GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENVIRONMENT: &str = "dev";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not set. Please add it to your .env file.")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Cross-origin policy of the HTTP surface.
///
/// `Permissive` accepts any origin, method and header with credentials. The
/// browser does not accept wildcards together with credentials, so the
/// request's own origin, method and headers are echoed back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Permissive,
    AllowList(Vec<String>),
}

impl CorsPolicy {
    pub fn layer(&self) -> CorsLayer {
        let origin = match self {
            CorsPolicy::Permissive => AllowOrigin::mirror_request(),
            CorsPolicy::AllowList(origins) => AllowOrigin::list(
                origins
                    .iter()
                    .filter_map(|origin| HeaderValue::from_str(origin).ok()),
            ),
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

/// Process configuration, read once at startup.
///
/// | Env Var           | Default                                            |
/// |-------------------|----------------------------------------------------|
/// | `GEMINI_API_KEY`  | required                                           |
/// | `GEMINI_MODEL`    | `gemini-2.5-pro`                                   |
/// | `GEMINI_API_BASE` | `https://generativelanguage.googleapis.com/v1beta` |
/// | `HOST`            | `0.0.0.0`                                          |
/// | `PORT`            | `8000`                                             |
/// | `CORS_ORIGINS`    | unset, any origin allowed                          |
/// | `APP_ENVIRONMENT` | `dev`                                              |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub cors: CorsPolicy,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = var("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let gemini = GeminiConfig::new(api_key.trim())
            .with_model(var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .with_api_base(var("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()));

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a valid u16, got {port}")))?,
            None => DEFAULT_PORT,
        };

        let cors = match var("CORS_ORIGINS") {
            Some(origins) => {
                let origins: Vec<String> = origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect();
                if let Some(bad) = origins
                    .iter()
                    .find(|origin| HeaderValue::from_str(origin).is_err())
                {
                    return Err(ConfigError::Invalid(format!(
                        "CORS_ORIGINS contains an invalid origin: {bad}"
                    )));
                }
                CorsPolicy::AllowList(origins)
            }
            None => CorsPolicy::Permissive,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment: var("APP_ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            cors,
            gemini,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_dev(&self) -> bool {
        self.environment == DEFAULT_ENVIRONMENT
    }
}
