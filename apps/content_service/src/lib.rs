pub mod app_config;
pub mod app_module;
pub mod app_router;
pub mod content;
pub mod error;
pub mod health;
pub mod telemetry;
