pub mod content_controller;
pub mod content_service;
pub mod prompts;
pub mod template_store;
