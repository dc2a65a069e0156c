//! Language-model backends for the advisory call.

pub mod gemini_api_agent;

pub use gemini_api_agent::{DEFAULT_BASE_URL, GeminiApiAgent};
