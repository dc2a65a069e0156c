//! Text generation interface used by the advisory call.
//!
//! The application layer talks to the language model only through
//! [`TextGenerator`], so the Gemini HTTP agent and test doubles are
//! interchangeable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sampling parameters sent with a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Fixed settings for astrologer answers.
    pub const ASTROLOGER: GenerationConfig = GenerationConfig {
        temperature: 0.8,
        top_p: 0.95,
        max_output_tokens: 300,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::ASTROLOGER
    }
}

/// Failure of a single generation call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The request never produced an HTTP response (DNS, TLS, connection).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response carried no text (blocked or empty candidate list).
    #[error("response contained no text candidates")]
    NoCandidates,

    /// The prompt could not be rendered.
    #[error("prompt rendering failed: {0}")]
    Prompt(String),
}

/// A generative-language backend.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier, for logging.
    fn model(&self) -> &str;

    /// Generates text for `prompt` with the given sampling settings.
    ///
    /// Returns the raw generated text; callers decide how to treat
    /// whitespace-only output.
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError>;
}
