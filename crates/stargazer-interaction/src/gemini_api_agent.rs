//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Calls `generateContent` once per request. There is no retry and no
//! timeout beyond the HTTP client's defaults.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use stargazer_core::advisory::{GenerationConfig, GenerationError, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Thinking budget for models that think unless told otherwise.
///
/// Thinking tokens count against `maxOutputTokens`, so a short answer limit
/// can be spent before any text is produced. Flash models of the 2.5 line
/// accept a zero budget; other models get no thinking config at all.
pub fn default_thinking_budget(model: &str) -> Option<u32> {
    let model = model.strip_prefix("models/").unwrap_or(model);
    model.starts_with("gemini-2.5-flash").then_some(0)
}

/// Text generator that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    thinking_budget: Option<u32>,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            thinking_budget: default_thinking_budget(&model),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the agent at a different API root (proxies, local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the thinking budget; `None` omits `thinkingConfig`.
    pub fn with_thinking_budget(mut self, budget: Option<u32>) -> Self {
        self.thinking_budget = budget;
        self
    }

    fn build_request<'a>(&self, prompt: &'a str, config: &'a GenerationConfig) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: RequestGenerationConfig {
                sampling: config,
                thinking_config: self
                    .thinking_budget
                    .map(|thinking_budget| ThinkingConfig { thinking_budget }),
            },
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        )
    }

    async fn send_request(&self, body: &GenerateContentRequest<'_>) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(body)
            .send()
            .await
            .map_err(|err| {
                // reqwest includes the URL in its message; strip it so the key stays out
                GenerationError::Request(err.without_url().to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let body_text = response
            .text()
            .await
            .map_err(|err| GenerationError::Malformed(err.without_url().to_string()))?;

        extract_text_response(decode_response(&body_text)?)
    }
}

#[async_trait]
impl TextGenerator for GeminiApiAgent {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        let request = self.build_request(prompt, config);

        tracing::debug!(
            "[Gemini] generateContent model={} prompt_chars={}",
            self.model,
            prompt.chars().count()
        );
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: RequestGenerationConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig<'a> {
    #[serde(flatten)]
    sampling: &'a GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn decode_response(body: &str) -> Result<GenerateContentResponse, GenerationError> {
    serde_json::from_str(body).map_err(|err| GenerationError::Malformed(err.to_string()))
}

/// Joins the text parts of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Result<String, GenerationError> {
    let parts: Vec<String> = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if parts.is_empty() {
        return Err(GenerationError::NoCandidates);
    }

    Ok(parts.concat())
}

fn map_http_error(status: StatusCode, body: String) -> GenerationError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    GenerationError::Http {
        status: status.as_u16(),
        message,
    }
}
