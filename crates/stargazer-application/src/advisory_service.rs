//! Advisory Service
//!
//! Answers free-text questions in the voice of an astrologer. One request
//! per question, fixed sampling settings, and a typed outcome so callers
//! can tell a real answer from a substituted one.

use std::sync::Arc;

use minijinja::{Environment, context};
use stargazer_core::advisory::{GenerationConfig, GenerationError, TextGenerator};
use stargazer_core::zodiac::ZodiacSign;

/// Answer used when the service returns only whitespace.
pub const EMPTY_RESPONSE_PLACEHOLDER: &str =
    "The stars are quiet right now, but trust that guidance will come to you soon.";

/// Answer used when the service call fails.
pub const SERVICE_FALLBACK_ANSWER: &str =
    "Sorry, I couldn't connect to the celestial realm. Please try again.";

const ASTROLOGER_PROMPT: &str = r#"You are a wise and compassionate AI Astrologer. You provide insightful and positive guidance based on the stars.
The user is {{ name }}, whose zodiac sign is {{ sign }}.
Answer their astrology question with warmth, wisdom, and a touch of cosmic magic.

Question: "{{ question }}"
Answer:"#;

/// Result of one advisory call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisoryOutcome {
    /// The trimmed, non-empty answer text.
    Answer(String),
    /// The service succeeded but said nothing.
    EmptyResponse,
    /// The call failed; the fallback answer applies.
    ServiceError(GenerationError),
}

impl AdvisoryOutcome {
    fn from_generation(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Self::EmptyResponse
                } else {
                    Self::Answer(trimmed.to_string())
                }
            }
            Err(err) => Self::ServiceError(err),
        }
    }

    /// Text to show the user, with placeholder or fallback substituted.
    pub fn answer_text(&self) -> &str {
        match self {
            Self::Answer(text) => text,
            Self::EmptyResponse => EMPTY_RESPONSE_PLACEHOLDER,
            Self::ServiceError(_) => SERVICE_FALLBACK_ANSWER,
        }
    }

    pub fn into_answer(self) -> String {
        match self {
            Self::Answer(text) => text,
            other => other.answer_text().to_string(),
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match self {
            Self::ServiceError(err) => Some(err),
            _ => None,
        }
    }
}

/// Client for the astrologer advisory call.
#[derive(Clone)]
pub struct AdvisoryClient {
    generator: Arc<dyn TextGenerator>,
    config: GenerationConfig,
    templates: Environment<'static>,
}

impl AdvisoryClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            config: GenerationConfig::ASTROLOGER,
            templates: Environment::new(),
        }
    }

    pub fn generation_config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Renders the astrologer prompt. The question is embedded verbatim.
    pub fn render_prompt(
        &self,
        question: &str,
        sign: ZodiacSign,
        name: &str,
    ) -> Result<String, GenerationError> {
        self.templates
            .render_str(
                ASTROLOGER_PROMPT,
                context! {
                    name => name,
                    sign => sign.to_string(),
                    question => question,
                },
            )
            .map_err(|err| GenerationError::Prompt(err.to_string()))
    }

    /// Asks the question and classifies the result. Never fails.
    pub async fn consult(&self, question: &str, sign: ZodiacSign, name: &str) -> AdvisoryOutcome {
        let result = match self.render_prompt(question, sign, name) {
            Ok(prompt) => self.generator.generate(&prompt, &self.config).await,
            Err(err) => Err(err),
        };

        let outcome = AdvisoryOutcome::from_generation(result);
        match &outcome {
            AdvisoryOutcome::Answer(text) => tracing::info!(
                "[Advisory] Answer received from {} ({} chars)",
                self.generator.model(),
                text.chars().count()
            ),
            AdvisoryOutcome::EmptyResponse => tracing::info!(
                "[Advisory] Empty answer from {}, using placeholder",
                self.generator.model()
            ),
            AdvisoryOutcome::ServiceError(err) => tracing::warn!(
                "[Advisory] Call to {} failed, using fallback: {}",
                self.generator.model(),
                err
            ),
        }
        outcome
    }

    /// Asks the question and returns the text to display.
    pub async fn ask(&self, question: &str, sign: ZodiacSign, name: &str) -> String {
        self.consult(question, sign, name).await.into_answer()
    }
}
