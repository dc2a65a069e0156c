//! User-visible notices raised by the form.

use serde::{Deserialize, Serialize};

pub const MISSING_DETAILS_WARNING: &str = "Please fill in all the details.";
pub const EMPTY_QUESTION_WARNING: &str = "Please type your question before asking.";
pub const NO_READING_WARNING: &str = "Get your astrology reading before asking the stars.";
pub const SERVICE_ERROR_NOTICE: &str = "An error occurred while consulting the stars. \
     The cosmic energies might be disrupted. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A message shown to the user alongside the normal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
