//! Diary entry types.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Timestamp layout used for diary entries.
pub const DIARY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One question/answer exchange with the stars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// The question exactly as the user typed it.
    pub question: String,
    /// The answer shown to the user (fallback text included).
    pub answer: String,
    /// Local time of the exchange, `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
}

impl DiaryEntry {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Creates an entry stamped with the given instant.
    pub fn at<Tz: TimeZone>(
        question: impl Into<String>,
        answer: impl Into<String>,
        when: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self::new(question, answer, when.format(DIARY_TIMESTAMP_FORMAT).to_string())
    }

    /// Creates an entry stamped with the current local time.
    pub fn now(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::at(question, answer, &Local::now())
    }
}
