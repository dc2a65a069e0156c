//! Form controller.
//!
//! Drives the two-state form: `NoReading` until a complete set of birth
//! details is submitted, then `ReadingShown`, where questions may be asked.
//! The controller owns the session context; nothing is shared between
//! controllers.

use stargazer_core::birth::{BirthForm, is_missing};
use stargazer_core::reading::Reading;
use stargazer_core::session::{DiaryEntry, FormState, SessionStore};

use crate::advisory_service::{AdvisoryClient, AdvisoryOutcome};
use crate::notice::{
    EMPTY_QUESTION_WARNING, MISSING_DETAILS_WARNING, NO_READING_WARNING, Notice,
    SERVICE_ERROR_NOTICE,
};

/// Result of submitting the birth-details form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The reading was generated and is now on display.
    Accepted(Reading),
    /// Validation failed; nothing changed.
    Rejected(Notice),
}

/// Result of asking a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// The exchange was recorded. `notices` is non-empty when the service failed.
    Answered {
        entry: DiaryEntry,
        notices: Vec<Notice>,
    },
    /// The question was not sent; nothing changed.
    Rejected(Notice),
}

pub struct FormController {
    advisor: AdvisoryClient,
    session: Option<SessionStore>,
}

impl FormController {
    pub fn new(advisor: AdvisoryClient) -> Self {
        Self {
            advisor,
            session: None,
        }
    }

    /// The session context, created empty on first access.
    pub fn session(&mut self) -> &mut SessionStore {
        SessionStore::initialize_if_absent(&mut self.session)
    }

    pub fn state(&self) -> FormState {
        self.session
            .as_ref()
            .map(SessionStore::form_state)
            .unwrap_or(FormState::NoReading)
    }

    /// Validates the form and, when complete, replaces the current reading.
    pub fn submit(&mut self, form: &BirthForm) -> SubmitOutcome {
        let session = self.session();

        let Some(details) = form.validate() else {
            tracing::debug!("[Form] Submission rejected for session {}", session.id());
            return SubmitOutcome::Rejected(Notice::warning(MISSING_DETAILS_WARNING));
        };

        let reading = Reading::for_birth(&details);
        session.set_reading(reading.clone(), reading.sign, details.name());
        tracing::info!(
            "[Form] Reading generated for session {} (sign {})",
            session.id(),
            reading.sign
        );

        SubmitOutcome::Accepted(reading)
    }

    /// Sends a question to the stars and records the exchange in the diary.
    ///
    /// The question is stored exactly as given. A failed service call still
    /// records an entry, carrying the fallback answer.
    pub async fn ask(&mut self, question: &str) -> AskOutcome {
        let session = self.session();

        let Some(active) = session.active_reading() else {
            return AskOutcome::Rejected(Notice::warning(NO_READING_WARNING));
        };
        if is_missing(question) {
            return AskOutcome::Rejected(Notice::warning(EMPTY_QUESTION_WARNING));
        }

        let sign = active.sign;
        let name = active.user_name.clone();
        let session_id = session.id().to_string();

        let outcome = self.advisor.consult(question, sign, &name).await;
        let notices = match &outcome {
            AdvisoryOutcome::ServiceError(err) => vec![
                Notice::error(SERVICE_ERROR_NOTICE),
                Notice::error(format!("Details: {err}")),
            ],
            _ => Vec::new(),
        };

        let entry = DiaryEntry::now(question, outcome.into_answer());
        let session = self.session();
        session.append_diary_entry(entry.clone());
        tracing::debug!(
            "[Form] Diary entry {} recorded for session {}",
            session.diary_len(),
            session_id
        );

        AskOutcome::Answered { entry, notices }
    }

    /// The full diary, most recent first.
    pub fn diary(&self) -> impl Iterator<Item = &DiaryEntry> + '_ {
        self.session
            .iter()
            .flat_map(|session| session.diary_newest_first())
    }

    /// The reading on display, if any.
    pub fn reading(&self) -> Option<&Reading> {
        self.session.as_ref().and_then(SessionStore::reading)
    }
}
