//! Per-session context.

use uuid::Uuid;

use super::diary::DiaryEntry;
use super::form_state::FormState;
use crate::reading::Reading;
use crate::zodiac::ZodiacSign;

/// The reading on display together with the sign and name it was made for.
///
/// The three values are only ever replaced as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveReading {
    pub reading: Reading,
    pub sign: ZodiacSign,
    pub user_name: String,
}

/// Mutable state for one user session.
///
/// Holds the current reading and an append-only diary. Entries are never
/// removed and the diary has no size cap; the whole store is dropped when
/// the session ends.
#[derive(Debug, Clone)]
pub struct SessionStore {
    id: String,
    active: Option<ActiveReading>,
    diary: Vec<DiaryEntry>,
}

impl SessionStore {
    /// Creates an empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            active: None,
            diary: Vec::new(),
        }
    }

    /// Returns the session in `slot`, creating an empty one on first access.
    pub fn initialize_if_absent(slot: &mut Option<SessionStore>) -> &mut SessionStore {
        slot.get_or_insert_with(SessionStore::new)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces the reading, sign and name together.
    pub fn set_reading(&mut self, reading: Reading, sign: ZodiacSign, user_name: impl Into<String>) {
        self.active = Some(ActiveReading {
            reading,
            sign,
            user_name: user_name.into(),
        });
    }

    /// Adds an entry to the end of the diary.
    pub fn append_diary_entry(&mut self, entry: DiaryEntry) {
        self.diary.push(entry);
    }

    pub fn is_reading_generated(&self) -> bool {
        self.active.is_some()
    }

    pub fn form_state(&self) -> FormState {
        if self.is_reading_generated() {
            FormState::ReadingShown
        } else {
            FormState::NoReading
        }
    }

    pub fn active_reading(&self) -> Option<&ActiveReading> {
        self.active.as_ref()
    }

    pub fn reading(&self) -> Option<&Reading> {
        self.active.as_ref().map(|active| &active.reading)
    }

    pub fn sign(&self) -> Option<ZodiacSign> {
        self.active.as_ref().map(|active| active.sign)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.user_name.as_str())
    }

    /// Diary entries, most recent first.
    pub fn diary_newest_first(&self) -> impl DoubleEndedIterator<Item = &DiaryEntry> + '_ {
        self.diary.iter().rev()
    }

    pub fn diary_len(&self) -> usize {
        self.diary.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
