//! Session domain module.
//!
//! A session is one user's run of the form: the reading currently shown and
//! the diary of questions asked since. Nothing here outlives the process.
//!
//! # Module Structure
//!
//! - `diary`: Question/answer records (`DiaryEntry`)
//! - `form_state`: Observable form states (`FormState`)
//! - `store`: Per-session context (`SessionStore`, `ActiveReading`)
//!
//! # Usage
//!
//! ```ignore
//! use stargazer_core::session::{DiaryEntry, FormState, SessionStore};
//! ```

mod diary;
mod form_state;
mod store;

// Re-export public API
pub use diary::{DIARY_TIMESTAMP_FORMAT, DiaryEntry};
pub use form_state::FormState;
pub use store::{ActiveReading, SessionStore};
