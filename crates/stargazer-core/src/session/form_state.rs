//! Form state types.

use serde::{Deserialize, Serialize};

/// Observable state of the birth-details form.
///
/// The question action is only available in `ReadingShown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormState {
    /// No reading has been generated yet.
    NoReading,
    /// A reading is displayed and questions may be asked.
    ReadingShown,
}
