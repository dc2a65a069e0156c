//! Parsing of REPL lines and form fields.

use chrono::{NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Slash commands with the one-line summary shown during completion.
pub const COMMANDS: [(&str, &str); 5] = [
    ("/ask", "ask the stars a question"),
    ("/diary", "show your astrology diary"),
    ("/new", "enter new birth details"),
    ("/help", "show help"),
    ("/quit", "leave"),
];

/// Date offered when the date prompt is left blank.
pub fn default_date_of_birth() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2000, 1, 1)
}

/// Time offered when the time prompt is left blank.
pub fn default_time_of_birth() -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(12, 0, 0)
}

/// Parses `YYYY-MM-DD`; a blank line selects the default date.
pub fn parse_date_input(raw: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default_date_of_birth());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map(Some)
}

/// Parses `HH:MM` or `HH:MM:SS`; a blank line selects the default time.
pub fn parse_time_input(raw: &str) -> Result<Option<NaiveTime>, chrono::ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default_time_of_birth());
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(Some)
}

/// A line typed at the question prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    Diary,
    NewReading,
    Help,
    Quit,
    Unknown(String),
}

/// Classifies a question-prompt line.
///
/// Anything that is not a slash command is a question and is kept verbatim,
/// including an empty line.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "quit" | "exit" | "/quit" | "/exit" => return Command::Quit,
        "/diary" => return Command::Diary,
        "/new" => return Command::NewReading,
        "/help" => return Command::Help,
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix("/ask") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            let question = rest.strip_prefix(' ').unwrap_or(rest);
            return Command::Ask(question.to_string());
        }
    }

    if trimmed.starts_with('/') {
        return Command::Unknown(trimmed.to_string());
    }

    Command::Ask(line.to_string())
}
