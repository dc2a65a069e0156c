//! Terminal rendering of readings, notices and the diary.

use colored::Colorize;
use stargazer_application::{Notice, NoticeLevel};
use stargazer_core::reading::Reading;
use stargazer_core::session::DiaryEntry;

const RULE: &str = "---";

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "=== Stargazer: AI Astrologer ===".bright_magenta().bold(),
        "Enter your birth details and ask the stars for guidance.".bright_black()
    )
}

pub fn help() -> String {
    [
        "Type a question and press Enter to ask the stars.",
        "  /ask <question>  ask explicitly",
        "  /diary           show your astrology diary",
        "  /new             enter new birth details",
        "  /help            show this help",
        "  /quit            leave (also: quit, exit, Ctrl-D)",
    ]
    .join("\n")
    .bright_black()
    .to_string()
}

pub fn reading(reading: &Reading) -> String {
    let mut out = vec![RULE.bright_black().to_string()];
    out.extend(reading.text.lines().map(|line| line.bright_yellow().to_string()));
    out.join("\n")
}

pub fn notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Warning => format!("⚠ {}", notice.message).yellow().to_string(),
        NoticeLevel::Error => format!("✖ {}", notice.message).red().to_string(),
    }
}

pub fn answer(text: &str) -> String {
    text.lines()
        .map(|line| line.bright_blue().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the full diary in the order given (callers pass newest first).
///
/// Returns `None` for an empty diary so nothing is printed.
pub fn diary<'a>(entries: impl IntoIterator<Item = &'a DiaryEntry>) -> Option<String> {
    let blocks: Vec<String> = entries
        .into_iter()
        .map(|entry| {
            format!(
                "{} - You asked: {}\n> Astrologer's Answer: {}\n{}",
                entry.timestamp.bold(),
                entry.question,
                entry.answer,
                RULE.bright_black()
            )
        })
        .collect();

    if blocks.is_empty() {
        return None;
    }

    Some(format!(
        "{}\n{}\n{}",
        RULE.bright_black(),
        "📖 Your Astrology Diary".bright_magenta().bold(),
        blocks.join("\n")
    ))
}
