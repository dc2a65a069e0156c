//! rustyline helper for the question prompt.
//!
//! Completes slash commands with their summaries, hints the rest of a
//! partially typed command, and colours known commands cyan and unknown
//! ones red. Questions are left untouched.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::input::COMMANDS;

/// The command word of a line, when the cursor is still inside it.
fn command_prefix(line: &str) -> Option<&str> {
    (line.starts_with('/') && !line.contains(char::is_whitespace)).then_some(line)
}

fn completions(prefix: &str) -> Vec<Pair> {
    COMMANDS
        .iter()
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(name, summary)| Pair {
            display: format!("{name:<8} {summary}"),
            replacement: if *name == "/ask" {
                "/ask ".to_string()
            } else {
                name.to_string()
            },
        })
        .collect()
}

fn hint_for(prefix: &str) -> Option<String> {
    // Only hint when the prefix is unambiguous.
    let mut matches = COMMANDS.iter().filter(|(name, _)| name.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some((name, _)), None) if name.len() > prefix.len() => Some(name[prefix.len()..].to_string()),
        _ => None,
    }
}

fn is_known_command(word: &str) -> bool {
    matches!(word, "quit" | "exit" | "/exit") || COMMANDS.iter().any(|(name, _)| *name == word)
}

#[derive(Clone, Default)]
pub struct CliHelper;

impl CliHelper {
    pub fn new() -> Self {
        Self
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = command_prefix(&line[..pos])
            .map(completions)
            .unwrap_or_default();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }

        let split = line.find(char::is_whitespace).unwrap_or(line.len());
        let (word, rest) = line.split_at(split);
        let word = if is_known_command(word) {
            word.bright_cyan()
        } else {
            word.red()
        };
        Owned(format!("{word}{rest}"))
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        // Hints only make sense with the cursor at the end of the line.
        if pos < line.len() {
            return None;
        }
        command_prefix(line).and_then(hint_for)
    }
}

impl Validator for CliHelper {}
