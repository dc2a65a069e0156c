mod bootstrap;
mod helper;
mod input;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::{Result, anyhow};
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use stargazer_application::{AdvisoryClient, AskOutcome, FormController, SubmitOutcome};
use stargazer_core::birth::BirthForm;
use stargazer_core::config::API_KEY_ENV_VAR;
use stargazer_infrastructure::{ConfigService, StargazerPaths};

use crate::helper::CliHelper;
use crate::input::{Command, parse_command, parse_date_input, parse_time_input};

type Repl = Editor<CliHelper, DefaultHistory>;

/// Result of one prompt: a line, or a request to leave.
enum Prompted<T> {
    Value(T),
    Exit,
}

/// Reads one line. Ctrl-C repeats the prompt, Ctrl-D leaves.
fn read_line(rl: &mut Repl, prompt: &str) -> Result<Prompted<String>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => return Ok(Prompted::Value(line)),
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' or press CTRL-D to exit.".yellow());
            }
            Err(ReadlineError::Eof) => return Ok(Prompted::Exit),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Reads a field that must parse, re-prompting with a warning until it does.
fn read_parsed<T, E: std::fmt::Display>(
    rl: &mut Repl,
    prompt: &str,
    parse: impl Fn(&str) -> std::result::Result<T, E>,
    hint: &str,
) -> Result<Prompted<T>> {
    loop {
        let Prompted::Value(line) = read_line(rl, prompt)? else {
            return Ok(Prompted::Exit);
        };
        match parse(&line) {
            Ok(value) => return Ok(Prompted::Value(value)),
            Err(err) => println!("{}", format!("⚠ {err}. {hint}").yellow()),
        }
    }
}

/// Collects the four birth-detail fields.
fn read_birth_form(rl: &mut Repl) -> Result<Prompted<BirthForm>> {
    println!("{}", "Birth details".bright_magenta().bold());

    let Prompted::Value(name) = read_line(rl, "Name: ")? else {
        return Ok(Prompted::Exit);
    };
    let Prompted::Value(date_of_birth) = read_parsed(
        rl,
        "Date of Birth [2000-01-01]: ",
        parse_date_input,
        "Use YYYY-MM-DD.",
    )?
    else {
        return Ok(Prompted::Exit);
    };
    let Prompted::Value(time_of_birth) = read_parsed(
        rl,
        "Time of Birth [12:00]: ",
        parse_time_input,
        "Use HH:MM.",
    )?
    else {
        return Ok(Prompted::Exit);
    };
    let Prompted::Value(place_of_birth) = read_line(rl, "Place of Birth: ")? else {
        return Ok(Prompted::Exit);
    };

    Ok(Prompted::Value(BirthForm {
        name,
        date_of_birth,
        time_of_birth,
        place_of_birth,
    }))
}

/// Prompts for birth details until a reading is produced.
fn run_form(rl: &mut Repl, controller: &mut FormController) -> Result<Prompted<()>> {
    loop {
        let Prompted::Value(form) = read_birth_form(rl)? else {
            return Ok(Prompted::Exit);
        };

        match controller.submit(&form) {
            SubmitOutcome::Accepted(reading) => {
                println!("{}", render::reading(&reading));
                println!();
                println!("{}", "Ask a Question to the Stars".bright_magenta().bold());
                println!("{}", render::help());
                print_diary(controller);
                return Ok(Prompted::Value(()));
            }
            SubmitOutcome::Rejected(notice) => println!("{}", render::notice(&notice)),
        }
    }
}

fn print_diary(controller: &FormController) {
    if let Some(diary) = render::diary(controller.diary()) {
        println!("{diary}");
    }
}

async fn ask(controller: &mut FormController, question: &str) {
    println!("{}", "Consulting the cosmos...".bright_black());

    match controller.ask(question).await {
        AskOutcome::Answered { entry, notices } => {
            for notice in &notices {
                println!("{}", render::notice(notice));
            }
            println!("{}", render::answer(&entry.answer));
            println!();
            print_diary(controller);
        }
        AskOutcome::Rejected(notice) => println!("{}", render::notice(&notice)),
    }
}

/// The main entry point for the Stargazer REPL.
///
/// Startup loads config.toml and the Gemini credential; a missing
/// credential stops the program with setup instructions. The REPL then
/// walks through the birth-details form and answers questions one at a
/// time, awaiting each answer before reading the next line.
#[tokio::main]
async fn main() -> Result<()> {
    // ===== Configuration =====
    let paths = StargazerPaths::new(None).map_err(|e| anyhow!("{e}"))?;
    let config = ConfigService::new(&paths).get_config()?;
    let log_guard = logging::init_or_warn(&paths.logs_dir(), &config.logging.filter);
    tracing::info!("[Startup] stargazer {}", env!("CARGO_PKG_VERSION"));

    let env_api_key = std::env::var(API_KEY_ENV_VAR).ok();
    let agent = match bootstrap::build_agent(&paths, &config, env_api_key).await {
        Ok(agent) => agent,
        Err(err) => {
            tracing::error!("[Startup] {}", err);
            eprintln!("{}", err.to_string().red());
            // exit() skips destructors; flush the log writer first
            drop(log_guard);
            std::process::exit(2);
        }
    };

    let mut controller = FormController::new(AdvisoryClient::new(Arc::new(agent)));
    tracing::info!("[Startup] Session {} started", controller.session().id());

    // ===== REPL Setup =====
    let mut rl: Repl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", render::banner());
    println!();

    if let Prompted::Exit = run_form(&mut rl, &mut controller)? {
        println!("{}", "Goodbye!".bright_green());
        return Ok(());
    }

    // ===== Main REPL Loop =====
    loop {
        let Prompted::Value(line) = read_line(&mut rl, "✦ ")? else {
            break;
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", render::help()),
            Command::Diary => match render::diary(controller.diary()) {
                Some(diary) => println!("{diary}"),
                None => println!("{}", "Your diary is empty.".bright_black()),
            },
            Command::NewReading => {
                if let Prompted::Exit = run_form(&mut rl, &mut controller)? {
                    break;
                }
            }
            Command::Ask(question) => ask(&mut controller, &question).await,
            Command::Unknown(cmd) => {
                println!("{}", format!("Unknown command: {cmd}. Type /help.").bright_black())
            }
        }
    }

    println!("{}", "Goodbye!".bright_green());
    let session = controller.session();
    tracing::info!(
        "[Shutdown] Session {} ended with {} diary entries",
        session.id(),
        session.diary_len()
    );
    Ok(())
}
