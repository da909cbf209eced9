//! Terminal command parser.
//!
//! Parses the line-oriented commands the bundled binary accepts into
//! structured `Command` variants the main loop can dispatch on. This is
//! the demo presentation layer's input half; the library never reads text
//! commands itself.

use crate::directory::CountryCode;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Guess a country by name: `guess <name>`.
    Guess { name: String },

    /// Remove a previous guess by code: `remove <code>`.
    Remove { code: CountryCode },

    /// Finalize the round and show the score.
    Submit,

    /// Start the next round.
    Next,

    /// Search countries by fragment: `search <text>`.
    Search { text: String },

    /// Reprint the current round state.
    State,

    /// Print the command reference.
    Help,

    /// Quit the game.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to
/// stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (trimmed, ""),
    };

    match word {
        "guess" | "g" => parse_guess(rest),
        "remove" | "rm" => parse_remove(rest),
        "search" | "s" => parse_search(rest),
        "submit" => Some(Command::Submit),
        "next" => Some(Command::Next),
        "state" => Some(Command::State),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        other => {
            eprintln!("unknown command: {} (try 'help')", other);
            None
        }
    }
}

/// Parses `guess <name>` -- everything after the keyword is the name.
fn parse_guess(rest: &str) -> Option<Command> {
    if rest.is_empty() {
        eprintln!("malformed guess: expected 'guess <country name>'");
        return None;
    }
    Some(Command::Guess {
        name: rest.to_string(),
    })
}

/// Parses `remove <code>`.
fn parse_remove(rest: &str) -> Option<Command> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        eprintln!("malformed remove: expected 'remove <code>'");
        return None;
    }
    Some(Command::Remove {
        code: CountryCode::new(rest),
    })
}

/// Parses `search <text>`.
fn parse_search(rest: &str) -> Option<Command> {
    if rest.is_empty() {
        eprintln!("malformed search: expected 'search <text>'");
        return None;
    }
    Some(Command::Search {
        text: rest.to_string(),
    })
}
