//! Borderline -- a border-guessing geography quiz for the terminal.
//!
//! This binary is the demo presentation layer: it loads the bundled data
//! artifacts, drives the quiz through the `Game` command boundary, and
//! renders snapshots as text. Reads commands from stdin and writes to
//! stdout.

use std::io::{self, BufRead, Write};
use std::process;

use borderline::cli::{parse_command, Command};
use borderline::directory::Directory;
use borderline::game::{Game, QuizError};
use borderline::view::StateSnapshot;

static COUNTRIES_JSON: &str = include_str!("../data/countries.json");
static BORDERS_JSON: &str = include_str!("../data/borders.json");
static WORLD_JSON: &str = include_str!("../data/world.json");

/// How many search hits to show.
const SEARCH_LIMIT: usize = 10;

fn main() {
    let directory = match Directory::from_json(COUNTRIES_JSON, BORDERS_JSON, WORLD_JSON) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("failed to load quiz data: {}", e);
            eprintln!("regenerate the data artifacts and try again");
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut game = Game::new(directory);

    if let Err(e) = game.start_round() {
        eprintln!("failed to start a round: {}", e);
        process::exit(1);
    }

    writeln!(out, "borderline -- name every neighbor of the target country").unwrap();
    writeln!(out, "type 'help' for commands").unwrap();
    render_round_header(&mut out, &game);
    out.flush().unwrap();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Guess { name } => handle_guess(&mut out, &mut game, &name),
            Command::Remove { code } => match game.remove_guess(&code) {
                Ok(true) => writeln!(out, "removed {}", code).unwrap(),
                Ok(false) => writeln!(out, "no guess for {}", code).unwrap(),
                Err(e) => report(&e),
            },
            Command::Submit => handle_submit(&mut out, &mut game),
            Command::Next => match game.next_round() {
                Ok(()) => render_round_header(&mut out, &game),
                Err(e) => report(&e),
            },
            Command::Search { text } => handle_search(&mut out, &game, &text),
            Command::State => match game.snapshot() {
                Ok(snap) => render_state(&mut out, &snap),
                Err(e) => report(&e),
            },
            Command::Help => render_help(&mut out),
            Command::Quit => break,
        }
        out.flush().unwrap();
    }

    writeln!(
        out,
        "final score: {} after {} round(s)",
        game.session().score(),
        game.session().round_number()
    )
    .unwrap();
    out.flush().unwrap();
}

/// Prints a user-facing message for a failed command.
fn report(err: &QuizError) {
    eprintln!("{}", err);
}

fn handle_guess<W: Write>(out: &mut W, game: &mut Game, name: &str) {
    match game.add_guess(name) {
        Ok(guess) => {
            let verdict = if guess.is_neighbor { "correct" } else { "wrong" };
            writeln!(out, "{} ({}) -- {}", guess.display_name, guess.code, verdict).unwrap();
            if let Ok(snap) = game.snapshot() {
                writeln!(out, "found {}/{}", snap.found_count, snap.answer_count).unwrap();
            }
        }
        Err(e) => report(&e),
    }
}

fn handle_submit<W: Write>(out: &mut W, game: &mut Game) {
    match game.submit() {
        Ok(summary) => {
            writeln!(
                out,
                "round over: +{} / -{} ({} of {} neighbors found)",
                summary.gains, summary.losses, summary.gains, summary.total_neighbors
            )
            .unwrap();
            if let Ok(snap) = game.snapshot() {
                let missed: Vec<&str> = snap
                    .guesses
                    .iter()
                    .filter(|g| g.revealed)
                    .map(|g| g.display_name.as_str())
                    .collect();
                if !missed.is_empty() {
                    writeln!(out, "you missed: {}", missed.join(", ")).unwrap();
                }
                writeln!(out, "score: {}", snap.score).unwrap();
            }
            writeln!(out, "type 'next' for a new round").unwrap();
        }
        Err(e) => report(&e),
    }
}

fn handle_search<W: Write>(out: &mut W, game: &Game, text: &str) {
    match game.search(text, &Default::default()) {
        Ok(hits) => {
            if hits.is_empty() {
                writeln!(out, "no matches").unwrap();
                return;
            }
            for country in hits.iter().take(SEARCH_LIMIT) {
                writeln!(out, "  {}  {}", country.code, country.name).unwrap();
            }
        }
        Err(e) => report(&e),
    }
}

fn render_round_header<W: Write>(out: &mut W, game: &Game) {
    if let Ok(snap) = game.snapshot() {
        writeln!(
            out,
            "round {}: name the {} neighbor(s) of {}",
            snap.round_number, snap.answer_count, snap.target.name
        )
        .unwrap();
    }
}

fn render_state<W: Write>(out: &mut W, snap: &StateSnapshot) {
    writeln!(
        out,
        "round {} -- target {} ({}), found {}/{}, score {}",
        snap.round_number,
        snap.target.name,
        snap.target.code,
        snap.found_count,
        snap.answer_count,
        snap.score
    )
    .unwrap();
    for guess in &snap.guesses {
        let mark = if guess.revealed {
            "missed"
        } else if guess.is_neighbor {
            "correct"
        } else {
            "wrong"
        };
        writeln!(out, "  {}  {}  {}", guess.code, guess.display_name, mark).unwrap();
    }
    if snap.finalized {
        writeln!(out, "round finalized; type 'next' to continue").unwrap();
    }
}

fn render_help<W: Write>(out: &mut W) {
    writeln!(out, "commands:").unwrap();
    writeln!(out, "  guess <name>   guess a neighboring country (alias: g)").unwrap();
    writeln!(out, "  remove <code>  withdraw a guess by its code (alias: rm)").unwrap();
    writeln!(out, "  submit         finalize the round and score it").unwrap();
    writeln!(out, "  next           start the next round").unwrap();
    writeln!(out, "  search <text>  look up country names (alias: s)").unwrap();
    writeln!(out, "  state          reprint the current round").unwrap();
    writeln!(out, "  quit           leave the game").unwrap();
}
