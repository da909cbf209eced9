//! Presentation adapter contract.
//!
//! Pure read projections of quiz state for whatever layer draws the game:
//! a DOM renderer, a TUI, or the bundled terminal binary. Everything here
//! is derived from round and session state at capture time and carries no
//! behavior, so repeated captures without intervening commands are
//! identical. All types serialize, so a web front end can take them as
//! JSON directly.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::directory::{Country, CountryCode};
use crate::round::{Guess, Round};
use crate::session::Session;

/// Everything a presentation layer needs to draw the current round:
/// target, progress, guess chips, and session totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub target: Country,
    pub answer_count: usize,
    /// Guesses in insertion order, including post-submit reveals.
    pub guesses: Vec<Guess>,
    /// Neighbors the player has named themselves (reveals excluded).
    pub found_count: usize,
    pub score: i64,
    pub round_number: u32,
    pub finalized: bool,
    pub can_submit: bool,
}

impl StateSnapshot {
    /// Captures the current round and session state.
    pub fn capture(round: &Round, session: &Session) -> StateSnapshot {
        StateSnapshot {
            target: round.target().clone(),
            answer_count: round.answer_count(),
            guesses: round.guesses().to_vec(),
            found_count: round.found_count(),
            score: session.score(),
            round_number: session.round_number(),
            finalized: round.is_finalized(),
            can_submit: round.can_submit(),
        }
    }
}

/// Which paint bucket each country involved in the round falls into.
///
/// The three guess sets are disjoint by construction: a code is correct
/// (typed and right), incorrect (typed and wrong), or revealed (missed and
/// filled in on submit). Countries in none of the sets and not the target
/// render in the base map style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapHighlights {
    pub target: CountryCode,
    pub correct: BTreeSet<CountryCode>,
    pub incorrect: BTreeSet<CountryCode>,
    pub revealed: BTreeSet<CountryCode>,
}

impl MapHighlights {
    /// Derives the highlight partition from the round's guess list.
    pub fn capture(round: &Round) -> MapHighlights {
        let mut correct = BTreeSet::new();
        let mut incorrect = BTreeSet::new();
        let mut revealed = BTreeSet::new();
        for guess in round.guesses() {
            let bucket = if guess.revealed {
                &mut revealed
            } else if guess.is_neighbor {
                &mut correct
            } else {
                &mut incorrect
            };
            bucket.insert(guess.code.clone());
        }
        MapHighlights {
            target: round.target().code.clone(),
            correct,
            incorrect,
            revealed,
        }
    }
}
