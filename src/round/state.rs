//! Round lifecycle and scoring.
//!
//! A round moves through exactly two states: guessing (initial) and
//! finalized (after submit). Submission is irreversible within the round;
//! starting a new round replaces the whole object.
//!
//! Scoring follows the auto-reveal rule: each correct guess counts one
//! gain and locks, each incorrect guess counts one loss, and every
//! neighbor the player never named is revealed as a locked answer and
//! counts one loss as well. A missed neighbor costs the same as a wrong
//! guess.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::directory::{Country, CountryCode};

use super::guess::Guess;

/// Errors raised by round commands. All of them leave round state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("'{0}' has already been guessed this round")]
    DuplicateGuess(CountryCode),

    #[error("'{0}' is the round target, not a neighbor guess")]
    TargetGuess(CountryCode),

    #[error("guess '{0}' is locked and cannot be removed")]
    LockedGuess(CountryCode),

    #[error("cannot submit a round with no guesses")]
    EmptyGuessList,

    #[error("round is already finalized")]
    RoundFinalized,
}

/// Scoring outcome of a submitted round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub gains: u32,
    pub losses: u32,
    pub total_correct: u32,
    pub total_neighbors: u32,
}

/// One round of play: a target country, its fixed answer set, and the
/// player's guesses in insertion order.
#[derive(Debug, Clone)]
pub struct Round {
    target: Country,
    /// Neighbor code -> display name, captured at round start. Immutable
    /// for the life of the round.
    answers: BTreeMap<CountryCode, String>,
    guesses: Vec<Guess>,
    finalized: bool,
}

impl Round {
    /// Starts a fresh round in the guessing state.
    pub fn start(target: Country, answers: BTreeMap<CountryCode, String>) -> Self {
        Round {
            target,
            answers,
            guesses: Vec::new(),
            finalized: false,
        }
    }

    /// The country whose neighbors are being guessed.
    pub fn target(&self) -> &Country {
        &self.target
    }

    /// Number of neighbors in the answer set.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// True once `submit` has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// All guesses in insertion order, including post-submit reveals.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Number of neighbors the player has named (reveals excluded).
    pub fn found_count(&self) -> usize {
        self.guesses
            .iter()
            .filter(|g| g.is_neighbor && !g.revealed)
            .count()
    }

    /// True while the round can still be submitted.
    pub fn can_submit(&self) -> bool {
        !self.guesses.is_empty() && !self.finalized
    }

    /// Codes of all current guesses, for search exclusion.
    pub fn guessed_codes(&self) -> BTreeSet<CountryCode> {
        self.guesses.iter().map(|g| g.code.clone()).collect()
    }

    /// Records a guess for `country`, whose correctness is fixed here
    /// against the answer set. Returns a copy of the stored guess so the
    /// caller can render immediate feedback. No scoring happens yet.
    pub fn add_guess(&mut self, country: &Country) -> Result<Guess, RoundError> {
        if self.finalized {
            return Err(RoundError::RoundFinalized);
        }
        if country.code == self.target.code {
            return Err(RoundError::TargetGuess(country.code.clone()));
        }
        if self.guesses.iter().any(|g| g.code == country.code) {
            return Err(RoundError::DuplicateGuess(country.code.clone()));
        }
        let guess = Guess::typed(
            country.code.clone(),
            country.name.clone(),
            self.answers.contains_key(&country.code),
        );
        self.guesses.push(guess.clone());
        Ok(guess)
    }

    /// Removes the guess for `code`. Returns `Ok(false)` if no such guess
    /// exists and `LockedGuess` if it is locked. Unlocked guesses may be
    /// removed even after finalization.
    pub fn remove_guess(&mut self, code: &CountryCode) -> Result<bool, RoundError> {
        match self.guesses.iter().position(|g| g.code == *code) {
            None => Ok(false),
            Some(i) if self.guesses[i].locked => Err(RoundError::LockedGuess(code.clone())),
            Some(i) => {
                self.guesses.remove(i);
                Ok(true)
            }
        }
    }

    /// Finalizes the round: tallies gains and losses, locks correct
    /// guesses, and reveals every unguessed neighbor as a locked loss.
    ///
    /// After this returns, every answer code has a locked guess and
    /// `total_correct == answer_count()`.
    pub fn submit(&mut self) -> Result<RoundSummary, RoundError> {
        if self.finalized {
            return Err(RoundError::RoundFinalized);
        }
        if self.guesses.is_empty() {
            return Err(RoundError::EmptyGuessList);
        }

        let mut gains = 0u32;
        let mut losses = 0u32;
        for guess in &mut self.guesses {
            // Guesses are unique by code, so each counts exactly once.
            if guess.is_neighbor {
                gains += 1;
                guess.locked = true;
            } else {
                losses += 1;
            }
        }

        let guessed: BTreeSet<&CountryCode> = self.guesses.iter().map(|g| &g.code).collect();
        let missed: Vec<(CountryCode, String)> = self
            .answers
            .iter()
            .filter(|(code, _)| !guessed.contains(code))
            .map(|(code, name)| (code.clone(), name.clone()))
            .collect();
        for (code, name) in missed {
            self.guesses.push(Guess::revealed(code, name));
            losses += 1;
        }

        self.finalized = true;
        let total = self.answers.len() as u32;
        Ok(RoundSummary {
            gains,
            losses,
            total_correct: total,
            total_neighbors: total,
        })
    }
}
