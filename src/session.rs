//! Cross-round score accumulation.

use serde::Serialize;

use crate::round::RoundSummary;

/// Process-wide accumulator that outlives every individual round.
///
/// The round number starts at 1 and only ever increases; the score is
/// signed and may go negative. Only round submission mutates the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    round_number: u32,
    score: i64,
}

impl Session {
    /// Starts a session at round 1 with a zero score.
    pub fn new() -> Self {
        Session {
            round_number: 1,
            score: 0,
        }
    }

    /// The current round number.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The cumulative score across all submitted rounds.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Moves the session to the next round.
    pub fn advance_round(&mut self) {
        self.round_number += 1;
    }

    /// Applies a submitted round's gains and losses to the score.
    pub fn apply(&mut self, summary: &RoundSummary) {
        self.score += i64::from(summary.gains) - i64::from(summary.losses);
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
