//! Round state machine: one round's target, answer set, guesses, and the
//! submit/scoring transition.

pub mod guess;
pub mod state;

pub use guess::Guess;
pub use state::{Round, RoundError, RoundSummary};
