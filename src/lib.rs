//! Borderline quiz engine library.
//!
//! Exposes the country directory, round state machine, session scoring,
//! and the presentation adapter contract for use by integration tests and
//! the terminal binary.

pub mod cli;
pub mod directory;
pub mod game;
pub mod round;
pub mod session;
pub mod view;
