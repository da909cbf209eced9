//! Quiz facade.
//!
//! Owns the directory, the session accumulator, the active round, and the
//! RNG that draws round targets. Presentation layers drive the game
//! exclusively through this type: commands mutate state, queries return
//! projections, and every user-input failure leaves state unchanged.

use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::directory::{
    AdjacencyTable, Country, CountryCode, CountryTable, DataLoadError, Directory, GeometryTable,
};
use crate::round::{Guess, Round, RoundError, RoundSummary};
use crate::session::Session;
use crate::view::{MapHighlights, StateSnapshot};

/// Errors surfaced at the command boundary.
///
/// `NotInitialized`, `NoActiveRound`, and `InvalidState` are integration
/// bugs in a correct caller; the rest are expected user-input conditions
/// the presentation layer reports and retries.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("directory has not been initialized")]
    NotInitialized,

    #[error("no round has been started")]
    NoActiveRound,

    #[error("no country matches '{0}'")]
    CountryNotFound(String),

    #[error("command is not valid in the current round state")]
    InvalidState,

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Data(#[from] DataLoadError),
}

/// Holds the mutable state of the quiz between commands.
pub struct Game {
    directory: Option<Directory>,
    session: Session,
    round: Option<Round>,
    rng: SmallRng,
}

impl Game {
    /// Creates a game with no directory loaded. Every command except
    /// `init` fails with `NotInitialized` until artifacts arrive.
    pub fn new_uninit() -> Self {
        Game {
            directory: None,
            session: Session::new(),
            round: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a game over an already-loaded directory.
    pub fn new(directory: Directory) -> Self {
        Game {
            directory: Some(directory),
            session: Session::new(),
            round: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a game with a fixed RNG seed, for deterministic tests and
    /// replays.
    pub fn seeded(directory: Directory, seed: u64) -> Self {
        Game {
            directory: Some(directory),
            session: Session::new(),
            round: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// One-time initialization from parsed artifacts. Fails if the data
    /// is inconsistent or contains no playable country.
    pub fn init(
        &mut self,
        countries: CountryTable,
        adjacency: AdjacencyTable,
        geometry: GeometryTable,
    ) -> Result<(), QuizError> {
        let directory = Directory::load(countries, adjacency, geometry)?;
        if directory.eligible_count() == 0 {
            return Err(DataLoadError::NoEligibleCountry.into());
        }
        self.directory = Some(directory);
        Ok(())
    }

    /// The loaded directory, if any.
    pub fn directory(&self) -> Option<&Directory> {
        self.directory.as_ref()
    }

    /// The cross-round session totals.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn require_directory(&self) -> Result<&Directory, QuizError> {
        self.directory.as_ref().ok_or(QuizError::NotInitialized)
    }

    fn require_round(&self) -> Result<&Round, QuizError> {
        self.round.as_ref().ok_or(QuizError::NoActiveRound)
    }

    /// Starts a round with a uniformly drawn eligible target, replacing
    /// any existing round.
    pub fn start_round(&mut self) -> Result<(), QuizError> {
        let directory = self.directory.as_ref().ok_or(QuizError::NotInitialized)?;
        let target = directory
            .random_eligible(&mut self.rng)
            .ok_or(QuizError::Data(DataLoadError::NoEligibleCountry))?
            .clone();
        self.begin(target)
    }

    /// Starts a round with an explicit target, for deterministic play.
    pub fn start_round_with(&mut self, code: &CountryCode) -> Result<(), QuizError> {
        let directory = self.require_directory()?;
        let target = directory
            .get(code)
            .ok_or_else(|| QuizError::CountryNotFound(code.to_string()))?
            .clone();
        self.begin(target)
    }

    fn begin(&mut self, target: Country) -> Result<(), QuizError> {
        let directory = self.require_directory()?;
        let answers: BTreeMap<CountryCode, String> = directory
            .neighbors_of(&target.code)
            .iter()
            .filter_map(|code| {
                directory
                    .get(code)
                    .map(|country| (code.clone(), country.name.clone()))
            })
            .collect();
        self.round = Some(Round::start(target, answers));
        Ok(())
    }

    /// Advances the session to the next round number and starts a fresh
    /// round.
    pub fn next_round(&mut self) -> Result<(), QuizError> {
        self.require_directory()?;
        self.session.advance_round();
        self.start_round()
    }

    /// Resolves `text` to a country and records it as a guess, returning
    /// the stored guess for immediate feedback. No scoring happens here.
    pub fn add_guess(&mut self, text: &str) -> Result<Guess, QuizError> {
        let directory = self.directory.as_ref().ok_or(QuizError::NotInitialized)?;
        let round = self.round.as_mut().ok_or(QuizError::NoActiveRound)?;
        if round.is_finalized() {
            return Err(QuizError::InvalidState);
        }
        let country = directory
            .find_exact(text)
            .ok_or_else(|| QuizError::CountryNotFound(text.to_string()))?;
        Ok(round.add_guess(country)?)
    }

    /// Removes the guess for `code`; `Ok(false)` if there is none.
    pub fn remove_guess(&mut self, code: &CountryCode) -> Result<bool, QuizError> {
        let round = self.round.as_mut().ok_or(QuizError::NoActiveRound)?;
        Ok(round.remove_guess(code)?)
    }

    /// Finalizes the round, applies the score delta to the session, and
    /// returns the scoring summary.
    pub fn submit(&mut self) -> Result<RoundSummary, QuizError> {
        let round = self.round.as_mut().ok_or(QuizError::NoActiveRound)?;
        if round.is_finalized() {
            return Err(QuizError::InvalidState);
        }
        let summary = round.submit()?;
        self.session.apply(&summary);
        Ok(summary)
    }

    /// Pure read projection of the current round and session.
    pub fn snapshot(&self) -> Result<StateSnapshot, QuizError> {
        self.require_directory()?;
        Ok(StateSnapshot::capture(self.require_round()?, &self.session))
    }

    /// Map paint buckets for the current round.
    pub fn highlights(&self) -> Result<MapHighlights, QuizError> {
        self.require_directory()?;
        Ok(MapHighlights::capture(self.require_round()?))
    }

    /// Ranked substring search, excluding already-guessed codes and the
    /// round target on top of the caller's own exclusions.
    pub fn search(
        &self,
        text: &str,
        exclude: &BTreeSet<CountryCode>,
    ) -> Result<Vec<&Country>, QuizError> {
        let directory = self.require_directory()?;
        let mut excluded = exclude.clone();
        if let Some(round) = &self.round {
            excluded.extend(round.guessed_codes());
            excluded.insert(round.target().code.clone());
        }
        Ok(directory.search(text, &excluded))
    }
}
