//! A single guess within a round.

use serde::Serialize;

use crate::directory::CountryCode;

/// One resolved guess.
///
/// `is_neighbor` is fixed against the round's answer set when the guess is
/// created and never changes. `locked` flips to true on submit for every
/// correct guess; locked guesses cannot be removed. `revealed` marks
/// answers synthesized on submit for neighbors the player missed, so a
/// presentation layer can style them apart from typed guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guess {
    pub code: CountryCode,
    pub display_name: String,
    pub is_neighbor: bool,
    pub locked: bool,
    pub revealed: bool,
}

impl Guess {
    /// Creates an unlocked player guess.
    pub fn typed(code: CountryCode, display_name: String, is_neighbor: bool) -> Self {
        Guess {
            code,
            display_name,
            is_neighbor,
            locked: false,
            revealed: false,
        }
    }

    /// Creates a locked reveal for a missed neighbor.
    pub fn revealed(code: CountryCode, display_name: String) -> Self {
        Guess {
            code,
            display_name,
            is_neighbor: true,
            locked: true,
            revealed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_guess_starts_unlocked() {
        let g = Guess::typed(CountryCode::new("ESP"), "Spain".to_string(), true);
        assert!(g.is_neighbor);
        assert!(!g.locked);
        assert!(!g.revealed);
    }

    #[test]
    fn revealed_guess_is_locked_neighbor() {
        let g = Guess::revealed(CountryCode::new("AND"), "Andorra".to_string());
        assert!(g.is_neighbor);
        assert!(g.locked);
        assert!(g.revealed);
    }
}
