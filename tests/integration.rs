//! End-to-end tests driving the public command boundary against the
//! bundled dataset, covering the reference scenarios for round scoring,
//! name resolution, and state preservation on failed commands.

use std::collections::BTreeSet;

use borderline::directory::{CountryCode, Directory};
use borderline::game::{Game, QuizError};
use borderline::round::RoundError;

static COUNTRIES_JSON: &str = include_str!("../data/countries.json");
static BORDERS_JSON: &str = include_str!("../data/borders.json");
static WORLD_JSON: &str = include_str!("../data/world.json");

fn load_directory() -> Directory {
    Directory::from_json(COUNTRIES_JSON, BORDERS_JSON, WORLD_JSON)
        .expect("bundled dataset should load")
}

fn game() -> Game {
    Game::seeded(load_directory(), 2024)
}

fn code(s: &str) -> CountryCode {
    CountryCode::new(s)
}

#[test]
fn bundled_dataset_is_consistent() {
    let dir = load_directory();
    assert_eq!(dir.len(), 56);
    assert!(dir.eligible_count() > 0);

    // Symmetry is checked at load; spot-check a few pairs anyway.
    for (a, b) in [("FRA", "ESP"), ("DEU", "POL"), ("CIV", "GHA")] {
        assert!(dir.neighbors_of(&code(a)).contains(&code(b)));
        assert!(dir.neighbors_of(&code(b)).contains(&code(a)));
    }

    // Island nations are ineligible but present and searchable.
    for island in ["ISL", "MLT", "CYP"] {
        assert!(dir.get(&code(island)).is_some());
        assert!(dir.neighbors_of(&code(island)).is_empty());
    }
}

#[test]
fn france_has_the_expected_answer_set() {
    let dir = load_directory();
    let expected: BTreeSet<CountryCode> = ["ESP", "AND", "MCO", "ITA", "CHE", "DEU", "LUX", "BEL"]
        .into_iter()
        .map(code)
        .collect();
    assert_eq!(*dir.neighbors_of(&code("FRA")), expected);
}

// Scenario A: forced France round with correct and duplicate guesses.
#[test]
fn scenario_a_france_round_scoring() {
    let mut game = game();
    game.start_round_with(&code("FRA")).unwrap();

    let spain = game.add_guess("Spain").unwrap();
    assert!(spain.is_neighbor);

    let germany = game.add_guess("Germany").unwrap();
    assert!(germany.is_neighbor);

    // Guessing Germany again is a duplicate, not a second gain.
    let err = game.add_guess("Germany").unwrap_err();
    assert!(matches!(
        err,
        QuizError::Round(RoundError::DuplicateGuess(_))
    ));

    let summary = game.submit().unwrap();
    assert_eq!(summary.gains, 2);
    assert_eq!(summary.losses, 6); // the six unguessed neighbors
    assert_eq!(summary.total_correct, 8);
    assert_eq!(summary.total_neighbors, 8);
    assert_eq!(game.session().score(), -4);

    // Every neighbor ends up as a locked guess.
    let snap = game.snapshot().unwrap();
    for neighbor in ["ESP", "AND", "MCO", "ITA", "CHE", "DEU", "LUX", "BEL"] {
        let guess = snap
            .guesses
            .iter()
            .find(|g| g.code == code(neighbor))
            .unwrap_or_else(|| panic!("no guess for {}", neighbor));
        assert!(guess.locked);
        assert!(guess.is_neighbor);
    }
}

// Scenario B: unknown country leaves the guess list untouched.
#[test]
fn scenario_b_unknown_country_is_rejected() {
    let mut game = game();
    game.start_round_with(&code("FRA")).unwrap();
    game.add_guess("Belgium").unwrap();

    let err = game.add_guess("Atlantis").unwrap_err();
    assert!(matches!(err, QuizError::CountryNotFound(_)));
    assert_eq!(game.snapshot().unwrap().guesses.len(), 1);
}

// Scenario C: submit with zero guesses fails and the round stays open.
#[test]
fn scenario_c_empty_submit_keeps_guessing_state() {
    let mut game = game();
    game.start_round_with(&code("DEU")).unwrap();

    let err = game.submit().unwrap_err();
    assert!(matches!(err, QuizError::Round(RoundError::EmptyGuessList)));

    let snap = game.snapshot().unwrap();
    assert!(!snap.finalized);
    assert!(!snap.can_submit);

    // The round is still playable.
    game.add_guess("Poland").unwrap();
    assert!(game.snapshot().unwrap().can_submit);
}

// Scenario D: island nations are never drawn as targets.
#[test]
fn scenario_d_random_targets_always_have_neighbors() {
    let mut game = Game::seeded(load_directory(), 7);
    for _ in 0..300 {
        game.start_round().unwrap();
        let snap = game.snapshot().unwrap();
        assert_ne!(snap.target.code.as_str(), "ISL");
        assert_ne!(snap.target.code.as_str(), "MLT");
        assert_ne!(snap.target.code.as_str(), "CYP");
        assert!(snap.answer_count > 0);
    }
}

// Scenario E: locked guesses survive removal attempts after submit.
#[test]
fn scenario_e_locked_guess_cannot_be_removed() {
    let mut game = game();
    game.start_round_with(&code("PRT")).unwrap();
    game.add_guess("Spain").unwrap();
    game.submit().unwrap();

    let err = game.remove_guess(&code("ESP")).unwrap_err();
    assert!(matches!(err, QuizError::Round(RoundError::LockedGuess(_))));
    assert!(game
        .snapshot()
        .unwrap()
        .guesses
        .iter()
        .any(|g| g.code == code("ESP")));
}

#[test]
fn wrong_guess_can_be_withdrawn_after_submit() {
    let mut game = game();
    game.start_round_with(&code("PRT")).unwrap();
    game.add_guess("Spain").unwrap();
    game.add_guess("France").unwrap(); // not a neighbor of Portugal
    game.submit().unwrap();

    assert!(game.remove_guess(&code("FRA")).unwrap());
    assert!(!game.remove_guess(&code("FRA")).unwrap());
}

#[test]
fn alias_and_diacritic_resolution_on_real_data() {
    let dir = load_directory();
    for (input, expected) in [
        ("cote d'ivoire", "CIV"),
        ("Côte d'Ivoire", "CIV"),
        ("COTE DIVOIRE", "CIV"),
        ("Ivory Coast", "CIV"),
        ("czech republic", "CZE"),
        ("Czechia", "CZE"),
        ("Holland", "NLD"),
        ("holland", "NLD"),
        ("UK", "GBR"),
        ("great britain", "GBR"),
        ("Macedonia", "MKD"),
        ("Turkiye", "TUR"),
        ("Osterreich", "AUT"),
        ("bosnia", "BIH"),
    ] {
        let found = dir
            .find_exact(input)
            .unwrap_or_else(|| panic!("'{}' did not resolve", input));
        assert_eq!(found.code.as_str(), expected, "input {:?}", input);
    }
}

#[test]
fn search_ranks_and_excludes_on_real_data() {
    let dir = load_directory();

    // Exact normalized match outranks longer substring matches.
    let hits = dir.search("guinea", &BTreeSet::new());
    assert_eq!(hits[0].code.as_str(), "GIN");

    // The sequence is recomputed per call and stable.
    let all = dir.search("a", &BTreeSet::new());
    let again = dir.search("a", &BTreeSet::new());
    let codes: Vec<_> = all.iter().map(|c| c.code.clone()).collect();
    let codes_again: Vec<_> = again.iter().map(|c| c.code.clone()).collect();
    assert_eq!(codes, codes_again);

    let exclude: BTreeSet<CountryCode> = [code("ESP"), code("EST")].into_iter().collect();
    let hits = dir.search("s", &exclude);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|c| !exclude.contains(&c.code)));
}

#[test]
fn guessing_through_an_alias_records_the_canonical_name() {
    let mut game = game();
    game.start_round_with(&code("BEL")).unwrap();
    let guess = game.add_guess("Holland").unwrap();
    assert_eq!(guess.code.as_str(), "NLD");
    assert_eq!(guess.display_name, "Netherlands");
    assert!(guess.is_neighbor);
}

#[test]
fn full_session_over_several_rounds() {
    let mut game = game();

    // Round 1: Portugal, perfect round.
    game.start_round_with(&code("PRT")).unwrap();
    game.add_guess("Spain").unwrap();
    let s1 = game.submit().unwrap();
    assert_eq!((s1.gains, s1.losses), (1, 0));
    assert_eq!(game.session().score(), 1);

    // Round 2: Denmark, one wrong guess alongside the right one.
    game.next_round().unwrap();
    game.start_round_with(&code("DNK")).unwrap();
    game.add_guess("Germany").unwrap();
    game.add_guess("Sweden").unwrap(); // bridge, not a land border
    let s2 = game.submit().unwrap();
    assert_eq!((s2.gains, s2.losses), (1, 1));
    assert_eq!(game.session().score(), 1);

    // Rounds 3 and 4: skipped without a submit; score is untouched.
    game.next_round().unwrap();
    game.next_round().unwrap();
    assert_eq!(game.session().round_number(), 4);
    assert_eq!(game.session().score(), 1);
}

#[test]
fn highlights_track_round_state_on_real_data() {
    let mut game = game();
    game.start_round_with(&code("CHE")).unwrap();
    game.add_guess("France").unwrap();
    game.add_guess("Spain").unwrap(); // wrong

    let before = game.highlights().unwrap();
    assert_eq!(before.target, code("CHE"));
    assert!(before.correct.contains(&code("FRA")));
    assert!(before.incorrect.contains(&code("ESP")));
    assert!(before.revealed.is_empty());

    game.submit().unwrap();
    let after = game.highlights().unwrap();
    // Switzerland borders FRA, DEU, AUT, LIE, ITA.
    assert!(after.correct.contains(&code("FRA")));
    for missed in ["DEU", "AUT", "LIE", "ITA"] {
        assert!(after.revealed.contains(&code(missed)), "missing {}", missed);
    }
    assert!(after.incorrect.contains(&code("ESP")));
}

#[test]
fn geometry_is_available_for_every_country() {
    let dir = load_directory();
    for country in dir.iter() {
        let shape = dir
            .geometry_of(&country.code)
            .unwrap_or_else(|| panic!("no geometry for {}", country.code));
        let [min_lon, min_lat, max_lon, max_lat] = shape.bbox;
        assert!(min_lon < max_lon && min_lat < max_lat, "{}", country.code);
    }
}
