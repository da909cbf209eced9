//! Free-text normalization for country-name matching.
//!
//! All name comparison in the directory goes through [`normalize`], which
//! maps strings the player might plausibly type ("COTE DIVOIRE",
//! "Côte d'Ivoire", " cote  d'ivoire ") onto a single canonical key.
//!
//! The transform: NFD-decompose, drop combining marks, lowercase, drop
//! everything that is neither alphanumeric nor whitespace, collapse runs of
//! whitespace to a single space, trim.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes a free-text country name into its comparison key.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for c in input.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            pending_space = true;
        }
        // Punctuation and symbols are dropped entirely, so "d'Ivoire"
        // and "dIvoire" collapse to the same key.
    }
    out
}
