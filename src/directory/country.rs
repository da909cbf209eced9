//! Country records and their stable identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable country identifier in ISO 3166-1 alpha-3 style (e.g. `FRA`).
///
/// Codes are stored uppercase. Construction normalizes case and surrounding
/// whitespace so lookups never depend on how an artifact spelled the code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a code, uppercasing and trimming the input.
    pub fn new(code: impl AsRef<str>) -> Self {
        CountryCode(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CountryCode {
    fn from(s: String) -> Self {
        CountryCode::new(&s)
    }
}

impl From<&str> for CountryCode {
    fn from(s: &str) -> Self {
        CountryCode::new(s)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> String {
        code.0
    }
}

/// A country as the directory stores it: stable code, canonical display
/// name, and any alternate names accepted as equivalent input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}
