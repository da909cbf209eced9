//! Artifact schema for the three static data inputs.
//!
//! The offline data pipeline produces three JSON documents: the country
//! table (code -> name and aliases), the adjacency table (code -> neighbor
//! codes), and simplified per-country geometry for map rendering. This
//! module defines their serde representations and the errors raised when
//! an artifact is missing pieces or internally inconsistent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::country::CountryCode;

/// One row of the country table artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The country table artifact: code -> record. Keying by code makes
/// duplicate codes unrepresentable.
pub type CountryTable = BTreeMap<CountryCode, CountryRecord>;

/// The adjacency artifact: code -> land-border neighbor codes.
pub type AdjacencyTable = BTreeMap<CountryCode, Vec<CountryCode>>;

/// Simplified geometry for one country: a label anchor and a bounding box,
/// both in (longitude, latitude) degrees.
///
/// The quiz core stores shapes opaquely and hands them to the presentation
/// layer on request; nothing in scoring or search reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryShape {
    pub centroid: (f64, f64),
    /// `[min lon, min lat, max lon, max lat]`.
    pub bbox: [f64; 4],
}

/// The geometry artifact: code -> shape. Partial coverage is allowed;
/// unknown codes are not.
pub type GeometryTable = BTreeMap<CountryCode, CountryShape>;

/// Errors raised while parsing or validating the data artifacts.
///
/// All of these are fatal: the artifacts come from an offline pipeline and
/// the only fix is to regenerate them.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("country table is empty")]
    EmptyCountryTable,

    #[error("country '{0}' has an empty name")]
    EmptyName(CountryCode),

    #[error("adjacency entry for unknown country '{0}'")]
    UnknownAdjacencyCode(CountryCode),

    #[error("country '{0}' lists unknown neighbor '{1}'")]
    UnknownNeighbor(CountryCode, CountryCode),

    #[error("country '{0}' lists itself as a neighbor")]
    SelfBorder(CountryCode),

    #[error("asymmetric border: '{0}' lists '{1}' but not the reverse")]
    AsymmetricEdge(CountryCode, CountryCode),

    #[error("geometry entry for unknown country '{0}'")]
    UnknownGeometryCode(CountryCode),

    #[error("no country has any neighbors; nothing is playable")]
    NoEligibleCountry,

    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses the three artifacts from their JSON encodings.
///
/// This is pure deserialization; cross-referencing between the tables
/// happens in [`Directory::load`](super::Directory::load).
pub fn parse_artifacts(
    countries_json: &str,
    adjacency_json: &str,
    geometry_json: &str,
) -> Result<(CountryTable, AdjacencyTable, GeometryTable), DataLoadError> {
    let countries: CountryTable = serde_json::from_str(countries_json)?;
    let adjacency: AdjacencyTable = serde_json::from_str(adjacency_json)?;
    let geometry: GeometryTable = serde_json::from_str(geometry_json)?;
    Ok((countries, adjacency, geometry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_artifacts() {
        let countries = r#"{"FRA": {"name": "France"}, "ESP": {"name": "Spain"}}"#;
        let adjacency = r#"{"FRA": ["ESP"], "ESP": ["FRA"]}"#;
        let geometry = r#"{"FRA": {"centroid": [2.5, 46.6], "bbox": [-4.0, 41.6, 9.0, 51.6]}}"#;

        let (c, a, g) = parse_artifacts(countries, adjacency, geometry).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(a[&CountryCode::new("FRA")], vec![CountryCode::new("ESP")]);
        assert_eq!(g[&CountryCode::new("FRA")].centroid, (2.5, 46.6));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_artifacts("not json", "{}", "{}").unwrap_err();
        assert!(matches!(err, DataLoadError::Json(_)));
    }

    #[test]
    fn record_aliases_default_to_empty() {
        let record: CountryRecord = serde_json::from_str(r#"{"name": "Monaco"}"#).unwrap();
        assert!(record.aliases.is_empty());
    }

    #[test]
    fn table_keys_normalize_to_uppercase() {
        let table: CountryTable =
            serde_json::from_str(r#"{"fra": {"name": "France"}}"#).unwrap();
        assert!(table.contains_key(&CountryCode::new("FRA")));
    }
}
