//! The country directory: authoritative read-only store of countries,
//! their land-border adjacency, and their map geometry.
//!
//! Built once at startup from the three pipeline artifacts and immutable
//! thereafter. Answers code lookups, exact-name resolution, ranked
//! substring search, and uniform random selection of an eligible round
//! target (a country with at least one neighbor).

pub mod artifact;
pub mod country;
pub mod normalize;

pub use artifact::{
    parse_artifacts, AdjacencyTable, CountryRecord, CountryShape, CountryTable, DataLoadError,
    GeometryTable,
};
pub use country::{Country, CountryCode};
pub use normalize::normalize;

use std::collections::{BTreeSet, HashMap};

use rand::Rng;

/// Precomputed normalized keys for one country, parallel to the country
/// list. Computed once at load so search never re-normalizes stored names.
#[derive(Debug, Clone)]
struct SearchKey {
    name: String,
    aliases: Vec<String>,
}

/// In-memory store of the three static tables.
#[derive(Debug, Clone)]
pub struct Directory {
    /// All countries in ascending code order.
    countries: Vec<Country>,
    /// code -> index into `countries`.
    index: HashMap<CountryCode, usize>,
    /// code -> neighbor codes. Validated symmetric at load.
    neighbors: HashMap<CountryCode, BTreeSet<CountryCode>>,
    geometry: GeometryTable,
    keys: Vec<SearchKey>,
    /// Indices of countries with a non-empty neighbor set.
    eligible: Vec<usize>,
    /// Returned by `neighbors_of` for unknown or neighborless codes.
    empty: BTreeSet<CountryCode>,
}

impl Directory {
    /// Builds a directory from parsed artifacts, validating that the
    /// tables are mutually consistent.
    ///
    /// Rejects empty country tables, empty names, adjacency entries
    /// referencing unknown codes, self-borders, asymmetric edges, and
    /// geometry for unknown codes.
    pub fn load(
        countries: CountryTable,
        adjacency: AdjacencyTable,
        geometry: GeometryTable,
    ) -> Result<Directory, DataLoadError> {
        if countries.is_empty() {
            return Err(DataLoadError::EmptyCountryTable);
        }

        let mut list = Vec::with_capacity(countries.len());
        let mut index = HashMap::with_capacity(countries.len());
        for (code, record) in countries {
            if record.name.trim().is_empty() {
                return Err(DataLoadError::EmptyName(code));
            }
            index.insert(code.clone(), list.len());
            list.push(Country {
                code,
                name: record.name,
                aliases: record.aliases,
            });
        }

        let mut neighbors: HashMap<CountryCode, BTreeSet<CountryCode>> =
            HashMap::with_capacity(list.len());
        for (code, entries) in adjacency {
            if !index.contains_key(&code) {
                return Err(DataLoadError::UnknownAdjacencyCode(code));
            }
            let mut set = BTreeSet::new();
            for neighbor in entries {
                if neighbor == code {
                    return Err(DataLoadError::SelfBorder(code));
                }
                if !index.contains_key(&neighbor) {
                    return Err(DataLoadError::UnknownNeighbor(code, neighbor));
                }
                set.insert(neighbor);
            }
            neighbors.insert(code, set);
        }

        // Countries absent from the adjacency artifact have no neighbors,
        // so an edge pointing at one of them is asymmetric too.
        for (code, set) in &neighbors {
            for neighbor in set {
                let reverse = neighbors
                    .get(neighbor)
                    .is_some_and(|s| s.contains(code));
                if !reverse {
                    return Err(DataLoadError::AsymmetricEdge(
                        code.clone(),
                        neighbor.clone(),
                    ));
                }
            }
        }

        for code in geometry.keys() {
            if !index.contains_key(code) {
                return Err(DataLoadError::UnknownGeometryCode(code.clone()));
            }
        }

        let keys = list
            .iter()
            .map(|c| SearchKey {
                name: normalize(&c.name),
                aliases: c.aliases.iter().map(|a| normalize(a)).collect(),
            })
            .collect();

        let eligible = list
            .iter()
            .enumerate()
            .filter(|(_, c)| neighbors.get(&c.code).is_some_and(|s| !s.is_empty()))
            .map(|(i, _)| i)
            .collect();

        Ok(Directory {
            countries: list,
            index,
            neighbors,
            geometry,
            keys,
            eligible,
            empty: BTreeSet::new(),
        })
    }

    /// Parses the three JSON artifacts and builds a directory from them.
    pub fn from_json(
        countries_json: &str,
        adjacency_json: &str,
        geometry_json: &str,
    ) -> Result<Directory, DataLoadError> {
        let (countries, adjacency, geometry) =
            parse_artifacts(countries_json, adjacency_json, geometry_json)?;
        Directory::load(countries, adjacency, geometry)
    }

    /// Looks up a country by code.
    pub fn get(&self, code: &CountryCode) -> Option<&Country> {
        self.index.get(code).map(|&i| &self.countries[i])
    }

    /// Returns the neighbor set for a code. Unknown codes and countries
    /// without land borders both yield the empty set.
    pub fn neighbors_of(&self, code: &CountryCode) -> &BTreeSet<CountryCode> {
        self.neighbors.get(code).unwrap_or(&self.empty)
    }

    /// Resolves free text to a country by normalized equality against the
    /// canonical name or any alias. First match in code order wins if the
    /// data contains a normalization collision.
    pub fn find_exact(&self, input: &str) -> Option<&Country> {
        let key = normalize(input);
        if key.is_empty() {
            return None;
        }
        self.keys
            .iter()
            .position(|k| k.name == key || k.aliases.iter().any(|a| *a == key))
            .map(|i| &self.countries[i])
    }

    /// Returns every country (not in `exclude`) whose normalized name or
    /// alias contains the normalized query as a substring.
    ///
    /// Exact normalized-name matches sort first, then remaining matches
    /// ascending by canonical-name length, ties broken by code. Callers
    /// truncate as needed. Empty queries match nothing.
    pub fn search(&self, query: &str, exclude: &BTreeSet<CountryCode>) -> Vec<&Country> {
        let key = normalize(query);
        if key.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(bool, usize, usize)> = Vec::new();
        for (i, k) in self.keys.iter().enumerate() {
            let country = &self.countries[i];
            if exclude.contains(&country.code) {
                continue;
            }
            if k.name.contains(&key) || k.aliases.iter().any(|a| a.contains(&key)) {
                hits.push((k.name == key, country.name.chars().count(), i));
            }
        }

        hits.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));
        hits.into_iter().map(|(_, _, i)| &self.countries[i]).collect()
    }

    /// Uniformly selects a country with at least one neighbor, or `None`
    /// if no country is eligible.
    pub fn random_eligible<R: Rng>(&self, rng: &mut R) -> Option<&Country> {
        if self.eligible.is_empty() {
            return None;
        }
        let i = self.eligible[rng.gen_range(0..self.eligible.len())];
        Some(&self.countries[i])
    }

    /// Returns the simplified shape for a code, if the geometry artifact
    /// covers it. The core never interprets shapes; this is a pass-through
    /// for map rendering.
    pub fn geometry_of(&self, code: &CountryCode) -> Option<&CountryShape> {
        self.geometry.get(code)
    }

    /// Number of countries eligible to be a round target.
    pub fn eligible_count(&self) -> usize {
        self.eligible.len()
    }

    /// Total number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// True if the directory holds no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Iterates all countries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }
}
