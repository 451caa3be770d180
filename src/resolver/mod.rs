//! City population lookup against the static reference table.

pub mod fuzzy;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::DEFAULT_FUZZY_THRESHOLD;
use crate::error::Result;
use fuzzy::{best_match, SimilarityScorer, WeightedRatio};

/// One row of the reference table
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCity {
    pub city_ascii: String,
    pub iso2: Option<String>,
    pub population: Option<i64>,
}

impl ReferenceCity {
    pub fn new(city_ascii: &str, iso2: Option<&str>, population: Option<i64>) -> Self {
        Self {
            city_ascii: city_ascii.to_string(),
            iso2: iso2.map(str::to_string),
            population,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvCity {
    city_ascii: String,
    iso2: Option<String>,
    population: Option<f64>,
}

/// Immutable city table, loaded once and shared read-only across runs
#[derive(Debug, Default)]
pub struct ReferenceTable {
    cities: Vec<ReferenceCity>,
    // lower-cased name -> row indices, in file order
    by_lower_name: HashMap<String, Vec<usize>>,
    // distinct names in order of first appearance
    distinct_names: Vec<String>,
    first_row_by_name: HashMap<String, usize>,
}

impl ReferenceTable {
    pub fn from_cities(cities: Vec<ReferenceCity>) -> Self {
        let mut by_lower_name: HashMap<String, Vec<usize>> = HashMap::new();
        let mut distinct_names = Vec::new();
        let mut first_row_by_name = HashMap::new();

        for (idx, city) in cities.iter().enumerate() {
            by_lower_name
                .entry(city.city_ascii.to_lowercase())
                .or_default()
                .push(idx);
            if !first_row_by_name.contains_key(&city.city_ascii) {
                first_row_by_name.insert(city.city_ascii.clone(), idx);
                distinct_names.push(city.city_ascii.clone());
            }
        }

        Self {
            cities,
            by_lower_name,
            distinct_names,
            first_row_by_name,
        }
    }

    /// Load a CSV with at least `city_ascii`, `iso2` and `population` columns
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path)?;
        let table = Self::from_csv_reader(reader)?;
        info!(
            path = %path.display(),
            cities = table.len(),
            "Loaded reference city table"
        );
        Ok(table)
    }

    pub fn from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut cities = Vec::new();
        for row in reader.deserialize::<CsvCity>() {
            let row = row?;
            cities.push(ReferenceCity {
                city_ascii: row.city_ascii,
                iso2: row.iso2.filter(|code| !code.trim().is_empty()),
                population: row
                    .population
                    .filter(|p| p.is_finite())
                    .map(|p| p as i64),
            });
        }
        Ok(Self::from_cities(cities))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Rows whose name equals `city` ignoring case
    fn exact_matches<'a>(&'a self, city: &str) -> impl Iterator<Item = &'a ReferenceCity> + 'a {
        self.by_lower_name
            .get(&city.to_lowercase())
            .into_iter()
            .flatten()
            .map(|&idx| &self.cities[idx])
    }

    fn first_row_named(&self, name: &str) -> Option<&ReferenceCity> {
        self.first_row_by_name.get(name).map(|&idx| &self.cities[idx])
    }

    fn distinct_names(&self) -> impl Iterator<Item = &str> {
        self.distinct_names.iter().map(String::as_str)
    }
}

/// Exact-then-fuzzy population lookup
pub struct PopulationResolver {
    table: Arc<ReferenceTable>,
    scorer: Arc<dyn SimilarityScorer>,
    threshold: u8,
}

impl PopulationResolver {
    pub fn new(table: Arc<ReferenceTable>) -> Self {
        Self::with_scorer(table, Arc::new(WeightedRatio), DEFAULT_FUZZY_THRESHOLD)
    }

    pub fn with_scorer(
        table: Arc<ReferenceTable>,
        scorer: Arc<dyn SimilarityScorer>,
        threshold: u8,
    ) -> Self {
        Self {
            table,
            scorer,
            threshold,
        }
    }

    /// Population of `city`, preferring an exact name (and country) match.
    ///
    /// Among exact matches the most populous row wins. Without one, the
    /// closest distinct name is used if it scores above the threshold.
    pub fn population(&self, city: &str, country_code: Option<&str>) -> Option<i64> {
        let country_code = country_code.filter(|code| !code.is_empty());

        let mut candidates = self
            .table
            .exact_matches(city)
            .filter(|row| match country_code {
                Some(code) => row.iso2.as_deref() == Some(code),
                None => true,
            })
            .peekable();

        if candidates.peek().is_some() {
            let mut best: Option<i64> = None;
            for row in candidates {
                if let Some(population) = row.population {
                    if best.map_or(true, |top| population > top) {
                        best = Some(population);
                    }
                }
            }
            return best;
        }

        let (name, score) = best_match(self.scorer.as_ref(), city, self.table.distinct_names())?;
        if score > self.threshold {
            debug!(city, matched = name, score, "Fuzzy city match");
            return self.table.first_row_named(name).and_then(|row| row.population);
        }

        debug!(city, closest = name, score, "No confident city match");
        None
    }
}
