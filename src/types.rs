use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cell value as scraped: either still free text or already numeric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// One scraped row of the museums table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub visitors: RawValue,
    pub city: String,
    pub country: Option<String>,
}

impl RawRecord {
    pub fn new(
        name: impl Into<String>,
        visitors: impl Into<RawValue>,
        city: impl Into<String>,
        country: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            visitors: visitors.into(),
            city: city.into(),
            country: country.map(str::to_string),
        }
    }
}

/// A museum row with resolved visitor count and city population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub name: String,
    /// Canonical city name (first comma segment)
    pub city: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub visitors: f64,
    pub population: i64,
    /// visitors / population
    pub ratio: f64,
}

/// The regression's training input, rebuilt on every pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedDataset {
    pub records: Vec<EnrichedRecord>,
    pub built_at: DateTime<Utc>,
}

impl CleanedDataset {
    pub fn new(records: Vec<EnrichedRecord>) -> Self {
        Self {
            records,
            built_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedRecord> {
        self.records.iter()
    }

    /// (population, visitors) pairs for fitting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.population as f64, r.visitors))
            .collect()
    }
}

/// Result of fitting the regression and predicting for a list of populations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
    pub predictions: Vec<f64>,
}
