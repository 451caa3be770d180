use std::sync::Arc;

use tracing::{debug, info, warn};

use super::fetch::PageFetcher;
use super::html::{parse_first_table, HtmlTable};
use super::outliers::filter_iqr;
use crate::constants::{
    CITY_COLUMN, COUNTRY_COLUMN, DEFAULT_SOURCE_URL, NAME_COLUMN, VISITORS_COLUMN,
    VISITORS_COLUMN_PREFIX,
};
use crate::error::{PipelineError, Result};
use crate::metrics::{DropReason, PipelineMetrics};
use crate::normalize::{clean_city_name, country_to_iso2, normalize_visitor_count};
use crate::resolver::PopulationResolver;
use crate::types::{CleanedDataset, EnrichedRecord, RawRecord, RawValue};

/// Where to fetch the table from and which visitor column to read
#[derive(Debug, Clone)]
pub struct BuilderSettings {
    pub source_url: String,
    pub visitors_column: String,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            visitors_column: VISITORS_COLUMN.to_string(),
        }
    }
}

/// Fetch, normalize, resolve and filter the museums table.
///
/// Nothing is memoized: every `build` re-fetches the page and re-resolves
/// every row.
pub struct TableBuilder {
    fetcher: Arc<dyn PageFetcher>,
    resolver: PopulationResolver,
    settings: BuilderSettings,
}

impl TableBuilder {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        resolver: PopulationResolver,
        settings: BuilderSettings,
    ) -> Self {
        Self {
            fetcher,
            resolver,
            settings,
        }
    }

    pub fn build(&self) -> Result<CleanedDataset> {
        let html = self.fetcher.fetch(&self.settings.source_url)?;
        let table = parse_first_table(&html)?;
        let records = self.extract_records(&table)?;
        info!(rows = records.len(), "Parsed museums table");
        self.build_from_records(records)
    }

    /// Map table rows to raw records by column name
    pub fn extract_records(&self, table: &HtmlTable) -> Result<Vec<RawRecord>> {
        let visitors = table
            .column(&self.settings.visitors_column)
            .or_else(|| table.column_with_prefix(VISITORS_COLUMN_PREFIX))
            .ok_or_else(|| PipelineError::MissingColumn(self.settings.visitors_column.clone()))?;
        let city = table
            .column(CITY_COLUMN)
            .ok_or_else(|| PipelineError::MissingColumn(CITY_COLUMN.to_string()))?;
        let country = table
            .column(COUNTRY_COLUMN)
            .ok_or_else(|| PipelineError::MissingColumn(COUNTRY_COLUMN.to_string()))?;
        let name = table.column(NAME_COLUMN);

        let records = (0..table.rows.len())
            .map(|row| {
                let cell = |column: usize| table.cell(row, column).unwrap_or_default();
                RawRecord {
                    name: name.map(cell).unwrap_or_default().to_string(),
                    visitors: RawValue::Text(cell(visitors).to_string()),
                    city: cell(city).to_string(),
                    country: Some(cell(country))
                        .filter(|c| !c.is_empty())
                        .map(str::to_string),
                }
            })
            .collect();
        Ok(records)
    }

    /// Normalize, resolve and outlier-filter a fixed set of raw records.
    ///
    /// Deterministic for a given record set and reference table.
    pub fn build_from_records(&self, records: Vec<RawRecord>) -> Result<CleanedDataset> {
        let total = records.len();
        let enriched: Vec<EnrichedRecord> = records
            .into_iter()
            .filter_map(|record| self.enrich(record))
            .collect();

        let resolved = enriched.len();
        let cleaned = filter_iqr(enriched, |record| record.ratio);
        let outliers = resolved - cleaned.len();
        PipelineMetrics::record_rows(total, cleaned.len(), outliers);

        if cleaned.is_empty() {
            warn!(total, resolved, "No museums survived enrichment");
            return Err(PipelineError::EmptyDataset);
        }

        info!(
            total,
            resolved,
            outliers,
            kept = cleaned.len(),
            "Built museums dataset"
        );
        Ok(CleanedDataset::new(cleaned))
    }

    fn enrich(&self, record: RawRecord) -> Option<EnrichedRecord> {
        let Some(visitors) = normalize_visitor_count(&record.visitors).filter(|v| !v.is_nan()) else {
            debug!(museum = %record.name, value = ?record.visitors, "Unparsable visitor count");
            PipelineMetrics::record_drop(DropReason::Visitors);
            return None;
        };

        let city = clean_city_name(&record.city);
        let country_code = country_to_iso2(record.country.as_deref());

        let population = self
            .resolver
            .population(&city, country_code.as_deref())
            .filter(|p| *p > 0);
        let Some(population) = population else {
            debug!(museum = %record.name, city = %city, country_code = ?country_code, "No population for city");
            PipelineMetrics::record_drop(DropReason::Population);
            return None;
        };

        Some(EnrichedRecord {
            name: record.name,
            city,
            country: record.country,
            country_code,
            visitors,
            population,
            ratio: visitors / population as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ReferenceCity, ReferenceTable};
    use crate::table::fetch::StaticPageFetcher;

    fn builder(html: &str) -> TableBuilder {
        let table = Arc::new(ReferenceTable::from_cities(vec![
            ReferenceCity::new("Paris", Some("FR"), Some(10_000_000)),
            ReferenceCity::new("London", Some("GB"), Some(9_000_000)),
            ReferenceCity::new("Rome", Some("IT"), Some(4_000_000)),
            ReferenceCity::new("Seoul", Some("KR"), Some(20_000_000)),
            ReferenceCity::new("Madrid", Some("ES"), Some(6_000_000)),
            ReferenceCity::new("Tinytown", Some("FR"), Some(1_000)),
        ]));
        TableBuilder::new(
            Arc::new(StaticPageFetcher::new(html)),
            PopulationResolver::new(table),
            BuilderSettings::default(),
        )
    }

    #[test]
    fn test_outlier_ratio_is_removed() {
        let records = vec![
            RawRecord::new("Louvre", "10.0 mil", "Paris", Some("France")),
            RawRecord::new("British Museum", "9,000,000", "London, England", Some("United Kingdom")),
            RawRecord::new("Vatican Museums", "4.4 million", "Rome", Some("Italy")),
            RawRecord::new("National Museum of Korea", "19.0 mil", "Seoul", Some("South Korea")),
            RawRecord::new("Prado", "6,300,000", "Madrid", Some("Spain")),
            RawRecord::new("Tiny Museum", "5.0 mil", "Tinytown", Some("France")),
        ];

        let dataset = builder("").build_from_records(records).unwrap();
        let names: Vec<&str> = dataset.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Louvre", "British Museum", "Vatican Museums", "National Museum of Korea", "Prado"]
        );
        assert_eq!(dataset.records[1].city, "London");
        assert_eq!(dataset.records[3].country_code.as_deref(), Some("KR"));
    }

    #[test]
    fn test_rows_missing_values_are_dropped() {
        let records = vec![
            RawRecord::new("A", "1,000,000", "Paris", Some("France")),
            RawRecord::new("B", "n/a", "London", Some("United Kingdom")),
            RawRecord::new("C", "2,000,000", "Xyzzyville", None),
            RawRecord::new("D", "1,100,000", "Paris", Some("France")),
        ];

        let dataset = builder("").build_from_records(records).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.iter().all(|r| r.city == "Paris"));
    }

    #[test]
    fn test_all_rows_dropped_is_an_error() {
        let records = vec![RawRecord::new("B", "n/a", "London", Some("United Kingdom"))];
        let err = builder("").build_from_records(records).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyDataset));
    }

    #[test]
    fn test_build_from_page() {
        let html = r#"<table>
            <tr><th>Name</th><th>Visitors in 2024</th><th>City</th><th>Country</th></tr>
            <tr><td>Louvre</td><td>8,700,000<sup>[1]</sup></td><td>Paris</td><td>France</td></tr>
            <tr><td>British Museum</td><td>6,500,000</td><td>London</td><td>United Kingdom</td></tr>
            </table>"#;

        let dataset = builder(html).build().unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].visitors, 8_700_000.0);
        assert_eq!(dataset.records[0].population, 10_000_000);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let html = "<table><tr><th>Name</th><th>Visitors</th><th>City</th></tr></table>";
        let err = builder(html).build().unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn(col) if col == "Country"));
    }
}
