//! Server-rendered dashboard: the cleaned table plus a prediction form.

use askama::Template;

use crate::types::{CleanedDataset, PredictionReport};

/// One museum row, with counts already formatted for display
pub struct DatasetRow {
    pub name: String,
    pub visitors: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub population: String,
    pub ratio: f64,
}

pub struct PredictionRow {
    pub population: String,
    pub predicted: String,
}

pub struct PredictionSummary {
    pub rows: Vec<PredictionRow>,
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Current contents of the population input
    pub pops: String,
    pub dataset_error: Option<String>,
    pub built_at: String,
    pub rows: Vec<DatasetRow>,
    pub prediction_error: Option<String>,
    /// Present once the user asked for predictions and they succeeded
    pub prediction: Option<PredictionSummary>,
}

impl DashboardTemplate {
    pub fn new(
        pops: &str,
        dataset: Result<&CleanedDataset, String>,
        prediction: Option<Result<(Vec<i64>, PredictionReport), String>>,
    ) -> Self {
        let (dataset_error, built_at, rows) = match dataset {
            Ok(dataset) => (
                None,
                dataset.built_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                dataset
                    .iter()
                    .map(|record| DatasetRow {
                        name: record.name.clone(),
                        visitors: format_thousands(record.visitors.round() as i64),
                        city: record.city.clone(),
                        country: record.country.clone().unwrap_or_default(),
                        country_code: record.country_code.clone().unwrap_or_default(),
                        population: format_thousands(record.population),
                        ratio: record.ratio,
                    })
                    .collect(),
            ),
            Err(e) => (Some(e), String::new(), Vec::new()),
        };

        let (prediction, prediction_error) = match prediction {
            Some(Ok((populations, report))) => (Some(summarize(&populations, &report)), None),
            Some(Err(e)) => (None, Some(e)),
            None => (None, None),
        };

        Self {
            pops: pops.to_string(),
            dataset_error,
            built_at,
            rows,
            prediction_error,
            prediction,
        }
    }
}

fn summarize(populations: &[i64], report: &PredictionReport) -> PredictionSummary {
    PredictionSummary {
        rows: populations
            .iter()
            .zip(&report.predictions)
            .map(|(population, predicted)| PredictionRow {
                population: format_thousands(*population),
                predicted: format_thousands(predicted.round() as i64),
            })
            .collect(),
        slope: report.slope,
        intercept: report.intercept,
        r2: report.r2,
    }
}

/// `1234567` -> `"1,234,567"`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnrichedRecord;

    fn dataset() -> CleanedDataset {
        CleanedDataset::new(vec![EnrichedRecord {
            name: "Musée <d'Orsay>".to_string(),
            city: "Paris".to_string(),
            country: Some("France".to_string()),
            country_code: Some("FR".to_string()),
            visitors: 3_900_000.0,
            population: 11_060_000,
            ratio: 0.3526,
        }])
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(10_000_000), "10,000,000");
        assert_eq!(format_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn test_render_table_and_prediction() {
        let dataset = dataset();
        let report = PredictionReport {
            slope: 0.123,
            intercept: 456_789.0,
            r2: 0.4567,
            predictions: vec![579_789.0],
        };
        let html = DashboardTemplate::new("1000000", Ok(&dataset), Some(Ok((vec![1_000_000], report))))
            .render()
            .unwrap();

        assert!(html.contains("1 museums, built"));
        assert!(html.contains("11,060,000"));
        assert!(html.contains("<td class=\"num\">0.3526</td>"));
        assert!(html.contains("<td class=\"num\">1,000,000</td><td class=\"num\">579,789</td>"));
        assert!(html.contains("Slope: 0.12"));
        assert!(html.contains("Intercept: 456789.00"));
        assert!(html.contains("R²: 0.46"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_render_escapes_scraped_text() {
        let dataset = dataset();
        let html = DashboardTemplate::new("<b>", Ok(&dataset), None)
            .render()
            .unwrap();

        assert!(html.contains("Musée &lt;d"));
        assert!(!html.contains("<d'Orsay>"));
        assert!(html.contains(r#"value="&lt;b&gt;""#));
        assert!(!html.contains("Prediction Summary"));
    }

    #[test]
    fn test_render_errors_inline() {
        let html = DashboardTemplate::new(
            "abc",
            Err("No table found in the fetched page".to_string()),
            Some(Err("Invalid population value: 'abc'".to_string())),
        )
        .render()
        .unwrap();

        assert!(html.contains("Error: No table found in the fetched page"));
        assert!(html.contains("Error: Invalid population value: "));
        assert!(!html.contains("'abc'"));
        assert!(html.contains(r#"value="abc""#));
        assert!(!html.contains("Prediction Summary"));
    }
}
