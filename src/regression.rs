//! Ordinary least squares of museum visitors on city population.
//!
//! A single predictor with an intercept, solved in closed form:
//! slope = Sxy / Sxx, intercept = mean(y) - slope * mean(x).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CleanedDataset;

/// Errors that can occur during fitting or prediction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error("Insufficient data: need at least 2 rows with visitors and population, got {found}")]
    InsufficientData { found: usize },

    #[error("Model has not been fitted yet")]
    NotFitted,
}

/// Fitted line and its coefficient of determination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

impl FitSummary {
    pub fn predict_one(&self, population: f64) -> f64 {
        self.slope * population + self.intercept
    }
}

/// Linear model mapping population to visitors
#[derive(Debug, Clone, Default)]
pub struct LinearVisitorModel {
    fitted: Option<FitSummary>,
}

impl LinearVisitorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Fit on the dataset's (population, visitors) pairs
    pub fn fit(&mut self, dataset: &CleanedDataset) -> Result<FitSummary, RegressionError> {
        self.fit_points(&dataset.points())
    }

    /// Fit on (population, visitors) pairs; non-finite pairs are skipped
    pub fn fit_points(&mut self, points: &[(f64, f64)]) -> Result<FitSummary, RegressionError> {
        let valid: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();

        if valid.len() < 2 {
            return Err(RegressionError::InsufficientData { found: valid.len() });
        }

        let n = valid.len() as f64;
        let x_mean = valid.iter().map(|(x, _)| x).sum::<f64>() / n;
        let y_mean = valid.iter().map(|(_, y)| y).sum::<f64>() / n;

        let sxx: f64 = valid.iter().map(|(x, _)| (x - x_mean).powi(2)).sum();
        let sxy: f64 = valid
            .iter()
            .map(|(x, y)| (x - x_mean) * (y - y_mean))
            .sum();

        // A constant predictor carries no slope information
        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = y_mean - slope * x_mean;

        let ss_tot: f64 = valid.iter().map(|(_, y)| (y - y_mean).powi(2)).sum();
        let ss_res: f64 = valid
            .iter()
            .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
            .sum();
        let r2 = if ss_tot > 0.0 {
            1.0 - ss_res / ss_tot
        } else if ss_res == 0.0 {
            1.0
        } else {
            0.0
        };

        let summary = FitSummary {
            slope,
            intercept,
            r2,
        };
        self.fitted = Some(summary);
        Ok(summary)
    }

    /// Predicted visitors for each population
    pub fn predict(&self, populations: &[f64]) -> Result<Vec<f64>, RegressionError> {
        let fitted = self.fitted.ok_or(RegressionError::NotFitted)?;
        Ok(populations.iter().map(|&p| fitted.predict_one(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        let tolerance = 1e-6 * b.abs().max(1.0);
        assert!((a - b).abs() <= tolerance, "{} != {}", a, b);
    }

    #[test]
    fn test_perfect_line() {
        let points: Vec<(f64, f64)> = [1.0e6, 2.5e6, 4.0e6, 8.0e6, 12.0e6]
            .iter()
            .map(|&x| (x, 0.3 * x + 250_000.0))
            .collect();

        let mut model = LinearVisitorModel::new();
        let fit = model.fit_points(&points).unwrap();
        assert_close(fit.slope, 0.3);
        assert_close(fit.intercept, 250_000.0);
        assert_close(fit.r2, 1.0);

        let predictions = model.predict(&[0.0, 10.0e6]).unwrap();
        assert_close(predictions[0], 250_000.0);
        assert_close(predictions[1], 3_250_000.0);
    }

    #[test]
    fn test_noisy_fit_has_r2_below_one() {
        let points = [(1.0, 2.0), (2.0, 2.5), (3.0, 5.0), (4.0, 4.0)];
        let fit = LinearVisitorModel::new().fit_points(&points).unwrap();
        assert!(fit.r2 > 0.0 && fit.r2 < 1.0);
        assert_close(fit.slope, 0.85);
        assert_close(fit.intercept, 1.25);
    }

    #[test]
    fn test_insufficient_data() {
        let mut model = LinearVisitorModel::new();
        assert_eq!(
            model.fit_points(&[(1.0, 2.0)]),
            Err(RegressionError::InsufficientData { found: 1 })
        );
        assert_eq!(
            model.fit_points(&[(1.0, 2.0), (f64::NAN, 3.0)]),
            Err(RegressionError::InsufficientData { found: 1 })
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_predict_before_fit() {
        let model = LinearVisitorModel::new();
        assert_eq!(model.predict(&[1.0]), Err(RegressionError::NotFitted));
    }

    #[test]
    fn test_constant_population() {
        let fit = LinearVisitorModel::new()
            .fit_points(&[(5.0, 1.0), (5.0, 3.0)])
            .unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 2.0);
        assert_eq!(fit.r2, 0.0);
    }
}
