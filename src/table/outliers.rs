//! Interquartile-range outlier filter.

use crate::constants::IQR_FENCE;

/// Quantile `q` in `[0, 1]` with linear interpolation between order statistics
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Inclusive bounds `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`
pub fn iqr_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25)?;
    let q3 = quantile(&sorted, 0.75)?;
    let iqr = q3 - q1;
    Some((q1 - IQR_FENCE * iqr, q3 + IQR_FENCE * iqr))
}

/// Keep the items whose key lies within the IQR bounds computed over all items
pub fn filter_iqr<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let values: Vec<f64> = items.iter().map(&key).collect();
    let Some((lower, upper)) = iqr_bounds(&values) else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter(|item| {
            let value = key(item);
            value >= lower && value <= upper
        })
        .collect()
}
