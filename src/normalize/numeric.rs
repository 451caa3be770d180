use crate::constants::{MILLION_SUFFIXES, VISITOR_TEXT_MAX_CHARS};
use crate::types::RawValue;

/// Parse a visitor count such as `"8,700,000[3]"` or `"15.2 million"`.
///
/// Text is cut to its first nine characters before anything else, which drops
/// trailing footnote markers. Counts written with more than nine characters
/// before the unit (e.g. `"123.456 million"`) lose their suffix and come back
/// as `None`; that is an accepted limitation of the truncation.
pub fn normalize_visitor_count(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(text) => parse_count_text(text),
    }
}

fn parse_count_text(text: &str) -> Option<f64> {
    let truncated: String = text.chars().take(VISITOR_TEXT_MAX_CHARS).collect();
    let cleaned = truncated.replace(',', "").to_lowercase();
    let cleaned = cleaned.trim();

    if MILLION_SUFFIXES.iter().any(|suffix| cleaned.ends_with(suffix)) {
        let digits: String = cleaned
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        return digits.parse::<f64>().ok().map(|n| n * 1_000_000.0);
    }

    cleaned.parse::<f64>().ok()
}
