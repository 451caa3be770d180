//! String similarity scoring for city name matching.
//!
//! Scores are integers in `0..=100`. The default [`WeightedRatio`] combines a
//! plain indel ratio with partial and token-based ratios, weighting the
//! partial variants down when the two strings differ a lot in length.

use std::collections::BTreeSet;

/// Pluggable similarity measure used by the population resolver
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of `query` and `candidate` in `0..=100`
    fn score(&self, query: &str, candidate: &str) -> u8;
}

/// Best-scoring candidate; the first one wins ties
pub fn best_match<'a, I>(scorer: &dyn SimilarityScorer, query: &str, candidates: I) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u8)> = None;
    for candidate in candidates {
        let score = scorer.score(query, candidate);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best
}

/// Weighted mix of ratio, partial ratio, token sort and token set ratios
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

const UNBASE_SCALE: f64 = 0.95;

impl SimilarityScorer for WeightedRatio {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        let p1 = process(query);
        let p2 = process(candidate);
        if p1.is_empty() || p2.is_empty() {
            return 0;
        }

        let base = ratio(&p1, &p2);

        let len1 = p1.chars().count() as f64;
        let len2 = p2.chars().count() as f64;
        let len_ratio = len1.max(len2) / len1.min(len2);

        let best = if len_ratio < 1.5 {
            let tsor = token_sort_ratio(&p1, &p2, ratio) * UNBASE_SCALE;
            let tser = token_set_ratio(&p1, &p2, ratio) * UNBASE_SCALE;
            base.max(tsor).max(tser)
        } else {
            let partial_scale = if len_ratio > 8.0 { 0.6 } else { 0.9 };
            let partial = partial_ratio(&p1, &p2) * partial_scale;
            let ptsor = token_sort_ratio(&p1, &p2, partial_ratio) * UNBASE_SCALE * partial_scale;
            let ptser = token_set_ratio(&p1, &p2, partial_ratio) * UNBASE_SCALE * partial_scale;
            base.max(partial).max(ptsor).max(ptser)
        };

        best.round().clamp(0.0, 100.0) as u8
    }
}

/// Drop non-ASCII characters, replace anything not alphanumeric with a space,
/// lower-case and trim. `"Kraków"` becomes `"krakw"`.
pub fn process(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Indel similarity: 2 * LCS / (len1 + len2), scaled to 100 and rounded
pub fn ratio(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    indel_ratio(&a, &b).round()
}

fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * longest_common_subsequence(a, b) as f64 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                row[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

/// Best ratio of the shorter string against every same-length window of the longer
pub fn partial_ratio(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if shorter.is_empty() {
        return 0.0;
    }

    let mut best = 0.0f64;
    for window in longer.windows(shorter.len()) {
        best = best.max(indel_ratio(&shorter, window));
        if best >= 100.0 {
            break;
        }
    }
    best.round()
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort_ratio(s1: &str, s2: &str, scorer: fn(&str, &str) -> f64) -> f64 {
    scorer(&sorted_tokens(s1), &sorted_tokens(s2))
}

fn token_set_ratio(s1: &str, s2: &str, scorer: fn(&str, &str) -> f64) -> f64 {
    let tokens1: BTreeSet<&str> = s1.split_whitespace().collect();
    let tokens2: BTreeSet<&str> = s2.split_whitespace().collect();

    let join = |set: Vec<&str>| set.join(" ");
    let intersection = join(tokens1.intersection(&tokens2).copied().collect());
    let diff1to2 = join(tokens1.difference(&tokens2).copied().collect());
    let diff2to1 = join(tokens2.difference(&tokens1).copied().collect());

    let combined_1to2 = format!("{} {}", intersection, diff1to2).trim().to_string();
    let combined_2to1 = format!("{} {}", intersection, diff2to1).trim().to_string();

    scorer(&intersection, &combined_1to2)
        .max(scorer(&intersection, &combined_2to1))
        .max(scorer(&combined_1to2, &combined_2to1))
}
