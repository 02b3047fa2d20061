use once_cell::sync::Lazy;
use regex::Regex;

/// Similarity ratio a short answer must strictly exceed to count as correct.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizes an answer for comparison: collapses whitespace runs to a single
/// space, trims, and lowercases. Pure and total; applied before every
/// comparison.
pub fn normalize_answer(answer: &str) -> String {
    WHITESPACE.replace_all(answer, " ").trim().to_lowercase()
}

/// Fuzzy equality for short answers: normalized edit-similarity ratio in
/// `[0, 1]`, strictly above the default threshold. A similarity oracle, not a
/// strict metric.
pub fn is_similar(a: &str, b: &str) -> bool {
    is_similar_with_threshold(a, b, DEFAULT_SIMILARITY_THRESHOLD)
}

pub fn is_similar_with_threshold(a: &str, b: &str, threshold: f64) -> bool {
    strsim::normalized_levenshtein(a, b) > threshold
}
