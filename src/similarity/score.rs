use crate::normalize::{normalized_lines, token_string};
use super::levenshtein::levenshtein_distance;
use super::matcher::SequenceMatcher;

/// Character-level similarity in `[0, 1]`.
///
/// Both texts are reduced to their normalized token strings and compared by
/// edit distance: `1 - distance / max(len1, len2)`. Two texts that normalize
/// to nothing are identical.
pub fn char_similarity(original: &str, converted: &str) -> f64 {
    let left = token_string(original);
    let right = token_string(converted);
    if left.is_empty() && right.is_empty() {
        return 1.0;
    }

    let distance = levenshtein_distance(&left, &right);
    let max_len = left.chars().count().max(right.chars().count());
    1.0 - distance as f64 / max_len as f64
}

/// Line-level similarity in `[0, 1]`.
///
/// Whole normalized lines are the unit of comparison, so a localized insertion
/// or deletion only costs the lines it touches.
pub fn line_similarity(original: &str, converted: &str) -> f64 {
    let left = normalized_lines(original);
    let right = normalized_lines(converted);
    SequenceMatcher::new(&left, &right).ratio()
}
