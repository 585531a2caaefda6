use similar::{ChangeTag, TextDiff};

use crate::compare::SimilarityReport;
use crate::errors::CompareError;

pub fn format_text_report(report: &SimilarityReport) -> String {
    format!(
        "Character similarity: {:.4}\nLine similarity: {:.4}\n",
        report.char_similarity, report.line_similarity,
    )
}

pub fn format_json_report(report: &SimilarityReport) -> Result<String, CompareError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Line diff of two normalized line sequences: `-` for lines only in the
/// original, `+` for lines only in the converted file, blank for shared ones.
pub fn format_line_diff(original: &[String], converted: &[String]) -> String {
    let old: Vec<&str> = original.iter().map(String::as_str).collect();
    let new: Vec<&str> = converted.iter().map(String::as_str).collect();
    let diff = TextDiff::from_slices(&old, &new);

    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        out.push(sign);
        out.push(' ');
        out.push_str(change.value());
        out.push('\n');
    }
    out
}
