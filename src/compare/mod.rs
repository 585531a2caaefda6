//! File comparator: reads an original and a converted file and scores them.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::errors::CompareError;
use crate::similarity::{char_similarity, line_similarity};

/// Both similarity scores for one pair of inputs, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub char_similarity: f64,
    pub line_similarity: f64,
}

/// Score two in-memory texts.
pub fn compare_texts(original: &str, converted: &str) -> SimilarityReport {
    SimilarityReport {
        char_similarity: char_similarity(original, converted),
        line_similarity: line_similarity(original, converted),
    }
}

/// Read both files as UTF-8 and score them.
pub fn compare_files(
    original_path: impl AsRef<Path>,
    converted_path: impl AsRef<Path>,
) -> Result<SimilarityReport, CompareError> {
    let original = read_source(original_path.as_ref())?;
    let converted = read_source(converted_path.as_ref())?;

    let report = compare_texts(&original, &converted);
    debug!(
        char_similarity = report.char_similarity,
        line_similarity = report.line_similarity,
        "Compared files"
    );
    Ok(report)
}

/// Read a file, keeping "cannot read" and "not UTF-8" apart.
pub fn read_source(path: &Path) -> Result<String, CompareError> {
    let bytes = std::fs::read(path).map_err(|source| CompareError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read source file");

    String::from_utf8(bytes).map_err(|source| CompareError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
