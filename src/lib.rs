//! Similarity scores between an original source file and a converted one.
//!
//! Comments (`//` and `;`) and whitespace are normalized away, then two
//! measures are reported: a character-level edit-distance ratio and a
//! line-level matching-blocks ratio.

pub mod cli;
pub mod compare;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod reporting;
pub mod similarity;

pub use compare::{compare_files, compare_texts, SimilarityReport};
pub use similarity::{char_similarity, levenshtein_distance, line_similarity};
