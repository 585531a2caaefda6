pub mod levenshtein;
pub mod matcher;
pub mod score;

pub use levenshtein::levenshtein_distance;
pub use matcher::{Match, SequenceMatcher};
pub use score::{char_similarity, line_similarity};
