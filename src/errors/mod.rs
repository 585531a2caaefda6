pub mod types;
pub mod classification;

pub use types::CompareError;
pub use classification::ErrorClassification;
