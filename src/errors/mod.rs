pub mod types;
pub mod classification;

pub use types::BatchError;
pub use classification::ErrorClassification;
