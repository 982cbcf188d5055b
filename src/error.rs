use thiserror::Error;

/// Malformed or inconsistent input handed to the peak extractor.
///
/// Always surfaced to the caller; the extractor never recovers from these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("intensity at index {index} is not finite ({value})")]
    NonFiniteIntensity { index: usize, value: f64 },

    #[error("{field}: '{text}' is not a number")]
    NotANumber { field: &'static str, text: String },

    #[error("{field}: {value} is not a finite number")]
    NonFiniteParameter { field: &'static str, value: f64 },
}
