//! Error types for the screening pipeline
//!
//! Two families: fatal request errors (everything below) and silent
//! coercion fallbacks (unparsable Age, unseen categorical value), which are
//! substituted with documented defaults and never surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreeningError {
    /// One of the eight required artifacts is missing or corrupt.
    #[error("Error loading models/encoders: {0}")]
    ArtifactLoad(String),

    /// A schema column could not be resolved from the input, the symptom
    /// flags, or the engineered defaults. Skipping it would silently
    /// misalign the vector against the trained feature order.
    #[error("Feature column '{column}' cannot be resolved from the input")]
    SchemaResolution { column: String },

    /// Assembled vector length disagrees with a fitted artifact. Indicates
    /// artifact/schema drift, never recoverable by retry.
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Model forward-pass failure.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The request body is not a JSON object.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
