//! Scaling Adapter - fitted per-feature standardization
//!
//! Applies the training-time center/scale transform elementwise. The fitted
//! dimensionality is authoritative: a vector of any other length indicates
//! artifact/schema drift and fails the request.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScreeningError;

/// Fitted standard scaler for one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl Scaler {
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, ScreeningError> {
        if mean.len() != scale.len() {
            return Err(ScreeningError::ArtifactLoad(format!(
                "scaler mean/scale length disagree: {} vs {}",
                mean.len(),
                scale.len()
            )));
        }
        Ok(Self { mean, scale })
    }

    /// Load the scaler artifact (JSON with "mean" and "scale" arrays).
    pub fn load(path: &Path) -> Result<Self, ScreeningError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ScreeningError::ArtifactLoad(format!("reading {}: {}", path.display(), e))
        })?;
        let scaler: Scaler = serde_json::from_str(&raw).map_err(|e| {
            ScreeningError::ArtifactLoad(format!("parsing {}: {}", path.display(), e))
        })?;
        if scaler.mean.len() != scaler.scale.len() {
            return Err(ScreeningError::ArtifactLoad(format!(
                "{}: mean/scale length disagree",
                path.display()
            )));
        }
        Ok(scaler)
    }

    /// Fitted dimensionality.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// `(x - mean) / scale` elementwise. A zero scale entry (degenerate
    /// constant column) divides by 1 instead.
    pub fn transform(&self, vector: &[f32]) -> Result<Vec<f32>, ScreeningError> {
        if vector.len() != self.mean.len() {
            return Err(ScreeningError::DimensionMismatch {
                expected: self.mean.len(),
                actual: vector.len(),
            });
        }

        Ok(vector
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| {
                let divisor = if s == 0.0 { 1.0 } else { s };
                (x - m) / divisor
            })
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
