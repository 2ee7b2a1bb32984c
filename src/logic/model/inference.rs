//! Inference Engine - ONNX Runtime Integration
//!
//! Loads and runs one trained classifier. Kept behind a trait so the
//! pipeline and its tests do not care which runtime produced the
//! probability.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::error::ScreeningError;

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// A trained classifier consumed as an opaque artifact: one feature vector
/// in, one probability in [0, 1] out.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<f32, ScreeningError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX Runtime-backed classifier.
///
/// The session requires exclusive access per forward pass; everything else
/// in the bundle is shared read-only.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    model_path: String,
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("model_path", &self.model_path)
            .finish_non_exhaustive()
    }
}

impl OnnxClassifier {
    /// Load an ONNX model from file.
    pub fn load(model_path: &str) -> Result<Self, ScreeningError> {
        log::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(ScreeningError::ArtifactLoad(format!(
                "Model not found: {}",
                model_path
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                ScreeningError::ArtifactLoad(format!("Failed to create session builder: {}", e))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| {
                ScreeningError::ArtifactLoad(format!("Failed to set optimization: {}", e))
            })?
            .commit_from_file(model_path)
            .map_err(|e| ScreeningError::ArtifactLoad(format!("Failed to load model: {}", e)))?;

        log::info!("ONNX model loaded successfully: {}", model_path);

        Ok(Self {
            session: Mutex::new(session),
            model_path: model_path.to_string(),
        })
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32]) -> Result<f32, ScreeningError> {
        let mut session = self.session.lock();

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| ScreeningError::Inference("No output defined".to_string()))?;

        // Single row: [1, n_features]
        let input_array =
            Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec())
                .map_err(|e| ScreeningError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ScreeningError::Inference(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ScreeningError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| ScreeningError::Inference("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ScreeningError::Inference(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;
        let probability = data
            .first()
            .copied()
            .ok_or_else(|| ScreeningError::Inference("Empty output tensor".to_string()))?;

        Ok(probability.clamp(0.0, 1.0))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_file() {
        let err = OnnxClassifier::load("/nonexistent/model.onnx").unwrap_err();
        assert!(matches!(err, ScreeningError::ArtifactLoad(_)));
    }
}
