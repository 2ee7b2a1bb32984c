//! Model Bundle - one model's four persisted artifacts, held together
//!
//! Classifier, encoder table, scaler, and feature schema travel as one
//! immutable value so the two models' heterogeneous artifacts can never be
//! cross-mixed. Loaded once by fixed name convention, shared read-only
//! across requests.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScreeningError;
use crate::logic::features::{assemble, CategoricalEncoder, FeatureSchema, Scaler};
use crate::logic::record::PatientRecord;
use crate::logic::symptoms::SymptomFlags;

use super::inference::{Classifier, OnnxClassifier};

// ============================================================================
// MODEL IDENTITY
// ============================================================================

/// The two arbitrated models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    /// Clinical/symptom model
    M1,
    /// Imaging-derived model
    M2,
}

impl ModelId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::M1 => "M1",
            ModelId::M2 => "M2",
        }
    }

    /// Artifact file names follow the training exporter's convention.
    pub fn model_file(&self) -> String {
        format!("model_{}.onnx", self.as_str())
    }

    pub fn encoders_file(&self) -> String {
        format!("encoders_{}.json", self.as_str())
    }

    pub fn scaler_file(&self) -> String {
        format!("scaler_{}.json", self.as_str())
    }

    pub fn features_file(&self) -> String {
        format!("features_{}.json", self.as_str())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// METADATA
// ============================================================================

/// Load-time facts about a bundle, for logs and drift diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub feature_count: usize,
    pub schema_hash: u32,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// MODEL BUNDLE
// ============================================================================

/// One model's artifacts, immutable after load.
pub struct ModelBundle {
    id: ModelId,
    classifier: Box<dyn Classifier>,
    encoders: BTreeMap<String, CategoricalEncoder>,
    scaler: Scaler,
    schema: FeatureSchema,
    metadata: ModelMetadata,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("id", &self.id)
            .field("encoders", &self.encoders)
            .field("scaler", &self.scaler)
            .field("schema", &self.schema)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl ModelBundle {
    /// Load the four artifacts for `id` from `dir`. Any missing or corrupt
    /// artifact fails the load; so does a scaler whose fitted dimensionality
    /// disagrees with the schema (artifact drift).
    pub fn load(dir: &Path, id: ModelId) -> Result<Self, ScreeningError> {
        let model_path = dir.join(id.model_file());
        let classifier = OnnxClassifier::load(&model_path.to_string_lossy())?;

        let encoders = load_encoders(&dir.join(id.encoders_file()))?;
        let scaler = Scaler::load(&dir.join(id.scaler_file()))?;
        let schema = FeatureSchema::load(&dir.join(id.features_file()))?;

        Self::assemble_bundle(
            id,
            Box::new(classifier),
            encoders,
            scaler,
            schema,
            model_path.to_string_lossy().into_owned(),
        )
    }

    /// Build a bundle from already-loaded artifacts. Used by tests to
    /// substitute a stub classifier; the same drift checks apply.
    pub fn from_parts(
        id: ModelId,
        classifier: Box<dyn Classifier>,
        encoders: BTreeMap<String, CategoricalEncoder>,
        scaler: Scaler,
        schema: FeatureSchema,
    ) -> Result<Self, ScreeningError> {
        Self::assemble_bundle(id, classifier, encoders, scaler, schema, "<memory>".to_string())
    }

    fn assemble_bundle(
        id: ModelId,
        classifier: Box<dyn Classifier>,
        encoders: BTreeMap<String, CategoricalEncoder>,
        scaler: Scaler,
        schema: FeatureSchema,
        model_path: String,
    ) -> Result<Self, ScreeningError> {
        if scaler.len() != schema.len() {
            return Err(ScreeningError::ArtifactLoad(format!(
                "{}: scaler fitted on {} features but schema lists {}",
                id,
                scaler.len(),
                schema.len()
            )));
        }

        let metadata = ModelMetadata {
            model_path,
            feature_count: schema.len(),
            schema_hash: schema.hash(),
            loaded_at: chrono::Utc::now(),
        };

        log::info!(
            "{} bundle ready: {} features, schema hash {:08x}",
            id,
            metadata.feature_count,
            metadata.schema_hash
        );

        Ok(Self {
            id,
            classifier,
            encoders,
            scaler,
            schema,
            metadata,
        })
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Encode the record's categorical columns with this model's fitted
    /// vocabularies. Columns absent from the encoder set are untouched;
    /// unseen values fall back and are counted, never fatal.
    fn encode_categoricals(&self, record: &PatientRecord) -> BTreeMap<String, f32> {
        let mut encoded = BTreeMap::new();
        for (column, encoder) in &self.encoders {
            if let Some(value) = record.as_string(column) {
                let result = encoder.encode(&value);
                if result.is_fallback() {
                    log::debug!(
                        "{}: unseen value '{}' for '{}', using fallback class '{}'",
                        self.id,
                        value,
                        column,
                        encoder.fallback_class().unwrap_or("")
                    );
                }
                encoded.insert(column.clone(), result.code() as f32);
            }
        }
        encoded
    }

    /// Full per-model feature pipeline: encode, assemble in schema order,
    /// scale.
    pub fn prepare(
        &self,
        record: &PatientRecord,
        flags: &SymptomFlags,
    ) -> Result<Vec<f32>, ScreeningError> {
        let encoded = self.encode_categoricals(record);
        let raw = assemble(&self.schema, &encoded, record, flags)?;
        self.scaler.transform(&raw)
    }

    /// Prepare the vector and run the model. Returns the raw probability.
    pub fn predict(
        &self,
        record: &PatientRecord,
        flags: &SymptomFlags,
    ) -> Result<f32, ScreeningError> {
        let vector = self.prepare(record, flags)?;
        let probability = self.classifier.predict(&vector)?;
        log::debug!("{} raw probability: {:.4}", self.id, probability);
        Ok(probability)
    }
}

fn load_encoders(path: &Path) -> Result<BTreeMap<String, CategoricalEncoder>, ScreeningError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ScreeningError::ArtifactLoad(format!("reading {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| ScreeningError::ArtifactLoad(format!("parsing {}: {}", path.display(), e)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedClassifier(f32);

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &[f32]) -> Result<f32, ScreeningError> {
            Ok(self.0)
        }
    }

    fn schema(cols: &[&str]) -> FeatureSchema {
        FeatureSchema::new(cols.iter().map(|s| s.to_string()).collect())
    }

    fn gender_encoder() -> BTreeMap<String, CategoricalEncoder> {
        let mut map = BTreeMap::new();
        map.insert(
            "Gender".to_string(),
            CategoricalEncoder::new(vec![
                "Female".to_string(),
                "Male".to_string(),
                "Other".to_string(),
            ]),
        );
        map
    }

    #[test]
    fn test_bundle_rejects_scaler_schema_drift() {
        let err = ModelBundle::from_parts(
            ModelId::M1,
            Box::new(FixedClassifier(0.5)),
            BTreeMap::new(),
            Scaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap(),
            schema(&["Age", "dry_cough"]),
        )
        .unwrap_err();
        assert!(matches!(err, ScreeningError::ArtifactLoad(_)));
    }

    #[test]
    fn test_prepare_encodes_and_scales() {
        let bundle = ModelBundle::from_parts(
            ModelId::M1,
            Box::new(FixedClassifier(0.9)),
            gender_encoder(),
            Scaler::new(vec![0.0, 30.0], vec![1.0, 10.0]).unwrap(),
            schema(&["Gender", "Age"]),
        )
        .unwrap();

        let record = PatientRecord::try_from(json!({"Gender": "Male", "Age": 50})).unwrap();
        let flags = SymptomFlags::default();

        let vector = bundle.prepare(&record, &flags).unwrap();
        assert_eq!(vector, vec![1.0, 2.0]);
    }

    #[test]
    fn test_predict_returns_classifier_probability() {
        let bundle = ModelBundle::from_parts(
            ModelId::M2,
            Box::new(FixedClassifier(0.1)),
            BTreeMap::new(),
            Scaler::new(vec![0.0], vec![1.0]).unwrap(),
            schema(&["Age"]),
        )
        .unwrap();

        let record = PatientRecord::try_from(json!({"Age": 45})).unwrap();
        let flags = SymptomFlags::default();

        assert_eq!(bundle.predict(&record, &flags).unwrap(), 0.1);
    }

    #[test]
    fn test_load_surfaces_missing_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelBundle::load(dir.path(), ModelId::M1).unwrap_err();
        assert!(matches!(err, ScreeningError::ArtifactLoad(_)));
    }

    #[test]
    fn test_encoders_artifact_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoders_M1.json");
        std::fs::write(
            &path,
            json!({
                "Gender": {"classes": ["Female", "Male", "Other"]},
                "Region": {"classes": ["Barisal", "Chittagong", "Dhaka"]},
            })
            .to_string(),
        )
        .unwrap();

        let encoders = load_encoders(&path).unwrap();
        assert_eq!(encoders.len(), 2);
        assert_eq!(encoders["Gender"].encode("Other").code(), 2);
        assert_eq!(encoders["Region"].encode("Dhaka").code(), 2);
    }
}
