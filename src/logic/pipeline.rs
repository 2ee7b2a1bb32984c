//! Screening Pipeline - the end-to-end inference entry point
//!
//! One synchronous computation per request: symptom flags, then the
//! per-model feature pipeline and forward pass for M1 and M2, then
//! arbitration and synthesis. Artifacts are loaded once per process and
//! shared read-only afterwards.

use std::path::Path;

use once_cell::sync::OnceCell;
use serde_json::{json, Value};

use crate::constants::get_model_dir;
use crate::error::ScreeningError;
use crate::logic::model::{ModelBundle, ModelId};
use crate::logic::record::PatientRecord;
use crate::logic::symptoms::SymptomFlags;
use crate::logic::verdict::{arbitrate, synthesize, DiagnosticVerdict};

// ============================================================================
// SCREENING ENGINE
// ============================================================================

/// Both model bundles, loaded once and shared across requests.
pub struct ScreeningEngine {
    m1: ModelBundle,
    m2: ModelBundle,
}

impl ScreeningEngine {
    /// Load all eight artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ScreeningError> {
        log::info!("Loading model artifacts from {}", dir.display());
        let m1 = ModelBundle::load(dir, ModelId::M1)?;
        let m2 = ModelBundle::load(dir, ModelId::M2)?;
        Ok(Self { m1, m2 })
    }

    /// Build an engine from pre-constructed bundles (tests, embedders).
    pub fn from_bundles(m1: ModelBundle, m2: ModelBundle) -> Self {
        Self { m1, m2 }
    }

    /// Run the full pipeline for one patient record.
    pub fn screen(&self, record: &PatientRecord) -> Result<DiagnosticVerdict, ScreeningError> {
        let flags = SymptomFlags::extract(record.symptoms_text());

        let p1 = self.m1.predict(record, &flags)?;
        let p2 = self.m2.predict(record, &flags)?;

        let arbitration = arbitrate(p1, p2);
        log::debug!(
            "arbitration: m1_sick={} m2_sick={} positive={} risk={}",
            arbitration.m1_sick,
            arbitration.m2_sick,
            arbitration.is_tb_positive,
            arbitration.risk
        );

        Ok(synthesize(&arbitration))
    }
}

// ============================================================================
// PROCESS-WIDE ENTRY POINT
// ============================================================================

static ENGINE: OnceCell<ScreeningEngine> = OnceCell::new();

/// The shared engine, loaded on first use from the configured model
/// directory.
pub fn engine() -> Result<&'static ScreeningEngine, ScreeningError> {
    ENGINE.get_or_try_init(|| ScreeningEngine::load(Path::new(&get_model_dir())))
}

/// Screen a raw JSON request body. All fatal errors are converted into the
/// single-key error object; no partial verdicts.
pub fn screen_json(input: &str) -> Value {
    let result = serde_json::from_str::<Value>(input)
        .map_err(|e| ScreeningError::InvalidInput(e.to_string()))
        .and_then(PatientRecord::try_from)
        .and_then(|record| engine()?.screen(&record));

    match result {
        Ok(verdict) => serde_json::to_value(&verdict)
            .unwrap_or_else(|e| json!({ "error": e.to_string() })),
        Err(e) => {
            log::warn!("screening failed: {}", e);
            json!({ "error": e.to_string() })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
