//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the artifact directory convention, only edit this file.

/// Default directory holding the eight persisted model artifacts
///
/// This is the fallback when no environment variable is set.
/// Training exports its artifacts here by convention.
pub const DEFAULT_MODEL_DIR: &str = "ml_models";

/// Age substituted when the input's Age is missing or unparsable
pub const DEFAULT_AGE: f32 = 30.0;

/// Injected value for `disease_duration_months` when absent from the input
pub const DEFAULT_DISEASE_DURATION_MONTHS: f32 = 0.0;

/// Injected value for `Region Code` when absent from the input
/// (training-time population mean/placeholder)
pub const DEFAULT_REGION_CODE: f32 = 39.0;

/// Decision threshold applied to both raw model probabilities
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Column name carrying the patient age
pub const AGE_COLUMN: &str = "Age";

/// Column name carrying the free-text symptom field
pub const SYMPTOMS_COLUMN: &str = "Symptoms";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "TB Screening Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact directory from environment or use default
pub fn get_model_dir() -> String {
    std::env::var("TB_MODEL_DIR").unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string())
}
