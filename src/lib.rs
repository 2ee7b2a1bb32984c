//! TB Screening Core - Dual-Model Inference Engine
//!
//! Screens patients for tuberculosis by combining two independently trained
//! classifiers - a clinical/symptom model (M1) and an imaging-derived model
//! (M2) - into one diagnostic verdict with confidence, risk tier, and
//! recommendation. Consumes the training side's persisted artifacts
//! (ONNX weights, categorical encoders, feature-order lists, scalers)
//! read-only; produces one immutable verdict per request.

pub mod constants;
pub mod error;
pub mod logic;

pub use error::ScreeningError;
pub use logic::pipeline::{engine, screen_json, ScreeningEngine};
pub use logic::record::PatientRecord;
pub use logic::verdict::{DiagnosticVerdict, RiskLevel};
