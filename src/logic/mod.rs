//! Logic Module - Screening Engines
//!
//! The inference pipeline end to end:
//! - `record` / `symptoms` - raw input and derived flags
//! - `features/` - per-model encoding, assembly, scaling
//! - `model/` - artifact bundles and ONNX inference
//! - `verdict/` - arbitration and presentation
//! - `pipeline` - orchestration and the process-wide entry point

pub mod features;
pub mod model;
pub mod pipeline;
pub mod record;
pub mod symptoms;
pub mod verdict;
