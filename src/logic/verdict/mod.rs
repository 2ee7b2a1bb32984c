//! Verdict Module
//!
//! Turns two raw model probabilities into the clinical verdict. This is the
//! decision core: deterministic thresholds, conjunctive combination,
//! explainable risk tiers.
//!
//! ## Structure
//! - `types`: Data structures (RiskLevel, Arbitration, DiagnosticVerdict)
//! - `arbiter`: Threshold + conjunction logic
//! - `synthesizer`: Fixed-template presentation

pub mod arbiter;
pub mod synthesizer;
pub mod types;

// Re-export main types for convenience
pub use arbiter::arbitrate;
pub use synthesizer::synthesize;
pub use types::{Arbitration, DiagnosticVerdict, RiskLevel};
