//! Verdict Types
//!
//! Data structures only; arbitration and presentation logic live in
//! `arbiter` and `synthesizer`.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER
// ============================================================================

/// Screening risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Both signals agree positive
    High,
    /// Exactly one signal is positive
    Moderate,
    /// Neither signal is positive
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ARBITRATION
// ============================================================================

/// Output of the dual-model arbiter: the combined decision plus everything
/// the synthesizer needs to explain it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arbitration {
    /// Raw M1 probability (positive class = TB)
    pub p1: f32,
    /// Raw M2 probability (positive class = abnormality ABSENT)
    pub p2: f32,
    pub m1_sick: bool,
    pub m2_sick: bool,
    /// Conjunctive verdict: both signals must agree
    pub is_tb_positive: bool,
    /// Mean support for the chosen verdict, in [0, 100]
    pub confidence_pct: f32,
    pub risk: RiskLevel,
}

// ============================================================================
// DIAGNOSTIC VERDICT
// ============================================================================

/// The user-facing output record. Key names are the external contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticVerdict {
    pub treatment_type: String,
    pub confidence: String,
    pub risk_level: RiskLevel,
    pub preferred_test: String,
    pub recommendation: String,
    pub debug_info: String,
}
