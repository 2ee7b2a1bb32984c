//! Result Synthesizer
//!
//! Presentation only: maps an arbitration onto the fixed verdict strings.
//! Three-way branch (positive / disagreement / negative), no computation
//! beyond formatting.

use super::types::{Arbitration, DiagnosticVerdict};

const STATUS_POSITIVE: &str = "Tuberculosis Detected";
const STATUS_NEGATIVE: &str = "No Tuberculosis Detected";

const TEST_POSITIVE: &str = "In-person Clinical Evaluation";
const TEST_NEGATIVE: &str = "Repeat Screening in 3 months";

const RECOMMENDATION_POSITIVE: &str = "Both clinical tests and symptoms indicate high probability of Tuberculosis. Immediate consultation with a specialist is required.";
const RECOMMENDATION_INCONCLUSIVE: &str = "Inconclusive results. One test indicates potential risk. Please consult a doctor for a follow-up checkup.";
const RECOMMENDATION_NEGATIVE: &str = "No immediate signs of Tuberculosis detected. Maintain a healthy lifestyle and consult if symptoms persist.";

/// Render the arbitration as the user-facing verdict record.
pub fn synthesize(arbitration: &Arbitration) -> DiagnosticVerdict {
    let status = if arbitration.is_tb_positive {
        STATUS_POSITIVE
    } else {
        STATUS_NEGATIVE
    };

    let preferred_test = if arbitration.is_tb_positive {
        TEST_POSITIVE
    } else {
        TEST_NEGATIVE
    };

    let recommendation = if arbitration.is_tb_positive {
        RECOMMENDATION_POSITIVE
    } else if arbitration.m1_sick || arbitration.m2_sick {
        RECOMMENDATION_INCONCLUSIVE
    } else {
        RECOMMENDATION_NEGATIVE
    };

    DiagnosticVerdict {
        treatment_type: status.to_string(),
        confidence: format!("{:.2}%", arbitration.confidence_pct),
        risk_level: arbitration.risk,
        preferred_test: preferred_test.to_string(),
        recommendation: recommendation.to_string(),
        debug_info: format!(
            "M1(GeneXpert) Prob: {:.4}, M2(X-ray) Prob: {:.4}",
            arbitration.p1, arbitration.p2
        ),
    }
}

// ============================================================================
// TESTS
// ============================================================================
