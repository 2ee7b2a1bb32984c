//! Dual-Model Arbiter
//!
//! Pure, deterministic function of the two raw probabilities. The polarity
//! asymmetry is the one subtle invariant here: M1 emits the probability of
//! the TB-positive class, M2 emits the probability of the abnormal-absent
//! class, so M2 indicates disease when its output is LOW.
//!
//! The combined verdict is conjunctive: both signals must agree before the
//! screen reports positive.

use crate::constants::DECISION_THRESHOLD;

use super::types::{Arbitration, RiskLevel};

/// Arbitrate the two model outputs into one decision.
pub fn arbitrate(p1: f32, p2: f32) -> Arbitration {
    let m1_sick = p1 > DECISION_THRESHOLD;
    let m2_sick = p2 < DECISION_THRESHOLD; // inverted polarity

    let is_tb_positive = m1_sick && m2_sick;

    // Mean of each model's support for the chosen verdict.
    let confidence_pct = if is_tb_positive {
        (p1 + (1.0 - p2)) / 2.0 * 100.0
    } else {
        ((1.0 - p1) + p2) / 2.0 * 100.0
    };

    let risk = if is_tb_positive {
        RiskLevel::High
    } else if m1_sick || m2_sick {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    Arbitration {
        p1,
        p2,
        m1_sick,
        m2_sick,
        is_tb_positive,
        confidence_pct,
        risk,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_agree_positive() {
        let a = arbitrate(0.9, 0.1);
        assert!(a.m1_sick);
        assert!(a.m2_sick);
        assert!(a.is_tb_positive);
        assert_eq!(a.risk, RiskLevel::High);
        assert!((a.confidence_pct - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_disagreement_is_negative_moderate() {
        // M1 says sick, M2's high output means abnormality absent.
        let a = arbitrate(0.9, 0.9);
        assert!(a.m1_sick);
        assert!(!a.m2_sick);
        assert!(!a.is_tb_positive);
        assert_eq!(a.risk, RiskLevel::Moderate);
        // Negative branch: ((1 - 0.9) + 0.9) / 2 * 100
        assert!((a.confidence_pct - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_neither_positive_is_low() {
        let a = arbitrate(0.1, 0.9);
        assert!(!a.m1_sick);
        assert!(!a.m2_sick);
        assert!(!a.is_tb_positive);
        assert_eq!(a.risk, RiskLevel::Low);
        // ((1 - 0.1) + 0.9) / 2 * 100
        assert!((a.confidence_pct - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_m2_alone_is_moderate() {
        let a = arbitrate(0.2, 0.1);
        assert!(!a.m1_sick);
        assert!(a.m2_sick);
        assert_eq!(a.risk, RiskLevel::Moderate);
        assert!(!a.is_tb_positive);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly 0.5 is positive for neither model.
        let a = arbitrate(0.5, 0.5);
        assert!(!a.m1_sick);
        assert!(!a.m2_sick);
        assert_eq!(a.risk, RiskLevel::Low);
    }

    #[test]
    fn test_monotonic_in_p1() {
        // Raising p1 above 0.5 with p2 fixed below 0.5 never flips the
        // verdict back to negative.
        let p2 = 0.3;
        let mut positive_seen = false;
        for step in 0..=100 {
            let p1 = step as f32 / 100.0;
            let a = arbitrate(p1, p2);
            if a.is_tb_positive {
                positive_seen = true;
            } else {
                assert!(!positive_seen, "verdict flipped back at p1={}", p1);
            }
        }
        assert!(positive_seen);
    }

    #[test]
    fn test_confidence_in_range() {
        for &(p1, p2) in &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.6, 0.4)] {
            let a = arbitrate(p1, p2);
            assert!(a.confidence_pct >= 0.0 && a.confidence_pct <= 100.0);
        }
    }
}
