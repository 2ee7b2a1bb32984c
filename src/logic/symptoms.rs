//! Symptom Flag Extractor
//!
//! Parses the free-text symptom field into a fixed set of boolean
//! indicators. Matching is case-insensitive and substring-based; flags are
//! independent and not mutually exclusive.

use serde::{Deserialize, Serialize};

/// Flag names and their trigger phrases, in vector order.
/// This is the single source of truth for the symptom layout.
pub const SYMPTOM_KEYWORDS: &[(&str, &str)] = &[
    ("dry_cough", "dry cough"),
    ("chest_pain", "chest pain"),
    ("mild_fever", "mild fever"),
    ("sputum_cough", "sputum"),
    ("evening_fever", "evening fever"),
    ("weight_loss", "weight loss"),
    ("loss_appetite", "loss of appetite"),
    ("night_sweats", "night sweats"),
];

/// Total number of symptom flags
/// IMPORTANT: Must match SYMPTOM_KEYWORDS.len()!
pub const SYMPTOM_COUNT: usize = 8;

/// Fixed-size set of symptom indicators derived from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomFlags {
    values: [bool; SYMPTOM_COUNT],
}

impl SymptomFlags {
    /// Derive flags from a symptom string. Empty input yields all-false.
    pub fn extract(symptoms: &str) -> Self {
        let lowered = symptoms.to_lowercase();
        let mut values = [false; SYMPTOM_COUNT];
        for (i, (_, keyword)) in SYMPTOM_KEYWORDS.iter().enumerate() {
            values[i] = lowered.contains(keyword);
        }
        Self { values }
    }

    /// Flag lookup by name (O(n) but flags are few).
    pub fn get(&self, name: &str) -> Option<bool> {
        SYMPTOM_KEYWORDS
            .iter()
            .position(|&(n, _)| n == name)
            .map(|i| self.values[i])
    }

    pub fn any(&self) -> bool {
        self.values.iter().any(|&v| v)
    }

    /// Flag names in vector order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SYMPTOM_KEYWORDS.iter().map(|&(name, _)| name)
    }
}

impl Default for SymptomFlags {
    fn default() -> Self {
        Self {
            values: [false; SYMPTOM_COUNT],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
