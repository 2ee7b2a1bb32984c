//! Categorical Encoding Adapter
//!
//! Maps a categorical attribute to the ordinal code learned at training
//! time. Vocabulary order is the fitted order; the code is the index within
//! it. Unseen values never abort inference: they degrade to the first class
//! in the stored vocabulary, tagged so callers can track fallback frequency.

use serde::{Deserialize, Serialize};

/// Outcome of encoding one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoded {
    /// Value was in the training-time vocabulary.
    Known(usize),
    /// Value was unseen; code is the designated fallback class.
    Fallback(usize),
}

impl Encoded {
    pub fn code(&self) -> usize {
        match *self {
            Encoded::Known(c) | Encoded::Fallback(c) => c,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Encoded::Fallback(_))
    }
}

/// Immutable per-column vocabulary fitted at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalEncoder {
    classes: Vec<String>,
}

impl CategoricalEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The designated fallback class: first in stored order.
    pub fn fallback_class(&self) -> Option<&str> {
        self.classes.first().map(String::as_str)
    }

    /// Encode a string value. Deterministic: the same input always yields
    /// the same code, seen or unseen.
    pub fn encode(&self, value: &str) -> Encoded {
        match self.classes.iter().position(|c| c == value) {
            Some(code) => Encoded::Known(code),
            None => Encoded::Fallback(0),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
