//! Feature Schema - the ordered column list a model was trained on
//!
//! Unlike a compile-time layout, the schema is a persisted artifact: each
//! model ships the exact column order its weights expect. The CRC32 hash
//! over the ordered names is recorded in the bundle metadata so drifted
//! artifacts are caught at load time, not as a misaligned vector.

use std::path::Path;

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::ScreeningError;

/// Ordered feature-column list for one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Load the schema artifact (a JSON array of column names).
    pub fn load(path: &Path) -> Result<Self, ScreeningError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ScreeningError::ArtifactLoad(format!("reading {}: {}", path.display(), e))
        })?;
        let schema: FeatureSchema = serde_json::from_str(&raw).map_err(|e| {
            ScreeningError::ArtifactLoad(format!("parsing {}: {}", path.display(), e))
        })?;
        if schema.columns.is_empty() {
            return Err(ScreeningError::ArtifactLoad(format!(
                "{}: empty feature list",
                path.display()
            )));
        }
        Ok(schema)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Get column index by name (O(n) but columns are few).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// CRC32 hash over the ordered column names.
    /// Order-sensitive: reordered columns hash differently.
    pub fn hash(&self) -> u32 {
        let mut hasher = Hasher::new();
        for name in &self.columns {
            hasher.update(name.as_bytes());
            hasher.update(&[0]); // Separator
        }
        hasher.finalize()
    }
}

// ============================================================================
// TESTS
// ============================================================================
