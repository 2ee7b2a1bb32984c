//! Feature Vector Assembler
//!
//! Builds the exact ordered numeric vector a model expects, column by
//! column against its schema. Resolution priority per column:
//! encoded categorical, numeric input field (Age defaults to 30),
//! symptom flag, engineered default. A column resolvable by no rule fails
//! the request; skipping it would misalign the vector against the trained
//! feature order.

use std::collections::BTreeMap;

use crate::constants::{
    AGE_COLUMN, DEFAULT_AGE, DEFAULT_DISEASE_DURATION_MONTHS, DEFAULT_REGION_CODE,
};
use crate::error::ScreeningError;
use crate::logic::record::PatientRecord;
use crate::logic::symptoms::SymptomFlags;

use super::schema::FeatureSchema;

/// Defaults for engineered columns the training pipeline derives but the
/// inference input may omit.
const ENGINEERED_DEFAULTS: &[(&str, f32)] = &[
    ("disease_duration_months", DEFAULT_DISEASE_DURATION_MONTHS),
    ("Region Code", DEFAULT_REGION_CODE),
];

fn engineered_default(column: &str) -> Option<f32> {
    ENGINEERED_DEFAULTS
        .iter()
        .find(|&&(name, _)| name == column)
        .map(|&(_, value)| value)
}

/// Assemble the ordered vector for one model.
///
/// `encoded` holds the already-encoded categorical columns for this model
/// (output of the encoding adapter); it takes priority over raw fields.
pub fn assemble(
    schema: &FeatureSchema,
    encoded: &BTreeMap<String, f32>,
    record: &PatientRecord,
    flags: &SymptomFlags,
) -> Result<Vec<f32>, ScreeningError> {
    let mut vector = Vec::with_capacity(schema.len());

    for column in schema.columns() {
        let value = if let Some(&code) = encoded.get(column) {
            code
        } else if column == AGE_COLUMN {
            // Missing or unparsable Age is a coercion fallback, not an error.
            record.numeric(column).unwrap_or(DEFAULT_AGE)
        } else if let Some(v) = record.numeric(column) {
            v
        } else if let Some(flag) = flags.get(column) {
            if flag {
                1.0
            } else {
                0.0
            }
        } else if let Some(default) = engineered_default(column) {
            default
        } else {
            return Err(ScreeningError::SchemaResolution {
                column: column.to_string(),
            });
        };
        vector.push(value);
    }

    debug_assert_eq!(vector.len(), schema.len());
    Ok(vector)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(cols: &[&str]) -> FeatureSchema {
        FeatureSchema::new(cols.iter().map(|s| s.to_string()).collect())
    }

    fn record(value: serde_json::Value) -> PatientRecord {
        PatientRecord::try_from(value).unwrap()
    }

    #[test]
    fn test_vector_matches_schema_order() {
        let schema = schema(&["Gender", "Age", "night_sweats"]);
        let mut encoded = BTreeMap::new();
        encoded.insert("Gender".to_string(), 1.0);
        let rec = record(json!({"Age": 45, "Symptoms": "Night Sweats"}));
        let flags = SymptomFlags::extract(rec.symptoms_text());

        let vector = assemble(&schema, &encoded, &rec, &flags).unwrap();
        assert_eq!(vector, vec![1.0, 45.0, 1.0]);
    }

    #[test]
    fn test_missing_age_defaults_to_30() {
        let schema = schema(&["Age"]);
        let rec = record(json!({}));
        let flags = SymptomFlags::default();

        let vector = assemble(&schema, &BTreeMap::new(), &rec, &flags).unwrap();
        assert_eq!(vector, vec![30.0]);
    }

    #[test]
    fn test_unparsable_age_defaults_to_30() {
        let schema = schema(&["Age"]);
        let rec = record(json!({"Age": "unknown"}));
        let flags = SymptomFlags::default();

        let vector = assemble(&schema, &BTreeMap::new(), &rec, &flags).unwrap();
        assert_eq!(vector, vec![30.0]);
    }

    #[test]
    fn test_engineered_defaults_injected() {
        let schema = schema(&["disease_duration_months", "Region Code"]);
        let rec = record(json!({}));
        let flags = SymptomFlags::default();

        let vector = assemble(&schema, &BTreeMap::new(), &rec, &flags).unwrap();
        assert_eq!(vector, vec![0.0, 39.0]);
    }

    #[test]
    fn test_provided_engineered_fields_win_over_defaults() {
        let schema = schema(&["disease_duration_months", "Region Code"]);
        let rec = record(json!({"disease_duration_months": 6, "Region Code": 12}));
        let flags = SymptomFlags::default();

        let vector = assemble(&schema, &BTreeMap::new(), &rec, &flags).unwrap();
        assert_eq!(vector, vec![6.0, 12.0]);
    }

    #[test]
    fn test_unresolvable_column_fails_with_name() {
        let schema = schema(&["Gender"]);
        let rec = record(json!({"Age": 45}));
        let flags = SymptomFlags::default();

        let err = assemble(&schema, &BTreeMap::new(), &rec, &flags).unwrap_err();
        match err {
            ScreeningError::SchemaResolution { column } => assert_eq!(column, "Gender"),
            other => panic!("expected SchemaResolution, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_flags_resolve_to_zero() {
        let schema = schema(&["dry_cough", "chest_pain"]);
        let rec = record(json!({"Symptoms": "Dry Cough"}));
        let flags = SymptomFlags::extract(rec.symptoms_text());

        let vector = assemble(&schema, &BTreeMap::new(), &rec, &flags).unwrap();
        assert_eq!(vector, vec![1.0, 0.0]);
    }
}
