//! Patient Record - the dynamically-keyed inference input
//!
//! One record per request, immutable after construction. Field names follow
//! the training data ("Age", "Smoking Status", ...) so lookups go through
//! the raw JSON map rather than a fixed struct.

use serde_json::{Map, Value};

use crate::constants::{AGE_COLUMN, DEFAULT_AGE, SYMPTOMS_COLUMN};

/// Raw patient attributes for one screening request.
#[derive(Debug, Clone)]
pub struct PatientRecord {
    fields: Map<String, Value>,
}

impl PatientRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw field access.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The free-text symptom field. Missing field reads as empty.
    pub fn symptoms_text(&self) -> &str {
        self.fields
            .get(SYMPTOMS_COLUMN)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// String form of a field, as fed to the categorical encoders.
    pub fn as_string(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Numeric coercion: JSON numbers pass through, strings are parsed.
    /// Anything else (or a parse failure) is None.
    pub fn numeric(&self, name: &str) -> Option<f32> {
        match self.fields.get(name)? {
            Value::Number(n) => n.as_f64().map(|v| v as f32),
            Value::String(s) => s.trim().parse::<f32>().ok(),
            _ => None,
        }
    }

    /// Age with the documented coercion fallback: missing or unparsable
    /// values read as 30. Never an error.
    pub fn age(&self) -> f32 {
        self.numeric(AGE_COLUMN).unwrap_or(DEFAULT_AGE)
    }
}

impl TryFrom<Value> for PatientRecord {
    type Error = crate::error::ScreeningError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(crate::error::ScreeningError::InvalidInput(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> PatientRecord {
        PatientRecord::try_from(value).unwrap()
    }

    #[test]
    fn test_age_from_number() {
        let r = record(json!({"Age": 45}));
        assert_eq!(r.age(), 45.0);
    }

    #[test]
    fn test_age_from_numeric_string() {
        let r = record(json!({"Age": "52"}));
        assert_eq!(r.age(), 52.0);
    }

    #[test]
    fn test_age_missing_defaults() {
        let r = record(json!({"Gender": "Male"}));
        assert_eq!(r.age(), 30.0);
    }

    #[test]
    fn test_age_unparsable_defaults() {
        let r = record(json!({"Age": "forty-five"}));
        assert_eq!(r.age(), 30.0);
    }

    #[test]
    fn test_symptoms_text_missing_is_empty() {
        let r = record(json!({}));
        assert_eq!(r.symptoms_text(), "");
    }

    #[test]
    fn test_as_string_number() {
        let r = record(json!({"Region Code": 39}));
        assert_eq!(r.as_string("Region Code").as_deref(), Some("39"));
    }

    #[test]
    fn test_non_object_input_rejected() {
        assert!(PatientRecord::try_from(json!([1, 2, 3])).is_err());
        assert!(PatientRecord::try_from(json!("text")).is_err());
    }
}
