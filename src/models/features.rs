// src/models/features.rs

use anyhow::{anyhow, bail, Result};
use serde_json::Value as JsonValue;

/// Request keys in the order the model was trained on. Order is a contract
/// with the training pipeline and must not change.
pub const REQUIRED_FEATURES: [&str; 4] = ["LIMIT_BAL", "AGE", "BILL_AMT1", "PAY_AMT1"];

/// Builds the feature vector from a parsed request body. Every required key
/// must be present and numeric; anything else is an error.
pub fn extract_features(payload: &JsonValue) -> Result<Vec<f64>> {
    let obj = payload
        .as_object()
        .ok_or_else(|| anyhow!("Request body must be a JSON object"))?;

    let mut features = Vec::with_capacity(REQUIRED_FEATURES.len());
    for key in REQUIRED_FEATURES {
        match obj.get(key) {
            Some(value) => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| anyhow!("Field '{}' is not numeric", key))?;
                features.push(number);
            }
            None => bail!("Missing required field '{}'", key),
        }
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_in_training_order() {
        // Key order in the JSON object must not matter; output order must.
        let payload = json!({
            "PAY_AMT1": 0,
            "AGE": 24,
            "LIMIT_BAL": 20000,
            "BILL_AMT1": 3913
        });
        let features = extract_features(&payload).unwrap();
        assert_eq!(features, vec![20000.0, 24.0, 3913.0, 0.0]);
    }

    #[test]
    fn test_missing_key_is_error() {
        let payload = json!({ "AGE": 24 });
        let err = extract_features(&payload).unwrap_err();
        assert!(err.to_string().contains("LIMIT_BAL"));
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        let payload = json!({
            "LIMIT_BAL": "20000",
            "AGE": 24,
            "BILL_AMT1": 3913,
            "PAY_AMT1": 0
        });
        let err = extract_features(&payload).unwrap_err();
        assert!(err.to_string().contains("LIMIT_BAL"));
    }

    #[test]
    fn test_non_object_body_is_error() {
        assert!(extract_features(&json!([1, 2, 3, 4])).is_err());
        assert!(extract_features(&json!(null)).is_err());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let payload = json!({
            "LIMIT_BAL": 20000,
            "AGE": 24,
            "BILL_AMT1": 3913,
            "PAY_AMT1": 0,
            "SEX": 2,
            "EDUCATION": 1
        });
        assert_eq!(extract_features(&payload).unwrap().len(), 4);
    }
}
