// src/models/classifier.rs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A logistic regression classifier over the four applicant features.
/// Trained offline; this service only deserializes it from the registry and
/// runs inference. Class index 1 is the positive ("default") class by
/// training convention.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreditClassifier {
    /// One weight per input feature, in feature-vector order.
    pub weights: Vec<f64>,
    pub bias: f64,
    pub version: u32,
}

impl CreditClassifier {
    /// Returns the probability mass per class as `[p_class0, p_class1]`.
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2]> {
        if features.len() != self.weights.len() {
            bail!(
                "Model expects {} features, but got {}",
                self.weights.len(),
                features.len()
            );
        }
        let logit: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, f)| w * f)
            .sum::<f64>()
            + self.bias;
        let p1 = 1.0 / (1.0 + (-logit).exp());
        Ok([1.0 - p1, p1])
    }

    /// Returns the predicted class label, the argmax over `predict_proba`.
    pub fn predict(&self, features: &[f64]) -> Result<i32> {
        let proba = self.predict_proba(features)?;
        Ok(if proba[1] >= 0.5 { 1 } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classifier(weights: Vec<f64>, bias: f64) -> CreditClassifier {
        CreditClassifier {
            weights,
            bias,
            version: 1,
        }
    }

    #[test]
    fn test_probability_is_valid_mass() {
        let model = classifier(vec![0.002, -0.05, 0.0001, -0.0003], -1.2);
        let proba = model
            .predict_proba(&[20000.0, 24.0, 3913.0, 0.0])
            .unwrap();
        assert!(proba[0] >= 0.0 && proba[0] <= 1.0);
        assert!(proba[1] >= 0.0 && proba[1] <= 1.0);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_label_matches_threshold() {
        let high_risk = classifier(vec![0.0, 0.0, 0.0, 0.0], 3.0);
        assert_eq!(high_risk.predict(&[0.0, 0.0, 0.0, 0.0]).unwrap(), 1);

        let low_risk = classifier(vec![0.0, 0.0, 0.0, 0.0], -3.0);
        assert_eq!(low_risk.predict(&[0.0, 0.0, 0.0, 0.0]).unwrap(), 0);
    }

    #[test]
    fn test_feature_count_mismatch_is_error() {
        let model = classifier(vec![0.1, 0.2, 0.3, 0.4], 0.0);
        assert!(model.predict_proba(&[1.0, 2.0]).is_err());
        assert!(model.predict(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
    }

    #[test]
    fn test_deserializes_from_registry_parameters() {
        // Shape of the JSONB parameters column in ml_registry.ml_models.
        let parameters = json!({
            "weights": [0.01, -0.02, 0.003, -0.004],
            "bias": 0.5,
            "version": 7
        });
        let model: CreditClassifier = serde_json::from_value(parameters).unwrap();
        assert_eq!(model.version, 7);
        assert!(model.predict(&[1.0, 1.0, 1.0, 1.0]).is_ok());
    }
}
