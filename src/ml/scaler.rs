//! Fitted standard scaler (z-score) exported from training.
//!
//! `transform(x)[i] = (x[i] - mean[i]) / scale[i]`, with statistics fixed at
//! fit time. The transform is stateless and deterministic.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CardioError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Column names seen at fit time, if the exporter recorded them.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub mean: Vec<f64>,
    /// Per-column standard deviation (`scale_` in scikit-learn).
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let scaler: Self = serde_json::from_str(&content)?;
        scaler.validate().map_err(CardioError::Validation)?;
        Ok(scaler)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.mean.is_empty() {
            return Err("mean must not be empty".to_string());
        }
        if self.mean.len() != self.scale.len() {
            return Err(format!(
                "mean length {} != scale length {}",
                self.mean.len(),
                self.scale.len()
            ));
        }
        if self.mean.iter().any(|v| !v.is_finite()) {
            return Err("mean must be finite".to_string());
        }
        if self.scale.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err("scale must be finite and > 0".to_string());
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.mean.len() {
                return Err(format!(
                    "feature_names length {} != mean length {}",
                    names.len(),
                    self.mean.len()
                ));
            }
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.n_features() {
            return Err(CardioError::Prediction(format!(
                "scaler input dim mismatch: got {}, expected {}",
                input.len(),
                self.n_features()
            )));
        }
        if let Some(i) = input.iter().position(|v| !v.is_finite()) {
            return Err(CardioError::Prediction(format!(
                "scaler input[{i}] is not finite"
            )));
        }

        Ok(input
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            feature_names: Some(vec!["a".into(), "b".into()]),
            mean: vec![10.0, 0.5],
            scale: vec![2.0, 0.5],
        }
    }

    #[test]
    fn transform_standardizes() {
        let s = scaler();
        s.validate().unwrap();
        let out = s.transform(&[14.0, 0.0]).unwrap();
        assert_eq!(out, vec![2.0, -1.0]);
    }

    #[test]
    fn transform_rejects_shape_mismatch() {
        let err = scaler().transform(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, CardioError::Prediction(_)));
        assert!(scaler().transform(&[f64::NAN, 0.0]).is_err());
    }

    #[test]
    fn validates_statistics() {
        let mut bad = scaler();
        bad.scale[1] = 0.0;
        assert!(bad.validate().is_err());

        let mut bad = scaler();
        bad.mean.pop();
        assert!(bad.validate().is_err());

        let mut bad = scaler();
        bad.feature_names = Some(vec!["a".into()]);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn parses_exported_json() {
        let s: StandardScaler =
            serde_json::from_str(r#"{"mean": [1.0], "scale": [3.0]}"#).unwrap();
        assert!(s.feature_names.is_none());
        assert_eq!(s.transform(&[4.0]).unwrap(), vec![1.0]);
    }
}
