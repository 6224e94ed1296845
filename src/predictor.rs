//! Request -> probability.
//!
//! Reorders the record into the fitted column order, applies the scaler and
//! runs the classifier. Failures here are transient: the caller reports them
//! and the session stays open for the next submission.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{FeatureColumn, PredictionRequest, CANONICAL_ORDER};
use crate::error::{CardioError, Result};
use crate::ml::classifier::ensure_probability;
use crate::ml::Artifacts;

/// Output of one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub probability: f64,
    /// Raw values in column order, before scaling
    pub features: Vec<f64>,
    /// Values after the scaler transform, as fed to the classifier
    pub scaled: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Predictor {
    artifacts: Arc<Artifacts>,
    order: Vec<FeatureColumn>,
}

impl Predictor {
    /// Predictor using the canonical training column order.
    pub fn new(artifacts: Arc<Artifacts>) -> Self {
        Self::with_order(artifacts, CANONICAL_ORDER.to_vec())
    }

    pub fn with_order(artifacts: Arc<Artifacts>, order: Vec<FeatureColumn>) -> Self {
        Self { artifacts, order }
    }

    pub fn order(&self) -> &[FeatureColumn] {
        &self.order
    }

    pub fn artifacts(&self) -> &Arc<Artifacts> {
        &self.artifacts
    }

    /// Ordered + scaled feature vector for `request`.
    pub fn transform(&self, request: &PredictionRequest) -> Result<Vec<f64>> {
        let features = request.feature_vector(&self.order);
        self.artifacts.scaler().transform(&features)
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction> {
        let features = request.feature_vector(&self.order);
        let scaled = self.artifacts.scaler().transform(&features)?;

        let raw = self
            .artifacts
            .classifier()
            .predict_proba(&scaled)
            .map_err(|e| match e {
                CardioError::Prediction(_) => e,
                other => CardioError::Prediction(other.to_string()),
            })?;
        let probability = ensure_probability(raw)?;

        debug!(probability, ?features, "prediction computed");

        Ok(Prediction {
            probability,
            features,
            scaled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChestPain, RequestBuilder, Sex};
    use crate::ml::{Activation, DenseLayer, DenseNetwork, StandardScaler};

    fn artifacts() -> Arc<Artifacts> {
        let scaler = StandardScaler {
            feature_names: None,
            mean: vec![54.0, 131.0, 246.0, 149.0, 1.0, 0.7, 3.2, 0.15, 0.5, 0.3, 1.6],
            scale: vec![9.0, 17.5, 51.0, 23.0, 1.2, 0.46, 0.95, 0.36, 0.5, 0.47, 0.6],
        };
        let network = DenseNetwork {
            input_dim: 11,
            layers: vec![DenseLayer {
                weights: vec![vec![0.3, 0.2, 0.1, -0.4, 0.5, 0.3, 0.6, 0.1, 0.1, 0.4, 0.3]],
                bias: vec![-0.1],
                activation: Activation::Sigmoid,
            }],
            metadata: serde_json::Value::Null,
        };
        Arc::new(Artifacts::new(scaler, Box::new(network)).unwrap())
    }

    #[test]
    fn probability_is_in_unit_interval() {
        let predictor = Predictor::new(artifacts());
        let mut request = PredictionRequest::default();
        for age in [1.0, 40.0, 120.0] {
            for oldpeak in [0.0, 5.0, 10.0] {
                request.age = age;
                request.oldpeak = oldpeak;
                let p = predictor.predict(&request).unwrap().probability;
                assert!((0.0..=1.0).contains(&p), "p={p}");
            }
        }
    }

    #[test]
    fn transform_uses_canonical_order() {
        let predictor = Predictor::new(artifacts());
        let request = PredictionRequest::default();
        let scaled = predictor.transform(&request).unwrap();
        // age: (50 - 54) / 9
        assert!((scaled[0] - (-4.0 / 9.0)).abs() < 1e-12);
        // cp (Asymptomatic = 4): (4 - 3.2) / 0.95
        assert!((scaled[6] - (0.8 / 0.95)).abs() < 1e-12);
    }

    #[test]
    fn same_values_different_construction_order_same_vector() {
        let predictor = Predictor::new(artifacts());
        let a = RequestBuilder::new()
            .set(FeatureColumn::Sex, "Wanita")
            .and_then(|b| b.set(FeatureColumn::Age, "63"))
            .and_then(|b| b.set(FeatureColumn::Cp, "Typical Angina (Tipe 1)"))
            .unwrap()
            .build();
        let b = RequestBuilder::new()
            .set(FeatureColumn::Cp, "1")
            .and_then(|b| b.set(FeatureColumn::Age, "63"))
            .and_then(|b| b.set(FeatureColumn::Sex, "0"))
            .unwrap()
            .build();

        assert_eq!(a.sex, Sex::Female);
        assert_eq!(b.cp, ChestPain::TypicalAngina);
        assert_eq!(predictor.transform(&a).unwrap(), predictor.transform(&b).unwrap());
    }

    #[test]
    fn wrong_order_length_is_a_transient_error() {
        let predictor = Predictor::with_order(artifacts(), CANONICAL_ORDER[..10].to_vec());
        let err = predictor.predict(&PredictionRequest::default()).unwrap_err();
        assert!(matches!(err, CardioError::Prediction(_)));
        assert!(!err.is_fatal());
    }
}
