use crate::error::{CardioError, Result};
use crate::ml::dense::DenseNetwork;

/// A fitted binary classifier: scaled feature vector in, probability out.
pub trait Classifier: Send + Sync + std::fmt::Debug {
    fn input_dim(&self) -> usize;

    /// Probability of the positive class for one scaled feature vector.
    fn predict_proba(&self, features: &[f64]) -> Result<f64>;

    /// Short description for logs and the health endpoint.
    fn describe(&self) -> String;
}

impl Classifier for DenseNetwork {
    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64> {
        self.forward_scalar(features)
    }

    fn describe(&self) -> String {
        let widths: Vec<String> = std::iter::once(self.input_dim)
            .chain(self.layers.iter().map(|l| l.bias.len()))
            .map(|w| w.to_string())
            .collect();
        format!("dense mlp {}", widths.join("-"))
    }
}

#[cfg(feature = "onnx")]
impl Classifier for crate::ml::onnx::OnnxModel {
    fn input_dim(&self) -> usize {
        crate::ml::onnx::OnnxModel::input_dim(self)
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64> {
        let input: Vec<f32> = features.iter().map(|v| *v as f32).collect();
        let out = self.predict(&input)?;
        out.first()
            .map(|p| f64::from(*p))
            .ok_or_else(|| CardioError::Prediction("onnx produced an empty output".to_string()))
    }

    fn describe(&self) -> String {
        format!("onnx model ({} inputs)", Classifier::input_dim(self))
    }
}

/// Reject classifier outputs that are not a probability.
pub fn ensure_probability(p: f64) -> Result<f64> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(CardioError::Prediction(format!(
            "classifier returned {p}, expected a probability in [0, 1]"
        )))
    }
}
