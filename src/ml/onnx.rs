//! ONNX classifier (pure Rust via `tract-onnx`).
//!
//! Loads a classifier exported to ONNX (for example with `tf2onnx`).

use std::path::Path;

use crate::error::{CardioError, Result};

use tract_onnx::prelude::*;

#[derive(Clone)]
pub struct OnnxModel {
    plan: TypedRunnableModel<TypedModel>,
    input_dim: usize,
}

impl std::fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxModel")
            .field("input_dim", &self.input_dim)
            .finish()
    }
}

impl OnnxModel {
    /// Load an ONNX model and specialize it to a fixed `[1, input_dim]` f32 input.
    pub fn load_for_vec_input<P: AsRef<Path>>(path: P, input_dim: usize) -> Result<Self> {
        if input_dim == 0 {
            return Err(CardioError::Validation("input_dim must be > 0".to_string()));
        }

        let model = tract_onnx::onnx()
            .model_for_path(path.as_ref())
            .map_err(|e| CardioError::Internal(format!("onnx load failed: {e}")))?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, input_dim)),
            )
            .map_err(|e| CardioError::Internal(format!("onnx input fact failed: {e}")))?;

        let plan = model
            .into_optimized()
            .map_err(|e| CardioError::Internal(format!("onnx optimize failed: {e}")))?
            .into_runnable()
            .map_err(|e| CardioError::Internal(format!("onnx runnable failed: {e}")))?;

        let loaded = Self { plan, input_dim };

        // A dry run catches models whose head is not a single probability.
        let out = loaded.predict(&vec![0.0; input_dim])?;
        if out.len() != 1 {
            return Err(CardioError::Validation(format!(
                "onnx model must produce 1 output, got {}",
                out.len()
            )));
        }

        Ok(loaded)
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Run inference on a single feature vector.
    pub fn predict(&self, input: &[f32]) -> Result<Vec<f32>> {
        if input.len() != self.input_dim {
            return Err(CardioError::Prediction(format!(
                "onnx input dim mismatch: got {}, expected {}",
                input.len(),
                self.input_dim
            )));
        }

        let tensor = tract_ndarray::ArrayD::<f32>::from_shape_vec(
            tract_ndarray::IxDyn(&[1, self.input_dim]),
            input.to_vec(),
        )
        .map_err(|e| CardioError::Prediction(format!("onnx input reshape failed: {e}")))?
        .into_tvalue();

        let outputs = self
            .plan
            .run(tvec!(tensor))
            .map_err(|e| CardioError::Prediction(format!("onnx run failed: {e}")))?;
        if outputs.is_empty() {
            return Err(CardioError::Prediction("onnx produced no outputs".to_string()));
        }

        let arr = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| CardioError::Prediction(format!("onnx output decode failed: {e}")))?;

        Ok(arr.iter().copied().collect())
    }
}
