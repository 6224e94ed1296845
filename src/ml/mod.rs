//! Inference artifacts: the fitted scaler and the trained classifier.
//!
//! Both load from plain JSON exports and run on the CPU. ONNX models are
//! available behind the `onnx` feature.

pub mod artifacts;
pub mod classifier;
pub mod dense;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod scaler;

pub use artifacts::{ArtifactPaths, Artifacts};
pub use classifier::Classifier;
pub use dense::{Activation, DenseLayer, DenseNetwork};
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
pub use scaler::StandardScaler;
