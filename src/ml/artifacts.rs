//! One-time artifact loading.
//!
//! The scaler and classifier are read once at startup and handed out as an
//! immutable `Arc<Artifacts>`; nothing mutates them afterwards.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ArtifactsConfig;
use crate::domain::{CANONICAL_ORDER, FEATURE_COUNT};
use crate::error::{CardioError, Result};
use crate::ml::classifier::Classifier;
use crate::ml::dense::DenseNetwork;
use crate::ml::scaler::StandardScaler;

/// Where the two artifacts live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub model: PathBuf,
}

impl ArtifactPaths {
    pub fn new(scaler: impl Into<PathBuf>, model: impl Into<PathBuf>) -> Self {
        Self {
            scaler: scaler.into(),
            model: model.into(),
        }
    }
}

impl From<&ArtifactsConfig> for ArtifactPaths {
    fn from(config: &ArtifactsConfig) -> Self {
        Self::new(&config.scaler_path, &config.model_path)
    }
}

/// Loaded scaler + classifier pair.
#[derive(Debug)]
pub struct Artifacts {
    scaler: StandardScaler,
    classifier: Box<dyn Classifier>,
}

impl Artifacts {
    /// Pair an already-built scaler and classifier, checking they fit the
    /// eleven-column feature layout.
    pub fn new(scaler: StandardScaler, classifier: Box<dyn Classifier>) -> Result<Self> {
        if scaler.n_features() != FEATURE_COUNT {
            return Err(CardioError::ArtifactMismatch(format!(
                "scaler expects {} features, form produces {FEATURE_COUNT}",
                scaler.n_features()
            )));
        }
        if classifier.input_dim() != scaler.n_features() {
            return Err(CardioError::ArtifactMismatch(format!(
                "classifier input_dim {} != scaler features {}",
                classifier.input_dim(),
                scaler.n_features()
            )));
        }
        if let Some(names) = &scaler.feature_names {
            let expected: Vec<&str> = CANONICAL_ORDER.iter().map(|c| c.name()).collect();
            if names.iter().map(String::as_str).ne(expected.iter().copied()) {
                return Err(CardioError::ArtifactMismatch(format!(
                    "scaler was fitted on columns {names:?}, expected {expected:?}"
                )));
            }
        }
        Ok(Self { scaler, classifier })
    }

    /// Read both artifacts from disk.
    ///
    /// Both paths are checked before either file is parsed, so a missing file
    /// never leaves a half-loaded pair behind.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        for path in [&paths.scaler, &paths.model] {
            if !path.is_file() {
                return Err(CardioError::ArtifactMissing { path: path.clone() });
            }
        }

        let scaler =
            StandardScaler::from_file(&paths.scaler).map_err(|e| load_error(&paths.scaler, e))?;
        debug!(
            path = %paths.scaler.display(),
            features = scaler.n_features(),
            "scaler loaded"
        );

        let classifier =
            load_classifier(&paths.model).map_err(|e| load_error(&paths.model, e))?;
        debug!(
            path = %paths.model.display(),
            model = %classifier.describe(),
            "classifier loaded"
        );

        let artifacts = Self::new(scaler, classifier)?;
        info!(
            scaler = %paths.scaler.display(),
            model = %paths.model.display(),
            "artifacts loaded"
        );
        Ok(artifacts)
    }

    /// Load once and wrap for sharing across sessions.
    pub fn load_shared(paths: &ArtifactPaths) -> Result<Arc<Self>> {
        Self::load(paths).map(Arc::new)
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }
}

fn load_error(path: &Path, err: CardioError) -> CardioError {
    CardioError::ArtifactLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn load_classifier(path: &Path) -> Result<Box<dyn Classifier>> {
    let is_onnx = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("onnx"))
        .unwrap_or(false);

    if is_onnx {
        return load_onnx(path);
    }

    let network = DenseNetwork::from_file(path)?;
    if network.output_dim() != 1 {
        return Err(CardioError::Validation(format!(
            "classifier must have a single output, got {}",
            network.output_dim()
        )));
    }
    if !network.has_sigmoid_head() {
        return Err(CardioError::Validation(
            "classifier output layer must use a sigmoid activation".to_string(),
        ));
    }
    Ok(Box::new(network))
}

#[cfg(feature = "onnx")]
fn load_onnx(path: &Path) -> Result<Box<dyn Classifier>> {
    let model = crate::ml::onnx::OnnxModel::load_for_vec_input(path, FEATURE_COUNT)?;
    Ok(Box::new(model))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(_path: &Path) -> Result<Box<dyn Classifier>> {
    Err(CardioError::Validation(
        "ONNX models need the `onnx` cargo feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::dense::{Activation, DenseLayer};

    fn scaler(n: usize) -> StandardScaler {
        StandardScaler {
            feature_names: None,
            mean: vec![0.0; n],
            scale: vec![1.0; n],
        }
    }

    fn network(input_dim: usize) -> DenseNetwork {
        DenseNetwork {
            input_dim,
            layers: vec![DenseLayer {
                weights: vec![vec![0.1; input_dim]],
                bias: vec![0.0],
                activation: Activation::Sigmoid,
            }],
            metadata: serde_json::Value::Null,
        }
    }

    #[test]
    fn new_checks_feature_layout() {
        assert!(Artifacts::new(scaler(11), Box::new(network(11))).is_ok());

        let err = Artifacts::new(scaler(10), Box::new(network(10))).unwrap_err();
        assert!(matches!(err, CardioError::ArtifactMismatch(_)));

        let err = Artifacts::new(scaler(11), Box::new(network(9))).unwrap_err();
        assert!(matches!(err, CardioError::ArtifactMismatch(_)));
    }

    #[test]
    fn new_checks_fitted_column_names() {
        let mut s = scaler(11);
        let mut names: Vec<String> = CANONICAL_ORDER.iter().map(|c| c.name().to_string()).collect();
        s.feature_names = Some(names.clone());
        assert!(Artifacts::new(s.clone(), Box::new(network(11))).is_ok());

        names.swap(0, 5);
        s.feature_names = Some(names);
        let err = Artifacts::new(s, Box::new(network(11))).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn load_reports_missing_file_before_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let scaler_path = dir.path().join("scaler.json");
        std::fs::write(&scaler_path, serde_json::to_string(&scaler(11)).unwrap()).unwrap();

        let paths = ArtifactPaths::new(&scaler_path, dir.path().join("missing.json"));
        let err = Artifacts::load(&paths).unwrap_err();
        match err {
            CardioError::ArtifactMissing { path } => assert!(path.ends_with("missing.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_rejects_non_sigmoid_head() {
        let dir = tempfile::tempdir().unwrap();
        let scaler_path = dir.path().join("scaler.json");
        let model_path = dir.path().join("model.json");
        let mut net = network(11);
        net.layers[0].activation = Activation::Linear;
        std::fs::write(&scaler_path, serde_json::to_string(&scaler(11)).unwrap()).unwrap();
        std::fs::write(&model_path, serde_json::to_string(&net).unwrap()).unwrap();

        let err = Artifacts::load(&ArtifactPaths::new(scaler_path, model_path)).unwrap_err();
        assert!(matches!(err, CardioError::ArtifactLoad { .. }));
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn onnx_path_without_feature_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let scaler_path = dir.path().join("scaler.json");
        let model_path = dir.path().join("model.onnx");
        std::fs::write(&scaler_path, serde_json::to_string(&scaler(11)).unwrap()).unwrap();
        std::fs::write(&model_path, b"not really onnx").unwrap();

        let err = Artifacts::load(&ArtifactPaths::new(scaler_path, model_path)).unwrap_err();
        assert!(err.to_string().contains("onnx"));
    }
}
