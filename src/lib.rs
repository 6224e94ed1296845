pub mod cli;
pub mod collector;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ml;
pub mod predictor;
pub mod report;
pub mod session;
pub mod tui;
pub mod web;

pub use collector::{request_from_fields, FormState};
pub use config::AppConfig;
pub use domain::{FeatureColumn, PredictionRequest, RequestBuilder, CANONICAL_ORDER};
pub use error::{CardioError, Result};
pub use ml::{ArtifactPaths, Artifacts, Classifier, StandardScaler};
pub use predictor::{Prediction, Predictor};
pub use report::{RiskAssessment, RiskLevel, RISK_THRESHOLD};
pub use session::{assess, Session, SessionState};
