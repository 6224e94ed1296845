use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the risk form
#[derive(Error, Debug)]
pub enum CardioError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Artifact errors (fatal at startup)
    #[error("Artifact not found: {}", .path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("Failed to load artifact {}: {reason}", .path.display())]
    ArtifactLoad { path: PathBuf, reason: String },

    #[error("Artifacts do not fit together: {0}")]
    ArtifactMismatch(String),

    // Input errors
    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    // Prediction errors (transient)
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CardioError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Configuration and artifact failures halt the process; everything else
    /// is reported inline and the session keeps running.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CardioError::Config(_)
                | CardioError::InvalidConfig(_)
                | CardioError::ArtifactMissing { .. }
                | CardioError::ArtifactLoad { .. }
                | CardioError::ArtifactMismatch(_)
        )
    }
}

/// Result type alias for CardioError
pub type Result<T> = std::result::Result<T, CardioError>;
