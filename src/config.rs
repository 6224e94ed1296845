use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Fitted standard scaler exported as JSON
    pub scaler_path: PathBuf,
    /// Trained classifier (dense MLP JSON, or `.onnx` with the `onnx` feature)
    pub model_path: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from(DEFAULT_SCALER_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

pub const DEFAULT_SCALER_PATH: &str = "artifacts/scaler.json";
pub const DEFAULT_MODEL_PATH: &str = "artifacts/mlp_model.json";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the web form (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,
    /// Port for the web form (default: 8501)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("invalid server address {}:{}: {e}", self.host, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for the log file written while the terminal form is open
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: default_log_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("artifacts.scaler_path", DEFAULT_SCALER_PATH)?
            .set_default("artifacts.model_path", DEFAULT_MODEL_PATH)?
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("logging.dir", "logs")?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("CARDIO_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (CARDIO_ARTIFACTS__MODEL_PATH, etc.)
            .add_source(
                Environment::with_prefix("CARDIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Configuration used when no config directory is present
    pub fn default_config() -> Self {
        Self {
            artifacts: ArtifactsConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.artifacts.scaler_path.as_os_str().is_empty() {
            errors.push("artifacts.scaler_path must not be empty".to_string());
        }

        if self.artifacts.model_path.as_os_str().is_empty() {
            errors.push("artifacts.model_path must not be empty".to_string());
        }

        if self.server.port == 0 {
            errors.push("server.port must be > 0".to_string());
        }

        if let Err(e) = self.server.socket_addr() {
            errors.push(e);
        }

        if !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            errors.push(format!("unknown logging.level '{}'", self.logging.level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
