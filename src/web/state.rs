use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::predictor::Predictor;

/// Shared application state for web handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded artifacts behind the predictor; read-only after startup
    pub predictor: Arc<Predictor>,
    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor: Arc::new(predictor),
            start_time: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
