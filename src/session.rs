//! Submission flow for one interactive session.
//!
//! `AwaitingSubmission -> (submit) -> ShowingResult -> (submit) -> ShowingResult`.
//! A failed submission reports the error and drops back to
//! `AwaitingSubmission`; the user resubmits, nothing is retried.

use tracing::{info, warn};

use crate::domain::PredictionRequest;
use crate::error::Result;
use crate::predictor::Predictor;
use crate::report::RiskAssessment;

#[derive(Debug, Clone)]
pub enum SessionState {
    AwaitingSubmission,
    ShowingResult(RiskAssessment),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::AwaitingSubmission => "awaiting_submission",
            SessionState::ShowingResult(_) => "showing_result",
        }
    }
}

/// Validate, predict and render one request.
pub fn assess(predictor: &Predictor, request: &PredictionRequest) -> Result<RiskAssessment> {
    request.validate()?;
    let prediction = predictor.predict(request)?;
    let assessment = RiskAssessment::new(prediction.probability, request);
    info!(
        probability = prediction.probability,
        level = ?assessment.level,
        "risk assessed"
    );
    Ok(assessment)
}

#[derive(Debug)]
pub struct Session {
    predictor: Predictor,
    state: SessionState,
    last_error: Option<String>,
    submissions: u64,
}

impl Session {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor,
            state: SessionState::AwaitingSubmission,
            last_error: None,
            submissions: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn result(&self) -> Option<&RiskAssessment> {
        match &self.state {
            SessionState::ShowingResult(assessment) => Some(assessment),
            SessionState::AwaitingSubmission => None,
        }
    }

    /// Handle one explicit submission. The request is consumed either way.
    pub fn submit(&mut self, request: PredictionRequest) -> Option<&RiskAssessment> {
        self.submissions += 1;
        match assess(&self.predictor, &request) {
            Ok(assessment) => {
                self.last_error = None;
                self.state = SessionState::ShowingResult(assessment);
            }
            Err(e) => {
                warn!(error = %e, "prediction failed");
                self.last_error = Some(format!("Terjadi kesalahan saat prediksi: {e}"));
                self.state = SessionState::AwaitingSubmission;
            }
        }
        self.result()
    }
}
