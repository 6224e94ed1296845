//! Result rendering: probability -> risk label, advisory text and input echo.
//!
//! Purely presentational. Shared by the terminal form, the web page and the
//! one-shot `predict` command.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::domain::{PredictionRequest, CANONICAL_ORDER};

/// Probabilities at or above this are reported as high risk.
pub const RISK_THRESHOLD: f64 = 0.5;

pub const APP_TITLE: &str = "Prediksi Risiko Penyakit Jantung";

pub const APP_INTRO: &str = "Aplikasi ini menggunakan model Neural Network untuk memprediksi \
kemungkinan adanya penyakit jantung berdasarkan data klinis pasien.";

pub const DISCLAIMER: &str = "Disclaimer: Hasil prediksi ini bukan diagnosis medis. Selalu \
konsultasikan dengan dokter atau tenaga medis profesional untuk evaluasi kesehatan yang akurat.";

pub const PROBABILITY_CAPTION: &str = "Probabilitas Penyakit Jantung";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn classify(probability: f64) -> Self {
        if probability >= RISK_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "Risiko Tinggi",
            RiskLevel::Low => "Risiko Rendah",
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Berdasarkan data yang dimasukkan, pasien diprediksi memiliki risiko tinggi \
                 terkena penyakit jantung. Disarankan untuk konsultasi lebih lanjut dengan \
                 profesional medis."
            }
            RiskLevel::Low => {
                "Berdasarkan data yang dimasukkan, pasien diprediksi memiliki risiko rendah \
                 terkena penyakit jantung. Tetap jaga pola hidup sehat."
            }
        }
    }

    pub fn is_high(self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

/// One row of the submitted-values echo.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct InputRow {
    #[tabled(rename = "Kolom")]
    pub column: String,
    #[tabled(rename = "Data")]
    pub label: String,
    #[tabled(rename = "Nilai")]
    pub value: String,
    /// Value fed to the scaler (training code for discrete columns)
    #[tabled(rename = "Kode")]
    pub code: String,
}

impl InputRow {
    pub fn rows_for(request: &PredictionRequest) -> Vec<Self> {
        CANONICAL_ORDER
            .iter()
            .map(|column| InputRow {
                column: column.name().to_string(),
                label: column.label().to_string(),
                value: request.display_value(*column),
                code: request.encoded_value(*column),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub probability: f64,
    /// Probability as shown to the user, e.g. `73.41%`
    pub percent: String,
    pub level: RiskLevel,
    pub label: &'static str,
    pub advisory: &'static str,
    pub inputs: Vec<InputRow>,
    pub assessed_at: DateTime<Utc>,
}

impl RiskAssessment {
    pub fn new(probability: f64, request: &PredictionRequest) -> Self {
        let level = RiskLevel::classify(probability);
        Self {
            probability,
            percent: format_percent(probability),
            level,
            label: level.label(),
            advisory: level.advisory(),
            inputs: InputRow::rows_for(request),
            assessed_at: Utc::now(),
        }
    }

    /// Plain-text report for the terminal.
    pub fn render_text(&self) -> String {
        let table = Table::new(&self.inputs).to_string();
        format!(
            "{APP_TITLE}\n\n{PROBABILITY_CAPTION}: {}\n{}\n{}\n\n{table}\n\n{DISCLAIMER}",
            self.percent, self.label, self.advisory
        )
    }
}

pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert_eq!(RiskLevel::classify(0.5), RiskLevel::High);
        assert_eq!(RiskLevel::classify(0.4999), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(1.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Low);
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(0.7341), "73.41%");
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn assessment_echoes_inputs_in_column_order() {
        let request = PredictionRequest::default();
        let assessment = RiskAssessment::new(0.62, &request);

        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.label, "Risiko Tinggi");
        assert_eq!(assessment.inputs.len(), 11);
        assert_eq!(assessment.inputs[0].column, "age");
        assert_eq!(assessment.inputs[0].value, "50");
        assert_eq!(assessment.inputs[10].column, "slope");
        assert_eq!(assessment.inputs[10].value, "Flat (Datar)");
    }

    #[test]
    fn echo_carries_training_codes() {
        let assessment = RiskAssessment::new(0.3, &PredictionRequest::default());
        let code = |name: &str| {
            assessment
                .inputs
                .iter()
                .find(|row| row.column == name)
                .map(|row| row.code.clone())
                .unwrap()
        };
        assert_eq!(code("sex"), "1");
        assert_eq!(code("cp"), "4");
        assert_eq!(code("fbs"), "0");
        assert_eq!(code("slope"), "2");
        assert_eq!(code("age"), "50");
        assert!(assessment.render_text().contains("Kode"));
    }

    #[test]
    fn render_text_contains_table_and_message() {
        let assessment = RiskAssessment::new(0.1234, &PredictionRequest::default());
        let text = assessment.render_text();
        assert!(text.contains("12.34%"));
        assert!(text.contains("Risiko Rendah"));
        assert!(text.contains("Tetap jaga pola hidup sehat"));
        assert!(text.contains("Kolesterol Serum (mg/dl)"));
        assert!(text.contains("Kolom"));
    }

    #[test]
    fn serializes_level_and_inputs() {
        let assessment = RiskAssessment::new(0.9, &PredictionRequest::default());
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["level"], "high");
        assert_eq!(json["percent"], "90.00%");
        assert_eq!(json["inputs"][5]["value"], "Pria");
    }
}
