//! Feature columns and the canonical order the artifacts were fitted with.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureColumn {
    Age,
    Trestbps,
    Chol,
    Thalach,
    Oldpeak,
    Sex,
    Cp,
    Fbs,
    Restecg,
    Exang,
    Slope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Continuous,
    Discrete,
}

/// Column order used when the scaler and classifier were fitted.
///
/// Numerical columns first, then categorical codes. This is an external
/// contract of the artifacts and cannot be derived from the data.
pub const CANONICAL_ORDER: [FeatureColumn; 11] = [
    FeatureColumn::Age,
    FeatureColumn::Trestbps,
    FeatureColumn::Chol,
    FeatureColumn::Thalach,
    FeatureColumn::Oldpeak,
    FeatureColumn::Sex,
    FeatureColumn::Cp,
    FeatureColumn::Fbs,
    FeatureColumn::Restecg,
    FeatureColumn::Exang,
    FeatureColumn::Slope,
];

pub const FEATURE_COUNT: usize = CANONICAL_ORDER.len();

impl FeatureColumn {
    /// Column name as it appears in the training data.
    pub fn name(self) -> &'static str {
        match self {
            FeatureColumn::Age => "age",
            FeatureColumn::Trestbps => "trestbps",
            FeatureColumn::Chol => "chol",
            FeatureColumn::Thalach => "thalach",
            FeatureColumn::Oldpeak => "oldpeak",
            FeatureColumn::Sex => "sex",
            FeatureColumn::Cp => "cp",
            FeatureColumn::Fbs => "fbs",
            FeatureColumn::Restecg => "restecg",
            FeatureColumn::Exang => "exang",
            FeatureColumn::Slope => "slope",
        }
    }

    /// Form label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            FeatureColumn::Age => "Usia (tahun)",
            FeatureColumn::Trestbps => "Tekanan Darah Istirahat (mm Hg)",
            FeatureColumn::Chol => "Kolesterol Serum (mg/dl)",
            FeatureColumn::Thalach => "Detak Jantung Maksimum (denyut/menit)",
            FeatureColumn::Oldpeak => "ST Depression akibat Latihan",
            FeatureColumn::Sex => "Jenis Kelamin",
            FeatureColumn::Cp => "Tipe Nyeri Dada",
            FeatureColumn::Fbs => "Gula Darah Puasa > 120 mg/dl?",
            FeatureColumn::Restecg => "Hasil EKG Istirahat",
            FeatureColumn::Exang => "Angina Akibat Latihan?",
            FeatureColumn::Slope => "Slope Puncak Latihan ST",
        }
    }

    pub fn kind(self) -> FeatureKind {
        match self {
            FeatureColumn::Age
            | FeatureColumn::Trestbps
            | FeatureColumn::Chol
            | FeatureColumn::Thalach
            | FeatureColumn::Oldpeak => FeatureKind::Continuous,
            _ => FeatureKind::Discrete,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        CANONICAL_ORDER.iter().copied().find(|c| c.name() == name)
    }

    /// Range control for continuous columns.
    pub fn numeric_spec(self) -> Option<&'static NumericSpec> {
        NUMERIC_FIELDS.iter().find(|spec| spec.column == self)
    }
}

impl std::fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bounds, default and step of a numeric form control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSpec {
    pub column: FeatureColumn,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Digits shown after the decimal point
    pub precision: usize,
}

impl NumericSpec {
    /// True when the control could have produced `value`: finite, within
    /// bounds, and whole for integer controls.
    pub fn contains(&self, value: f64) -> bool {
        self.check(value).is_ok()
    }

    /// Reason `value` is not acceptable for this control.
    pub fn check(&self, value: f64) -> std::result::Result<(), String> {
        if !value.is_finite() || value < self.min || value > self.max {
            return Err(format!(
                "{value} is outside {}..={}",
                self.format(self.min),
                self.format(self.max)
            ));
        }
        if self.precision == 0 && value.fract() != 0.0 {
            return Err(format!("{value} is not a whole number"));
        }
        Ok(())
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Snap to the step grid so repeated float increments don't drift.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

pub const NUMERIC_FIELDS: [NumericSpec; 5] = [
    NumericSpec {
        column: FeatureColumn::Age,
        min: 1.0,
        max: 120.0,
        default: 50.0,
        step: 1.0,
        precision: 0,
    },
    NumericSpec {
        column: FeatureColumn::Trestbps,
        min: 50.0,
        max: 250.0,
        default: 120.0,
        step: 1.0,
        precision: 0,
    },
    NumericSpec {
        column: FeatureColumn::Chol,
        min: 100.0,
        max: 600.0,
        default: 200.0,
        step: 1.0,
        precision: 0,
    },
    NumericSpec {
        column: FeatureColumn::Thalach,
        min: 50.0,
        max: 250.0,
        default: 150.0,
        step: 1.0,
        precision: 0,
    },
    NumericSpec {
        column: FeatureColumn::Oldpeak,
        min: 0.0,
        max: 10.0,
        default: 1.0,
        step: 0.1,
        precision: 1,
    },
];
