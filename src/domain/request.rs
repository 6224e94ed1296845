use serde::{Deserialize, Serialize};

use crate::domain::features::{FeatureColumn, FeatureKind, CANONICAL_ORDER};
use crate::domain::labels::{
    ChestPain, CodedChoice, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope,
};
use crate::error::{CardioError, Result};

/// One patient record as submitted from the form.
///
/// Built fresh per submission and consumed once by the predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: f64,
    pub trestbps: f64,
    pub chol: f64,
    pub thalach: f64,
    pub oldpeak: f64,
    pub sex: Sex,
    pub cp: ChestPain,
    pub fbs: FastingBloodSugar,
    pub restecg: RestingEcg,
    pub exang: ExerciseAngina,
    pub slope: StSlope,
}

impl Default for PredictionRequest {
    /// The form's initial state.
    fn default() -> Self {
        let numeric = |c: FeatureColumn| c.numeric_spec().map(|s| s.default).unwrap_or_default();
        Self {
            age: numeric(FeatureColumn::Age),
            trestbps: numeric(FeatureColumn::Trestbps),
            chol: numeric(FeatureColumn::Chol),
            thalach: numeric(FeatureColumn::Thalach),
            oldpeak: numeric(FeatureColumn::Oldpeak),
            sex: Sex::default(),
            cp: ChestPain::default(),
            fbs: FastingBloodSugar::default(),
            restecg: RestingEcg::default(),
            exang: ExerciseAngina::default(),
            slope: StSlope::default(),
        }
    }
}

impl PredictionRequest {
    /// Numeric value fed to the scaler for `column` (codes for discrete columns).
    pub fn value(&self, column: FeatureColumn) -> f64 {
        match column {
            FeatureColumn::Age => self.age,
            FeatureColumn::Trestbps => self.trestbps,
            FeatureColumn::Chol => self.chol,
            FeatureColumn::Thalach => self.thalach,
            FeatureColumn::Oldpeak => self.oldpeak,
            FeatureColumn::Sex => f64::from(self.sex.code()),
            FeatureColumn::Cp => f64::from(self.cp.code()),
            FeatureColumn::Fbs => f64::from(self.fbs.code()),
            FeatureColumn::Restecg => f64::from(self.restecg.code()),
            FeatureColumn::Exang => f64::from(self.exang.code()),
            FeatureColumn::Slope => f64::from(self.slope.code()),
        }
    }

    /// Human-readable value: the number for continuous columns, the chosen
    /// label for discrete ones.
    pub fn display_value(&self, column: FeatureColumn) -> String {
        match column {
            FeatureColumn::Sex => self.sex.label().to_string(),
            FeatureColumn::Cp => self.cp.label().to_string(),
            FeatureColumn::Fbs => self.fbs.label().to_string(),
            FeatureColumn::Restecg => self.restecg.label().to_string(),
            FeatureColumn::Exang => self.exang.label().to_string(),
            FeatureColumn::Slope => self.slope.label().to_string(),
            numeric => match numeric.numeric_spec() {
                Some(spec) => spec.format(self.value(numeric)),
                None => self.value(numeric).to_string(),
            },
        }
    }

    /// Value as the scaler sees it: the number for continuous columns, the
    /// training code for discrete ones.
    pub fn encoded_value(&self, column: FeatureColumn) -> String {
        let value = self.value(column);
        match column.numeric_spec() {
            Some(spec) => spec.format(value),
            None => format!("{value:.0}"),
        }
    }

    /// Lay the record out in `order`.
    pub fn feature_vector(&self, order: &[FeatureColumn]) -> Vec<f64> {
        order.iter().map(|c| self.value(*c)).collect()
    }

    /// Categorical codes keyed by column name, in canonical order.
    pub fn codes(&self) -> Vec<(&'static str, u8)> {
        vec![
            (Sex::COLUMN, self.sex.code()),
            (ChestPain::COLUMN, self.cp.code()),
            (FastingBloodSugar::COLUMN, self.fbs.code()),
            (RestingEcg::COLUMN, self.restecg.code()),
            (ExerciseAngina::COLUMN, self.exang.code()),
            (StSlope::COLUMN, self.slope.code()),
        ]
    }

    /// Reject values a form control would not have produced.
    pub fn validate(&self) -> Result<()> {
        for column in CANONICAL_ORDER {
            if column.kind() != FeatureKind::Continuous {
                continue;
            }
            let value = self.value(column);
            if let Some(spec) = column.numeric_spec() {
                spec.check(value)
                    .map_err(|reason| CardioError::invalid_input(column.name(), reason))?;
            }
        }
        Ok(())
    }
}

/// Order-independent construction of a [`PredictionRequest`].
///
/// Fields may be set in any sequence; unset fields keep the form defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    request: PredictionRequest,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column from raw text: a number for continuous columns, a label
    /// or code for discrete ones. Out-of-range numbers are rejected.
    pub fn set(mut self, column: FeatureColumn, raw: &str) -> Result<Self> {
        if column.kind() == FeatureKind::Continuous {
            let value: f64 = raw.trim().parse().map_err(|_| {
                CardioError::invalid_input(column.name(), format!("'{raw}' is not a number"))
            })?;
            return self.set_numeric(column, value);
        }

        let r = &mut self.request;
        match column {
            FeatureColumn::Sex => r.sex = Sex::parse(raw)?,
            FeatureColumn::Cp => r.cp = ChestPain::parse(raw)?,
            FeatureColumn::Fbs => r.fbs = FastingBloodSugar::parse(raw)?,
            FeatureColumn::Restecg => r.restecg = RestingEcg::parse(raw)?,
            FeatureColumn::Exang => r.exang = ExerciseAngina::parse(raw)?,
            FeatureColumn::Slope => r.slope = StSlope::parse(raw)?,
            _ => {}
        }
        Ok(self)
    }

    pub fn set_numeric(mut self, column: FeatureColumn, value: f64) -> Result<Self> {
        let spec = column.numeric_spec().ok_or_else(|| {
            CardioError::invalid_input(column.name(), "not a numeric column")
        })?;
        spec.check(value)
            .map_err(|reason| CardioError::invalid_input(column.name(), reason))?;
        let r = &mut self.request;
        match column {
            FeatureColumn::Age => r.age = value,
            FeatureColumn::Trestbps => r.trestbps = value,
            FeatureColumn::Chol => r.chol = value,
            FeatureColumn::Thalach => r.thalach = value,
            FeatureColumn::Oldpeak => r.oldpeak = value,
            _ => {}
        }
        Ok(self)
    }

    /// Apply `(column name, raw value)` pairs, e.g. decoded form fields.
    pub fn apply_pairs<'a, I>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, raw) in pairs {
            let column = FeatureColumn::from_name(name)
                .ok_or_else(|| CardioError::invalid_input(name, "unknown field"))?;
            self = self.set(column, raw)?;
        }
        Ok(self)
    }

    pub fn build(self) -> PredictionRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("age", "50"),
            ("trestbps", "120"),
            ("chol", "200"),
            ("thalach", "150"),
            ("oldpeak", "1.0"),
            ("sex", "Pria"),
            ("cp", "Asymptomatic (Tipe 4)"),
            ("fbs", "< 120 mg/dl (Salah)"),
            ("restecg", "Normal (0)"),
            ("exang", "Tidak"),
            ("slope", "Flat (Datar)"),
        ]
    }

    #[test]
    fn scenario_labels_resolve_to_training_codes() {
        let request = RequestBuilder::new()
            .apply_pairs(scenario_pairs())
            .unwrap()
            .build();

        assert_eq!(
            request.codes(),
            vec![
                ("sex", 1),
                ("cp", 4),
                ("fbs", 0),
                ("restecg", 0),
                ("exang", 0),
                ("slope", 2)
            ]
        );
        assert_eq!(
            request.feature_vector(&CANONICAL_ORDER),
            vec![50.0, 120.0, 200.0, 150.0, 1.0, 1.0, 4.0, 0.0, 0.0, 0.0, 2.0]
        );
    }

    #[test]
    fn construction_order_does_not_matter() {
        let forward = RequestBuilder::new()
            .apply_pairs(scenario_pairs())
            .unwrap()
            .build();
        let reversed = RequestBuilder::new()
            .apply_pairs(scenario_pairs().into_iter().rev())
            .unwrap()
            .build();

        assert_eq!(forward, reversed);
        assert_eq!(
            forward.feature_vector(&CANONICAL_ORDER),
            reversed.feature_vector(&CANONICAL_ORDER)
        );
    }

    #[test]
    fn default_matches_form_defaults() {
        let request = PredictionRequest::default();
        assert_eq!(request.age, 50.0);
        assert_eq!(request.oldpeak, 1.0);
        assert_eq!(request.sex, Sex::Male);
        assert_eq!(request.slope, StSlope::Flat);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        let err = RequestBuilder::new()
            .set(FeatureColumn::Age, "121")
            .unwrap_err();
        assert!(matches!(err, CardioError::InvalidInput { ref field, .. } if field == "age"));

        assert!(RequestBuilder::new()
            .set(FeatureColumn::Oldpeak, "abc")
            .is_err());
        assert!(RequestBuilder::new()
            .apply_pairs([("thal", "3")])
            .is_err());

        let mut request = PredictionRequest::default();
        request.chol = 50.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn fractional_integer_fields_are_rejected() {
        let err = RequestBuilder::new()
            .set(FeatureColumn::Age, "50.5")
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for age: 50.5 is not a whole number");

        let mut request = PredictionRequest::default();
        request.thalach = 150.25;
        assert!(request.validate().is_err());
        assert!(RequestBuilder::new().set(FeatureColumn::Oldpeak, "2.3").is_ok());
    }

    #[test]
    fn encoded_value_shows_training_codes() {
        let request = PredictionRequest::default();
        assert_eq!(request.encoded_value(FeatureColumn::Sex), "1");
        assert_eq!(request.encoded_value(FeatureColumn::Cp), "4");
        assert_eq!(request.encoded_value(FeatureColumn::Oldpeak), "1.0");
    }

    #[test]
    fn display_value_uses_labels_and_precision() {
        let request = PredictionRequest::default();
        assert_eq!(request.display_value(FeatureColumn::Age), "50");
        assert_eq!(request.display_value(FeatureColumn::Oldpeak), "1.0");
        assert_eq!(request.display_value(FeatureColumn::Cp), "Asymptomatic (Tipe 4)");
    }

    #[test]
    fn json_accepts_labels_and_codes() {
        let json = r#"{
            "age": 61, "trestbps": 140, "chol": 260, "thalach": 120, "oldpeak": 2.5,
            "sex": 0, "cp": "Typical Angina (Tipe 1)", "fbs": 1,
            "restecg": "Hipertrofi Ventrikel Kiri (2)", "exang": "Ya", "slope": 1
        }"#;
        let request: PredictionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.sex, Sex::Female);
        assert_eq!(request.fbs, FastingBloodSugar::Elevated);
        assert_eq!(request.slope, StSlope::Upsloping);
        assert_eq!(request.value(FeatureColumn::Restecg), 2.0);
    }
}
