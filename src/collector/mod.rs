//! Input collection.
//!
//! The terminal form drives a [`FormState`]; the web form and the `predict`
//! command hand over raw field values which go through
//! [`request_from_fields`]. Both end in a [`PredictionRequest`] whose
//! categorical fields already carry their training codes.

pub mod form;

pub use form::{range_notice, FormState};

use std::collections::HashMap;

use crate::domain::{PredictionRequest, RequestBuilder, CANONICAL_ORDER};
use crate::error::{CardioError, Result};

/// Build a request from submitted `name -> raw value` fields.
///
/// Every column must be present. Unknown extra fields are ignored so the
/// submit button's own name/value pair can travel with the form.
pub fn request_from_fields(fields: &HashMap<String, String>) -> Result<PredictionRequest> {
    let mut builder = RequestBuilder::new();
    for column in CANONICAL_ORDER {
        let raw = fields
            .get(column.name())
            .ok_or_else(|| CardioError::invalid_input(column.name(), "missing"))?;
        builder = builder.set(column, raw)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> HashMap<String, String> {
        [
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
            ("submit", "Prediksi Risiko"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn scenario_fields_resolve_to_codes() {
        let request = request_from_fields(&scenario()).unwrap();
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
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut fields = scenario();
        fields.remove("slope");
        let err = request_from_fields(&fields).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for slope: missing");
    }
}
