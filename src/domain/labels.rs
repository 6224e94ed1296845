//! Categorical answers and their training codes.
//!
//! Every discrete field is a closed enum whose variants carry the UI label
//! shown to the user and the integer code the scaler/model were fitted on.
//! Lookups work in both directions through the same static table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::features::FeatureColumn;
use crate::error::{CardioError, Result};

/// A single-choice answer backed by a fixed label <-> code table.
pub trait CodedChoice: Copy + Eq + Sized + 'static {
    /// Feature column name this choice feeds (e.g. `"cp"`).
    const COLUMN: &'static str;

    /// All choices in the order they are offered in the form.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn code(self) -> u8;

    fn default_choice() -> Self;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Accept either the exact UI label or the numeric training code.
    fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Some(choice) = Self::from_label(raw) {
            return Ok(choice);
        }
        if let Ok(code) = raw.parse::<u8>() {
            if let Some(choice) = Self::from_code(code) {
                return Ok(choice);
            }
        }
        Err(CardioError::invalid_input(
            Self::COLUMN,
            format!(
                "unknown choice '{raw}' (expected one of: {})",
                Self::labels().join(", ")
            ),
        ))
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }

    /// Position of this choice in [`CodedChoice::ALL`].
    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

macro_rules! coded_choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $column:literal, default $default:ident {
            $($variant:ident = ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl CodedChoice for $name {
            const COLUMN: &'static str = $column;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            fn default_choice() -> Self {
                $name::$default
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CardioError;

            fn from_str(s: &str) -> Result<Self> {
                <$name as CodedChoice>::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = LabelOrCode::deserialize(deserializer)?;
                let parsed = match raw {
                    LabelOrCode::Label(label) => <$name as CodedChoice>::parse(&label),
                    LabelOrCode::Code(code) => u8::try_from(code)
                        .ok()
                        .and_then(<$name as CodedChoice>::from_code)
                        .ok_or_else(|| CardioError::invalid_input($column, format!("unknown code {code}"))),
                };
                parsed.map_err(serde::de::Error::custom)
            }
        }
    };
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelOrCode {
    Code(i64),
    Label(String),
}

coded_choice! {
    /// Jenis Kelamin
    pub enum Sex: "sex", default Male {
        Female = (0, "Wanita"),
        Male = (1, "Pria"),
    }
}

coded_choice! {
    /// Tipe Nyeri Dada
    pub enum ChestPain: "cp", default Asymptomatic {
        TypicalAngina = (1, "Typical Angina (Tipe 1)"),
        AtypicalAngina = (2, "Atypical Angina (Tipe 2)"),
        NonAnginalPain = (3, "Non-anginal Pain (Tipe 3)"),
        Asymptomatic = (4, "Asymptomatic (Tipe 4)"),
    }
}

coded_choice! {
    /// Gula Darah Puasa > 120 mg/dl?
    pub enum FastingBloodSugar: "fbs", default Normal {
        Normal = (0, "< 120 mg/dl (Salah)"),
        Elevated = (1, "> 120 mg/dl (Benar)"),
    }
}

coded_choice! {
    /// Hasil EKG Istirahat
    pub enum RestingEcg: "restecg", default Normal {
        Normal = (0, "Normal (0)"),
        StTAbnormality = (1, "Kelainan Gelombang ST-T (1)"),
        LeftVentricularHypertrophy = (2, "Hipertrofi Ventrikel Kiri (2)"),
    }
}

coded_choice! {
    /// Angina Akibat Latihan?
    pub enum ExerciseAngina: "exang", default No {
        No = (0, "Tidak"),
        Yes = (1, "Ya"),
    }
}

coded_choice! {
    /// Slope Puncak Latihan ST
    pub enum StSlope: "slope", default Flat {
        Upsloping = (1, "Upsloping (Naik)"),
        Flat = (2, "Flat (Datar)"),
    }
}

/// Option labels of a discrete column, in table order.
pub fn choice_labels(column: FeatureColumn) -> Option<Vec<&'static str>> {
    match column {
        FeatureColumn::Sex => Some(Sex::labels()),
        FeatureColumn::Cp => Some(ChestPain::labels()),
        FeatureColumn::Fbs => Some(FastingBloodSugar::labels()),
        FeatureColumn::Restecg => Some(RestingEcg::labels()),
        FeatureColumn::Exang => Some(ExerciseAngina::labels()),
        FeatureColumn::Slope => Some(StSlope::labels()),
        _ => None,
    }
}
