use clap::{Parser, Subcommand};

use crate::domain::{FeatureColumn, PredictionRequest, RequestBuilder};
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "cardio-risk")]
#[command(version)]
#[command(about = "Heart disease risk form backed by a fitted scaler and MLP classifier", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config directory (default.toml plus <CARDIO_ENV>.toml)
    #[arg(short, long, default_value = "config")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal form (default)
    Form,
    /// Serve the form over HTTP
    Serve {
        /// Override server.host
        #[arg(long)]
        host: Option<String>,
        /// Override server.port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Assess one patient record and print the result
    Predict(PredictArgs),
}

/// Field values for a one-shot prediction. Discrete fields take a label or
/// its code; omitted fields use the form defaults.
#[derive(clap::Args, Debug, Clone)]
pub struct PredictArgs {
    /// Usia (Tahun)
    #[arg(long, default_value = "50")]
    pub age: String,
    /// Tekanan darah istirahat (mm Hg)
    #[arg(long, default_value = "120")]
    pub trestbps: String,
    /// Kolesterol serum (mg/dl)
    #[arg(long, default_value = "200")]
    pub chol: String,
    /// Detak jantung maksimum
    #[arg(long, default_value = "150")]
    pub thalach: String,
    /// Depresi ST akibat latihan
    #[arg(long, default_value = "1.0")]
    pub oldpeak: String,
    /// Jenis kelamin
    #[arg(long, default_value = "Pria")]
    pub sex: String,
    /// Tipe nyeri dada
    #[arg(long, default_value = "Asymptomatic (Tipe 4)")]
    pub cp: String,
    /// Gula darah puasa
    #[arg(long, default_value = "< 120 mg/dl (Salah)")]
    pub fbs: String,
    /// Hasil EKG istirahat
    #[arg(long, default_value = "Normal (0)")]
    pub restecg: String,
    /// Angina akibat latihan
    #[arg(long, default_value = "Tidak")]
    pub exang: String,
    /// Slope puncak latihan ST
    #[arg(long, default_value = "Flat (Datar)")]
    pub slope: String,
    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    pub fn to_request(&self) -> Result<PredictionRequest> {
        let pairs = [
            (FeatureColumn::Age, &self.age),
            (FeatureColumn::Trestbps, &self.trestbps),
            (FeatureColumn::Chol, &self.chol),
            (FeatureColumn::Thalach, &self.thalach),
            (FeatureColumn::Oldpeak, &self.oldpeak),
            (FeatureColumn::Sex, &self.sex),
            (FeatureColumn::Cp, &self.cp),
            (FeatureColumn::Fbs, &self.fbs),
            (FeatureColumn::Restecg, &self.restecg),
            (FeatureColumn::Exang, &self.exang),
            (FeatureColumn::Slope, &self.slope),
        ];
        pairs
            .into_iter()
            .try_fold(RequestBuilder::new(), |builder, (column, raw)| {
                builder.set(column, raw)
            })
            .map(RequestBuilder::build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChestPain, Sex};

    #[test]
    fn defaults_to_form_command() {
        let cli = Cli::try_parse_from(["cardio-risk"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, "config");
    }

    #[test]
    fn predict_accepts_labels_and_codes() {
        let cli = Cli::try_parse_from([
            "cardio-risk",
            "predict",
            "--age",
            "63",
            "--sex",
            "0",
            "--cp",
            "Typical Angina (Tipe 1)",
            "--json",
        ])
        .unwrap();
        let Some(Commands::Predict(args)) = cli.command else {
            panic!("expected predict");
        };
        assert!(args.json);
        let request = args.to_request().unwrap();
        assert_eq!(request.age, 63.0);
        assert_eq!(request.sex, Sex::Female);
        assert_eq!(request.cp, ChestPain::TypicalAngina);
        assert_eq!(request.oldpeak, 1.0);
    }

    #[test]
    fn predict_rejects_out_of_range() {
        let cli = Cli::try_parse_from(["cardio-risk", "predict", "--chol", "900"]).unwrap();
        let Some(Commands::Predict(args)) = cli.command else {
            panic!("expected predict");
        };
        let err = args.to_request().unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for chol"));
    }

    #[test]
    fn serve_overrides() {
        let cli = Cli::try_parse_from(["cardio-risk", "--config", "/etc/cardio", "serve", "-p", "9000"])
            .unwrap();
        assert_eq!(cli.config, "/etc/cardio");
        assert!(matches!(
            cli.command,
            Some(Commands::Serve { host: None, port: Some(9000) })
        ));
    }
}
