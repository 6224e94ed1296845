use std::fmt::Display;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use cardio_risk::cli::{Cli, Commands, PredictArgs};
use cardio_risk::config::AppConfig;
use cardio_risk::error::CardioError;
use cardio_risk::logging::{init_logging, LogTarget};
use cardio_risk::ml::{ArtifactPaths, Artifacts};
use cardio_risk::predictor::Predictor;
use cardio_risk::session::assess;
use cardio_risk::tui::{run_form, FormApp};
use cardio_risk::web::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Form);

    let config = AppConfig::load_from(&cli.config)
        .unwrap_or_else(|e| fatal(format!("failed to load configuration: {e}")));
    if let Err(errors) = config.validate() {
        fatal(CardioError::InvalidConfig(errors.join("; ")));
    }

    let target = match command {
        Commands::Form => LogTarget::File,
        _ => LogTarget::Console,
    };
    let guard = init_logging(&config.logging, target);

    // Missing or corrupt artifacts end the process before any UI is shown.
    let paths = ArtifactPaths::from(&config.artifacts);
    let artifacts = match Artifacts::load_shared(&paths) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            error!(error = %e, "failed to load artifacts");
            // process::exit skips destructors; flush the file writer first.
            drop(guard);
            fatal(e)
        }
    };
    let predictor = Predictor::new(artifacts);

    match command {
        Commands::Form => {
            info!("starting terminal form");
            run_form(FormApp::new(predictor)).context("terminal form failed")?;
        }
        Commands::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            let addr = server.socket_addr().map_err(anyhow::Error::msg)?;
            start_server(predictor, addr).await?;
        }
        Commands::Predict(args) => run_predict(&predictor, &args)?,
    }

    Ok(())
}

fn run_predict(predictor: &Predictor, args: &PredictArgs) -> anyhow::Result<()> {
    let request = args.to_request()?;
    let assessment = assess(predictor, &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", assessment.render_text());
    }
    Ok(())
}

fn fatal(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(1)
}
