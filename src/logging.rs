//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured level. While the terminal form owns the
//! screen, events go to `<logging.dir>/cardio-risk.log` instead of stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

pub const LOG_FILE_NAME: &str = "cardio-risk.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr, for `serve` and `predict`
    Console,
    /// log file, for the terminal form
    File,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Default filter directive for a configured level.
pub fn filter_directive(level: &str) -> String {
    format!("{level},cardio_risk={level},tower_http=warn")
}

/// Install the global subscriber. Keep the returned guard alive for the life
/// of the process or buffered file output is lost.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));

    let (layer, guard): (BoxedLayer, Option<WorkerGuard>) = match target {
        LogTarget::Console => (console_layer(config.json), None),
        LogTarget::File => match file_layer(&config.dir, config.json) {
            Some((layer, guard)) => (layer, Some(guard)),
            None => return None,
        },
    };

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init();

    guard
}

fn console_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(dir: &Path, json: bool) -> Option<(BoxedLayer, WorkerGuard)> {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "Warning: Could not create log directory {} ({}), file logging disabled",
            dir.display(),
            e
        );
        return None;
    }

    // The builder reports an unopenable file instead of panicking like `rolling::never`.
    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!(
                "Warning: Could not open {}/{} ({}), file logging disabled",
                dir.display(),
                LOG_FILE_NAME,
                e
            );
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);
    let layer = if json { layer.json().boxed() } else { layer.boxed() };
    Some((layer, guard))
}
