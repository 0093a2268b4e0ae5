use std::path::Path;
use tracing::warn;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the file writer alive; drop it last so buffered lines are flushed.
pub struct Logger {
    _guard: Option<WorkerGuard>,
}

impl Logger {
    /// Installs the global subscriber.
    ///
    /// Console output goes to stderr and follows `RUST_LOG` (silent by
    /// default so command output stays clean). With `log_dir` set, JSON
    /// lines at `info` and above are also written to a daily rolling file;
    /// a directory that cannot be created only disables the file layer.
    pub fn new(component: &str, log_dir: Option<&Path>) -> Self {
        let appender = log_dir.map(|dir| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(format!("rust_app_{component}"))
                .filename_suffix("log")
                .build(dir)
        });

        let (file_layer, guard, appender_error) = match appender {
            Some(Ok(file_appender)) => {
                let (file_writer, guard) = non_blocking(file_appender);

                let layer = fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .json()
                    .with_filter(EnvFilter::new("info"));

                (Some(layer), Some(guard), None)
            }
            Some(Err(e)) => (None, None, Some(e)),
            None => (None, None, None),
        };

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let console_layer = fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(console_filter);

        tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .init();

        if let Some(e) = appender_error {
            warn!("File logging disabled: {e}");
        }

        Self { _guard: guard }
    }
}
