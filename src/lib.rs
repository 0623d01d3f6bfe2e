pub mod analyzer;
pub mod config;
pub mod error;
pub mod input;
pub mod pricing;
pub mod report;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `logging.level`. With `console` set, events
/// go to stderr. Without it (the interactive analyzer owns the terminal) they
/// go to `logging.file` if one is configured and are dropped otherwise.
///
/// The returned guard flushes the file writer on drop and must be kept alive.
///
/// Note: This function can only be called once.
pub fn init_tracing(logging: &LoggingConfig, console: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let json = logging.format == "json";

    if console {
        let layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
        if json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        return None;
    }

    let path = logging.file.as_ref()?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path.file_name()?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }

    Some(guard)
}
