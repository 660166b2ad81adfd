//! Tracing setup
//!
//! Batch commands log to stderr. The TUI owns the terminal, so it logs to a
//! file instead. The filter comes from `MREPORT_LOG` and defaults to
//! `maintenance_report=info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ReportError, ReportResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MREPORT_LOG";

const DEFAULT_DIRECTIVE: &str = "maintenance_report=info";

static TRACING_INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log to stderr; later calls are no-ops
pub fn init_stderr() {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Append logs to `path`; later calls are no-ops
pub fn init_file(path: &Path) -> ReportResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ReportError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });
    Ok(())
}
