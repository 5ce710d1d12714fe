//! Diagnostic logging for one notification run.
//!
//! Each invocation appends to a single fixed log file. Opening the file is
//! best-effort: when it fails (missing directory, no permission) the run
//! must still proceed and surface its outcome, so logging falls back to
//! stderr. [`init`] returns a guard that `main` holds for the process
//! lifetime; the sink is flushed when the guard drops.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Fixed path of the append-only notification log.
pub const LOG_PATH: &str = "/var/log/icinga2_notifications.log";

/// Where log lines end up for this run.
pub enum LogSink {
    File(Arc<File>),
    Stderr,
}

/// Open the log file for append, falling back to stderr.
pub fn open_sink(path: &Path) -> LogSink {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => LogSink::File(Arc::new(file)),
        Err(_) => LogSink::Stderr,
    }
}

/// Scoped handle on the log sink; flushed on drop.
pub struct LogGuard {
    file: Option<Arc<File>>,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let _ = (&**file).flush();
        }
    }
}

/// Install the subscriber for this run and hand the sink to the caller.
///
/// The default level is debug, matching the verbosity the notification log
/// has always had; `RUST_LOG` can override it.
pub fn init(path: &Path) -> LogGuard {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    match open_sink(path) {
        LogSink::File(file) => {
            tracing_subscriber::fmt()
                .with_writer(file.clone())
                .with_ansi(false)
                .with_env_filter(filter)
                .try_init()
                .ok();
            LogGuard { file: Some(file) }
        }
        LogSink::Stderr => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_env_filter(filter)
                .try_init()
                .ok();
            LogGuard { file: None }
        }
    }
}
