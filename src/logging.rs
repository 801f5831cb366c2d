//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual-output logging for the CLI harness and any embedding host that
//! wants it:
//! - **JSONL to file** (data dir, `plugin-shelf/logs/plugin-shelf.jsonl`) -
//!   structured, machine-parseable
//! - **Pretty to stderr** - human-readable for developers
//!
//! The library itself never initializes logging; it only emits `tracing`
//! events. Binaries call [`init`] once and keep the returned guard alive.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that must be kept alive for the duration of the program;
/// dropping it flushes remaining logs and closes the file.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join("plugin-shelf.jsonl");

    // Open log file with append mode; fall back to a sink on failure so
    // logging never takes the process down.
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map(|f| Box::new(f) as Box<dyn std::io::Write + Send>)
        .unwrap_or_else(|e| {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            Box::new(std::io::sink())
        });

    // Non-blocking writer keeps file I/O off the caller's thread
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSONL layer for file output
    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    // Pretty layer for stderr (human developers)
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Log directory: `<data dir>/plugin-shelf/logs/`, temp dir as a fallback.
fn get_log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("plugin-shelf").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("plugin-shelf-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join("plugin-shelf.jsonl")
}
