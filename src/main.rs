//! Atelier binary entrypoint kept minimal. Pages live in `args` and the library.

mod args;

use std::process::ExitCode;
use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

/// Log timestamp formatter: `YYYY-MM-DD-T HH:MM:SS` in UTC.
struct AtelierTimer;

impl tracing_subscriber::fmt::time::FormatTime for AtelierTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX));
        let s = atelier::util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-T HH:MM:SS"
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Filter directive from `determine_log_level`
///
/// Details:
/// - Writes to `<config>/logs/atelier.log`; falls back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_new(level)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    let mut log_path = atelier::settings::logs_dir();
    log_path.push("atelier.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(AtelierTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so output is not lost
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(AtelierTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    tracing::info!(command = ?args.command, path = %args.path, "Atelier starting");
    let ok = args::process_args(&args).await;
    tracing::info!(success = ok, "Atelier exited");
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
