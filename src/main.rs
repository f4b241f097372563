//! fxdash binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use fxdash::{app, args, theme};

/// Log timestamps as `YYYY-MM-DD-T HH:MM:SS` in local time.
struct FxdashTimer;

impl tracing_subscriber::fmt::time::FormatTime for FxdashTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
/// - `stderr_fallback`: Whether stderr may replace an unopenable log file (one-shot modes).
///
/// Details:
/// - Writes to `~/.config/fxdash/logs/fxdash.log` through a non-blocking appender.
/// - Without the file, one-shot modes log to stderr and the dashboard discards logs.
fn init_logging(level: &str, stderr_fallback: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = theme::logs_dir().join("fxdash.log");
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
                .with_timer(FxdashTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) if stderr_fallback => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FxdashTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
        Err(e) => {
            // The dashboard owns the terminal, so stderr output would land on the screen.
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::sink)
                .init();
            eprintln!("fxdash: logging disabled, cannot open {}: {e}", log_path.display());
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli), cli.is_one_shot());

    if let Some(code) = args::process_args(&cli).await {
        return code;
    }

    tracing::info!("fxdash starting");
    let code = match app::run(cli.run_options()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Application error");
            eprintln!("fxdash: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("fxdash exited");
    code
}
