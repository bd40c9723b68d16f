//! Boutik binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use boutik::{app, args, theme};
use clap::Parser;

/// Log timestamp formatter: `YYYY-MM-DD-T HH:MM:SS` in local time.
struct BoutikTimer;

impl tracing_subscriber::fmt::time::FormatTime for BoutikTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Build the filter from `RUST_LOG`, else from the CLI level.
fn env_filter(default_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
}

/// Initialize tracing to `~/.config/boutik/logs/boutik.log`, falling back to stderr.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("boutik.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(BoutikTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(BoutikTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = args::apply_overrides(theme::settings(), &cli);
    tracing::info!(
        catalog = %settings.catalog_source,
        featured = settings.featured_count,
        sort = settings.sort_mode.as_config_key(),
        "Boutik starting"
    );

    if cli.list {
        match args::list::handle_list(&cli, &settings).await {
            Ok(count) => tracing::info!(count, "catalog listed"),
            Err(e) => {
                eprintln!("{e}");
                tracing::error!(error = %e, "catalog listing failed");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(err) = app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Boutik exited");
}
