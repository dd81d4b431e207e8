//! estia-watch - apartment availability watcher
//!
//! Main entry point. One invocation is one check; run it from a scheduler.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use estia_config::{home_dir, ConfigError, ConfigLoader, WatchConfig};
use estia_core::{connectivity, ChromeLauncher, RunOutcome, Watcher};
use estia_notify::{LogNotifier, Notifier, SmsNotifier, TwilioClient};

use cli::Cli;

/// No network, or a generic error ended the run.
const EXIT_FAILURE: u8 = 1;
const EXIT_CONFIG: u8 = 2;

fn estia_dir() -> PathBuf {
    home_dir().join(".estia-watch")
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = estia_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("estia-watch")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Dropping the guard stops the file writer
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Defaults, then the optional file, then flags and environment.
fn load_config(cli: &Cli) -> Result<WatchConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            ConfigLoader::load(path)?
        }
        None => WatchConfig::default(),
    };
    cli.apply(&mut config);
    Ok(config)
}

fn build_notifier(
    config: &WatchConfig,
    dry_run: bool,
) -> Result<Arc<dyn Notifier>, Box<dyn std::error::Error>> {
    let recipients = [
        config.recipients.primary.as_str(),
        config.recipients.secondary.as_str(),
    ];

    if dry_run {
        info!("Dry run: alerts are logged, not texted");
        return Ok(Arc::new(LogNotifier::new(&recipients)));
    }

    let client = TwilioClient::new(
        &config.twilio.api_base,
        &config.twilio.account_sid,
        &config.twilio.auth_token,
    )?;
    Ok(Arc::new(SmsNotifier::new(
        client,
        &config.twilio.from_number,
        &recipients,
    )))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let notifier = build_notifier(&config, cli.dry_run)?;

    let watcher = match Watcher::new(config, notifier) {
        Ok(watcher) => watcher,
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    if !connectivity::check_connection().await {
        return Ok(ExitCode::from(EXIT_FAILURE));
    }

    let launcher = ChromeLauncher::from_config(watcher.config());

    match watcher.run(&launcher).await {
        RunOutcome::Completed(reports) => {
            for report in reports {
                info!("{}: {:?}", report.unit, report.status);
            }
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::Failed { outcome, .. } => {
            info!("Run failed ({:?})", outcome);
            Ok(ExitCode::from(EXIT_FAILURE))
        }
    }
}
