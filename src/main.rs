//! Social GUI Client - Main Entry Point
//!
//! Native client for viewing profiles, following users and registering.

use anyhow::Context as _;
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use social_gui::app::application::{LaunchOptions, run_app};
use social_gui::app::navigation::Route;
use social_gui::constants::LOG_FILE_PREFIX;
use social_gui::domain::config::AppConfig;
use social_gui::domain::user::UserId;
use social_gui::helpers::{get_or_create_data_dir, is_development};
use social_gui::i18n::Locale;

/// Command line overrides for the config file
#[derive(Debug, Parser)]
#[command(name = "social-gui", version, about)]
struct Args {
    /// Backend base URL, e.g. http://localhost:5000
    #[arg(long)]
    base_url: Option<String>,

    /// ID of the signed-in user
    #[arg(long)]
    viewer: Option<String>,

    /// UI language (en, es)
    #[arg(long)]
    locale: Option<String>,

    /// Open the profile of this user instead of the registration form
    #[arg(long)]
    subject: Option<String>,
}

fn init_tracing() -> Option<WorkerGuard> {
    let default_level = if is_development() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // File logging is best effort; the app still runs without a data dir
    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            warn!(error = %e, "File logging disabled");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing();

    info!("Starting Social GUI Client...");

    let mut config = AppConfig::try_load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(viewer) = args.viewer {
        config.viewer_id = Some(UserId::new(viewer));
    }
    if let Some(locale) = args.locale {
        config.locale = Some(locale);
    }

    let locale = config
        .locale
        .as_deref()
        .map(Locale::from_code)
        .unwrap_or_else(Locale::detect);
    let start = args
        .subject
        .filter(|id| !id.trim().is_empty())
        .map(|id| Route::Profile(UserId::new(id)))
        .unwrap_or_default();

    run_app(LaunchOptions {
        config,
        locale,
        start,
    })
    .context("failed to start the application")
}
