//! Entry point for the portfolio.
//!
//! Loads `conf/config.toml`, applies environment overrides for the email
//! credentials, then hands control to the iced application.

mod app;
mod browser;
mod config;
mod contact;
mod content;
mod layout;
mod motion;
mod theme;

use crate::app::run_app;
use crate::config::{apply_env_overrides, load_config, serialize_config};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let mut config = load_config(Path::new(CONFIG_PATH));
    apply_env_overrides(&mut config);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        width = config.window_width,
        height = config.window_height,
        intro = config.intro_enabled,
        "Starting portfolio"
    );
    info!(
        endpoint = %config.contact.endpoint,
        credentials = config.contact.has_credentials(),
        "Active contact configuration"
    );
    match serialize_config(&config) {
        Ok(text) => debug!("Effective configuration:\n{text}"),
        Err(err) => warn!("Could not render effective configuration: {err}"),
    }
    run_app(config).context("Failed to start the GUI")?;
    Ok(())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    info!("Logging initialized; override level with logging.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = match EnvFilter::builder().parse(level) {
        Ok(filter) => filter,
        Err(err) => {
            warn!(%level, "Invalid log level in config, keeping debug: {err}");
            EnvFilter::new("debug")
        }
    };
    match handle.modify(|filter| *filter = parsed) {
        Ok(()) => info!(%level, "Applied log level from config"),
        Err(err) => warn!(%level, "Failed to update log level from config: {err}"),
    }
}
