//! Configuration loading for the portfolio.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the UI can still launch. Email credentials may also be
//! supplied through the environment so they never need to live on disk.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{apply_env_overrides, load_config, serialize_config};
pub use models::{AppConfig, ContactConfig, LogLevel};
