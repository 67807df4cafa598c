use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub const ENV_SERVICE_ID: &str = "FOLIO_EMAIL_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "FOLIO_EMAIL_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "FOLIO_EMAIL_PUBLIC_KEY";

/// Load config from disk, falling back to defaults when the file is missing
/// or malformed.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str::<ConfigTables>(contents).map(AppConfig::from)
}

pub fn serialize_config(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string(&ConfigTables::from(config))
}

/// Let the process environment supply the email identifiers.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

pub(crate) fn apply_overrides_from<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let targets = [
        (ENV_SERVICE_ID, &mut config.contact.service_id),
        (ENV_TEMPLATE_ID, &mut config.contact.template_id),
        (ENV_PUBLIC_KEY, &mut config.contact.public_key),
    ];
    for (key, slot) in targets {
        if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
            debug!(key, "Applied email credential from environment");
            *slot = value.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse_config("").expect("empty config parses");
        assert_eq!(cfg.window_width, 1280.0);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert!(cfg.intro_enabled);
        assert_eq!(cfg.contact.status_display_secs, 3.0);
        assert!(cfg.contact.endpoint.starts_with("https://api.emailjs.com/"));
    }

    #[test]
    fn reads_sectioned_tables() {
        let cfg = parse_config(
            r#"
            [window]
            width = 900.0

            [logging]
            log_level = "warn"

            [intro]
            enabled = false

            [contact]
            service_id = "svc"
            template_id = "tpl"
            public_key = "key"
            "#,
        )
        .expect("config parses");
        assert_eq!(cfg.window_width, 900.0);
        assert_eq!(cfg.window_height, 800.0);
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert!(!cfg.intro_enabled);
        assert!(cfg.contact.has_credentials());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut cfg = AppConfig::default();
        cfg.intro_step_ms = 500;
        cfg.contact.service_id = "svc".into();
        let text = serialize_config(&cfg).expect("serializes");
        let parsed = parse_config(&text).expect("parses");
        assert_eq!(parsed.intro_step_ms, 500);
        assert_eq!(parsed.contact, cfg.contact);
    }

    #[test]
    fn environment_overrides_only_non_blank_values() {
        let mut cfg = AppConfig::default();
        cfg.contact.template_id = "from-file".into();
        apply_overrides_from(&mut cfg, |key| match key {
            ENV_SERVICE_ID => Some(" svc-env ".to_string()),
            ENV_TEMPLATE_ID => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(cfg.contact.service_id, "svc-env");
        assert_eq!(cfg.contact.template_id, "from-file");
        assert_eq!(cfg.contact.public_key, "");
        assert!(!cfg.contact.has_credentials());
    }
}
