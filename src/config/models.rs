use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_intro_enabled")]
    pub intro_enabled: bool,
    #[serde(default = "crate::config::defaults::default_intro_step_ms")]
    pub intro_step_ms: u64,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            log_level: crate::config::defaults::default_log_level(),
            intro_enabled: crate::config::defaults::default_intro_enabled(),
            intro_step_ms: crate::config::defaults::default_intro_step_ms(),
            contact: ContactConfig::default(),
        }
    }
}

/// Email delivery settings for the contact form.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct ContactConfig {
    #[serde(default = "crate::config::defaults::default_email_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default = "crate::config::defaults::default_status_display_secs")]
    pub status_display_secs: f32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            endpoint: crate::config::defaults::default_email_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            status_display_secs: crate::config::defaults::default_status_display_secs(),
        }
    }
}

impl ContactConfig {
    /// True when every identifier needed by the delivery API is present.
    pub fn has_credentials(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn status_display(&self) -> std::time::Duration {
        let secs = if self.status_display_secs.is_finite() {
            self.status_display_secs.clamp(0.0, 86_400.0)
        } else {
            crate::config::defaults::default_status_display_secs()
        };
        std::time::Duration::from_secs_f32(secs)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
