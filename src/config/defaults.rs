pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_intro_enabled() -> bool {
    true
}

pub(crate) fn default_intro_step_ms() -> u64 {
    350
}

pub(crate) fn default_email_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

pub(crate) fn default_status_display_secs() -> f32 {
    3.0
}
