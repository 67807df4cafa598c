//! Opening outbound links in the system browser.

use anyhow::{Context, Result, bail};
use std::process::Command;
use tracing::info;

/// Hand `url` to the platform's default opener.
pub fn open_url(url: &str) -> Result<()> {
    if !is_web_url(url) {
        bail!("Refusing to open non-web link: {url}");
    }
    opener_command(url)
        .spawn()
        .with_context(|| format!("Failed to launch browser for {url}"))?;
    info!(%url, "Opened external link");
    Ok(())
}

pub fn is_web_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")) && !url.contains(char::is_whitespace)
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_http_links() {
        assert!(is_web_url("https://atmos.muheeb.dev/"));
        assert!(is_web_url("HTTP://example.com"));
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("https://example.com/a b"));
    }

    #[test]
    fn rejects_before_spawning() {
        assert!(open_url("ftp://example.com").is_err());
    }
}
