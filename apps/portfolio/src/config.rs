use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only unparsable values are errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Root of the static site served by the content host.
    pub site_dir: PathBuf,
    /// The projects document on disk, read by the content host.
    pub content_path: PathBuf,
    /// Where the terminal browser fetches the projects document from.
    pub content_url: String,
    pub fetch_timeout: Duration,
    pub reduced_motion: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let site_dir =
            PathBuf::from(std::env::var("SITE_DIR").unwrap_or_else(|_| "site".to_string()));

        let content_path = std::env::var("CONTENT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| site_dir.join("data").join("projects.json"));

        let content_url = std::env::var("CONTENT_URL")
            .unwrap_or_else(|_| format!("http://127.0.0.1:{port}/data/projects.json"));

        let fetch_timeout_secs = std::env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            site_dir,
            content_path,
            content_url,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            reduced_motion: std::env::var("REDUCED_MOTION")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_truthy_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("reduce"));
    }
}
