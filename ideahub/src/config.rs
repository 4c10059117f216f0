//! Application configuration
//!
//! Central location for configuration constants and validation boundaries,
//! plus the runtime configuration loaded from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

// ===== Remote Resource =====

/// Default base URL of the hosted ideas resource (without the `/ideas` suffix)
pub const DEFAULT_API_URL: &str = "https://68a4099ec123272fb9b115b5.mockapi.io/api/v1";

/// Default request timeout in seconds.
/// The transport default is unbounded, which leaves a stuck vote pending forever.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("IdeaHub/", env!("CARGO_PKG_VERSION"));

// ===== Local Storage =====

/// Storage key for the per-device like map (JSON-encoded object of id -> bool)
pub const LIKED_ITEMS_KEY: &str = "likedItems";

/// Storage key for the onboarding flag (`"true"` once completed)
pub const HAS_STARTED_KEY: &str = "hasStarted";

/// File name of the key-value store inside the data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

// ===== Ideas =====

/// Highest rating an idea can be assigned at submission
pub const MAX_RATING: u8 = 100;

/// Number of ideas shown on the leaderboard podium
pub const PODIUM_SIZE: usize = 3;

// ===== Feedback =====

/// Length of the haptic pulse emitted after a successful vote
pub const VOTE_HAPTIC_PULSE: Duration = Duration::from_millis(50);

/// Delay after which the welcome screen dismisses itself
pub const ONBOARDING_AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote resource
    pub api_url: String,
    /// Directory holding local durable storage
    pub data_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir(),
            log_level: "info".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let api_url = env::var("IDEAHUB_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let data_dir = env::var("IDEAHUB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let log_level = env::var("IDEAHUB_LOG_LEVEL").unwrap_or(defaults.log_level);

        let request_timeout = match env::var("IDEAHUB_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Invalid IDEAHUB_REQUEST_TIMEOUT_SECS {:?}, using {}s",
                        raw,
                        DEFAULT_REQUEST_TIMEOUT_SECS
                    );
                    defaults.request_timeout
                }
            },
            Err(_) => defaults.request_timeout,
        };

        Self {
            api_url,
            data_dir,
            log_level,
            request_timeout,
        }
    }

    /// URL of the ideas collection
    pub fn ideas_url(&self) -> String {
        format!("{}/ideas", self.api_url.trim_end_matches('/'))
    }
}

fn default_data_dir() -> PathBuf {
    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".ideahub"))
        .unwrap_or_else(|_| PathBuf::from("./.ideahub"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideas_url_strips_trailing_slash() {
        let config = AppConfig {
            api_url: "http://127.0.0.1:8080/api/v1/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.ideas_url(), "http://127.0.0.1:8080/api/v1/ideas");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert!(config.data_dir.ends_with(".ideahub"));
    }
}
