//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::session::Theme;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted local store
    pub data_dir: PathBuf,
    /// Simulated follow confirmation round-trip delay
    pub follow_confirm_delay: Duration,
    /// Theme applied when none has been persisted
    pub default_theme: Theme,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".jurni"),
            follow_confirm_delay: Duration::from_millis(300),
            default_theme: Theme::Light,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a sensible default, so a bare environment is
    /// a valid configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = env::var("JURNI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".jurni"));

        let follow_confirm_delay = match env::var("JURNI_FOLLOW_DELAY_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse()
                    .map_err(|_| ConfigError::Invalid("JURNI_FOLLOW_DELAY_MS"))?,
            ),
            Err(_) => Duration::from_millis(300),
        };

        // Unknown theme names fall back to light, same as an unknown
        // persisted theme value.
        let default_theme = env::var("JURNI_THEME")
            .map(|raw| Theme::parse(&raw))
            .unwrap_or(Theme::Light);

        Ok(Self {
            data_dir,
            follow_confirm_delay,
            default_theme,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
