//! Build-time Configuration
//!
//! Read once at startup from `option_env!` values baked in by the build:
//! `TODO_PAGE_LOG` (log level) and `TODO_PAGE_ERROR_TIMEOUT_MS`.

use log::Level;

const DEFAULT_ERROR_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Console log level
    pub log_level: Level,
    /// How long a service error stays on screen; 0 keeps it until dismissed
    pub error_banner_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            error_banner_timeout_ms: DEFAULT_ERROR_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_PAGE_LOG"), option_env!("TODO_PAGE_ERROR_TIMEOUT_MS"))
    }

    /// Unparseable values fall back to the defaults
    fn from_values(log_level: Option<&str>, error_timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            error_banner_timeout_ms: error_timeout_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.error_banner_timeout_ms),
        }
    }
}
