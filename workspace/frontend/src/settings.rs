use common::{BmiSource, ClientConfig, Revision};
use log::Level;
use web_sys::{window, Storage};

const API_URL_KEY: &str = "heartcheck_api_url";
const REVISION_KEY: &str = "heartcheck_revision";
const BMI_SOURCE_KEY: &str = "heartcheck_bmi_source";
const LOG_LEVEL_KEY: &str = "heartcheck_log_level";

/// Browser-side settings read once at start-up.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Used when the hosting server does not serve `/api/client-config`
    pub fallback_config: ClientConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            fallback_config: ClientConfig::default(),
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_storage(&storage);
        }

        settings
    }

    fn apply_storage(&mut self, storage: &Storage) {
        let read = |key: &str| storage.get_item(key).ok().flatten();

        if let Some(api_url) = read(API_URL_KEY) {
            self.fallback_config.api_url = Some(api_url);
        }

        // Unparseable values keep the defaults
        if let Some(revision) = read(REVISION_KEY).and_then(|raw| raw.parse::<Revision>().ok()) {
            self.fallback_config.revision = revision;
        }
        if let Some(source) = read(BMI_SOURCE_KEY).and_then(|raw| raw.parse::<BmiSource>().ok()) {
            self.fallback_config.bmi_source = Some(source);
        }
        if let Some(level) = read(LOG_LEVEL_KEY).and_then(|raw| parse_level(&raw)) {
            self.log_level = level;
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level(" warn "), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }
}
