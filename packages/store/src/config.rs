//! # Client configuration (`acme.toml`)
//!
//! Settings every frontend needs before it can talk to the auth service.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.acme.test"   # no trailing slash needed
//!
//! [logging]
//! level = "debug"                      # trace | debug | info | warn | error
//! ```
//!
//! ## Sources
//!
//! | Platform | Source |
//! |----------|--------|
//! | Web | Baked in at build time from `ACME_API_URL` / `ACME_LOG_LEVEL` ([`AcmeConfig::from_build_env`]) |
//! | Desktop | `<config_dir>/acme/acme.toml`, then `.env` and process environment overrides ([`AcmeConfig::load`]) |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "ACME_API_URL";
/// Environment variable overriding [`LoggingConfig::level`].
pub const LOG_LEVEL_ENV: &str = "ACME_LOG_LEVEL";

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `acme.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AcmeConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote auth service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl AcmeConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "acme.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Base URL with any trailing slash removed.
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Configured log level; unknown names fall back to `INFO`.
    pub fn log_level(&self) -> tracing::Level {
        self.logging.level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// Apply overrides, ignoring empty values.
    pub fn with_overrides(mut self, base_url: Option<&str>, level: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        if let Some(level) = level.map(str::trim).filter(|l| !l.is_empty()) {
            self.logging.level = level.to_lowercase();
        }
        self
    }

    /// Configuration baked into the binary at compile time.
    ///
    /// Used by the web build, which has no filesystem or process environment
    /// at runtime.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(option_env!("ACME_API_URL"), option_env!("ACME_LOG_LEVEL"))
    }

    /// Load `<config_dir>/acme/acme.toml` (if present) and apply `.env` and
    /// process environment overrides.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("acme")
            .join(Self::filename());

        let base = match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let url = std::env::var(API_URL_ENV).ok();
        let level = std::env::var(LOG_LEVEL_ENV).ok();
        Ok(base.with_overrides(url.as_deref(), level.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AcmeConfig::from_toml("").unwrap();
        assert_eq!(config, AcmeConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AcmeConfig::from_toml("[api]\nbase_url = \"https://api.acme.test/\"\n").unwrap();
        assert_eq!(config.api_base_url(), "https://api.acme.test");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = AcmeConfig::from_toml("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let config = AcmeConfig::default()
            .with_overrides(Some("  "), Some("DEBUG"));
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.logging.level, "debug");

        let config = config.with_overrides(Some("https://auth.example.com"), None);
        assert_eq!(config.api.base_url, "https://auth.example.com");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_log_level() {
        let config = AcmeConfig::default().with_overrides(None, Some("Warn"));
        assert_eq!(config.log_level(), tracing::Level::WARN);

        let config = config.with_overrides(None, Some("chatty"));
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }
}
