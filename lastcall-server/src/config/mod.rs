//! Start-up configuration.
//!
//! The origin, destination list and API key live in plain text files in a
//! configuration directory; everything else comes from the environment.
//! Loaded once per process.

mod destinations;
mod reference_time;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::maps::Locale;

pub use destinations::{parse_destinations, read_destinations, read_optional, read_origin};
pub use reference_time::parse_reference_time;

/// Default configuration directory.
const DEFAULT_CONFIG_DIR: &str = "conf";

/// Default listen address for the web server.
const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Default directory for static web assets.
const DEFAULT_STATIC_DIR: &str = "static";

/// Default directions request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration file could not be read
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The origin file is blank
    #[error("origin file {0:?} is empty")]
    EmptyOrigin(PathBuf),

    /// An environment variable has an unusable value
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Everything the binaries need to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the user is leaving from.
    pub origin: String,

    /// Destinations offered in the UI, in file order.
    pub destinations: Vec<String>,

    /// Google Maps API key, if configured.
    pub api_key: Option<String>,

    /// Serve directions from mock timetables in this directory.
    pub mock_dir: Option<PathBuf>,

    /// Language, region and units for queries.
    pub locale: Locale,

    /// Per-request timeout for the directions API.
    pub timeout_secs: u64,

    /// Web server listen address.
    pub bind: SocketAddr,

    /// Directory of static web assets.
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|name| std::env::var(name).ok())
    }

    /// Load using `env` to look up environment variables.
    pub fn load(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let dir = env("LASTCALL_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self::load_from_dir(&dir, env)
    }

    /// Load the files in `dir`, with environment overrides from `env`.
    pub fn load_from_dir(
        dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let origin = read_origin(&dir.join("source.txt"))?;
        let destinations = read_destinations(&dir.join("destinations.txt"))?;

        let api_key = match env("GOOGLE_MAPS_API_KEY").filter(|k| !k.trim().is_empty()) {
            Some(key) => Some(key.trim().to_string()),
            None => read_optional(&dir.join("apikey.txt"))?,
        };

        let default_locale = Locale::default();
        let locale = Locale::new(
            env("LASTCALL_LANGUAGE").unwrap_or(default_locale.language),
            env("LASTCALL_REGION").unwrap_or(default_locale.region),
        );

        let timeout_secs = match env("LASTCALL_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "LASTCALL_TIMEOUT_SECS",
                    value,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_text = env("LASTCALL_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_text
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "LASTCALL_BIND",
                value: bind_text.clone(),
            })?;

        Ok(Self {
            origin,
            destinations,
            api_key,
            mock_dir: env("LASTCALL_MOCK_DIR").map(PathBuf::from),
            locale,
            timeout_secs,
            bind,
            static_dir: env("LASTCALL_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::{TempDir, tempdir};

    fn conf_dir(with_key: bool) -> TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("source.txt"), "Amsterdam Centraal\n").unwrap();
        std::fs::write(
            dir.path().join("destinations.txt"),
            "Den Haag HS, 2515 Den Haag\n# comment\nUtrecht Centraal\n",
        )
        .unwrap();
        if with_key {
            std::fs::write(dir.path().join("apikey.txt"), "file-key\n").unwrap();
        }
        dir
    }

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn loads_files_with_defaults() {
        let dir = conf_dir(true);
        let config = AppConfig::load_from_dir(dir.path(), env_of(&[])).unwrap();

        assert_eq!(config.origin, "Amsterdam Centraal");
        assert_eq!(
            config.destinations,
            vec!["Den Haag HS, 2515 Den Haag", "Utrecht Centraal"]
        );
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.mock_dir, None);
        assert_eq!(config.locale, Locale::default());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn env_key_overrides_file() {
        let dir = conf_dir(true);
        let config =
            AppConfig::load_from_dir(dir.path(), env_of(&[("GOOGLE_MAPS_API_KEY", " env-key ")]))
                .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn key_is_optional() {
        let dir = conf_dir(false);
        let config = AppConfig::load_from_dir(dir.path(), env_of(&[])).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn env_overrides() {
        let dir = conf_dir(false);
        let config = AppConfig::load_from_dir(
            dir.path(),
            env_of(&[
                ("LASTCALL_LANGUAGE", "en"),
                ("LASTCALL_REGION", "uk"),
                ("LASTCALL_TIMEOUT_SECS", "4"),
                ("LASTCALL_BIND", "127.0.0.1:3000"),
                ("LASTCALL_MOCK_DIR", "data/mock_directions"),
                ("LASTCALL_STATIC_DIR", "/srv/static"),
            ]),
        )
        .unwrap();

        assert_eq!(config.locale, Locale::new("en", "uk"));
        assert_eq!(config.timeout_secs, 4);
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.mock_dir, Some(PathBuf::from("data/mock_directions")));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let dir = conf_dir(false);
        for bad in ["soon", "0", "-3"] {
            let result =
                AppConfig::load_from_dir(dir.path(), env_of(&[("LASTCALL_TIMEOUT_SECS", bad)]));
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidValue {
                        name: "LASTCALL_TIMEOUT_SECS",
                        ..
                    })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn bad_bind_is_rejected() {
        let dir = conf_dir(false);
        let result = AppConfig::load_from_dir(dir.path(), env_of(&[("LASTCALL_BIND", "nowhere")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn config_dir_comes_from_env() {
        let dir = conf_dir(false);
        let path = dir.path().to_string_lossy().to_string();
        let config = AppConfig::load(env_of(&[("LASTCALL_CONFIG_DIR", path.as_str())])).unwrap();
        assert_eq!(config.origin, "Amsterdam Centraal");
    }

    #[test]
    fn missing_destinations_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("source.txt"), "Amsterdam").unwrap();

        let result = AppConfig::load_from_dir(dir.path(), env_of(&[]));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
