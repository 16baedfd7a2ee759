//! CLI configuration.
//!
//! Sources, highest precedence first: command-line flags (which also read
//! the environment and `.env`), then `sentinel.toml`, then built-in defaults.
//!
//! ```toml
//! [api]
//! base_url = "https://sentinel.example"
//!
//! [storage]
//! path = "/var/lib/sentinel/credential.json"
//! ```

use sentinel_session::ApiConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the credential file location.
pub const STATE_FILE_ENV: &str = "SENTINEL_STATE_FILE";

const APP_DIR: &str = "sentinel";
const STATE_FILE: &str = "credential.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `sentinel.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    pub path: Option<PathBuf>,
}

impl FileConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Resolved settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub state_path: PathBuf,
}

impl ClientConfig {
    /// Merges flag values over the file config over defaults.
    pub fn resolve(file: FileConfig, api_url: Option<&str>, state_file: Option<&Path>) -> Self {
        let base_url = api_url.or(file.api.base_url.as_deref());
        let state_path = state_file
            .map(Path::to_path_buf)
            .or(file.storage.path)
            .unwrap_or_else(default_state_path);

        Self {
            api: ApiConfig::new(base_url),
            state_path,
        }
    }

    pub fn load(
        config_path: &Path,
        api_url: Option<&str>,
        state_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let file = FileConfig::load(config_path)?;
        Ok(Self::resolve(file, api_url, state_file))
    }
}

/// `<local data dir>/sentinel/credential.json`, or `./.sentinel/` when the
/// platform has no data directory.
pub fn default_state_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".sentinel"))
        .join(STATE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_session::DEFAULT_API_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = ClientConfig::resolve(FileConfig::default(), None, None);
        assert_eq!(config.api.base_url(), DEFAULT_API_BASE_URL);
        assert!(config.state_path.ends_with("credential.json"));
    }

    #[test]
    fn test_file_values_apply() {
        let file = FileConfig::parse(
            r#"
            [api]
            base_url = "https://sentinel.example/"

            [storage]
            path = "/tmp/sentinel-test.json"
            "#,
        )
        .unwrap();

        let config = ClientConfig::resolve(file, None, None);
        assert_eq!(config.api.base_url(), "https://sentinel.example");
        assert_eq!(config.state_path, PathBuf::from("/tmp/sentinel-test.json"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::parse("[api]\nbase_url = \"https://from-file\"\n").unwrap();
        let config = ClientConfig::resolve(
            file,
            Some("http://from-flag:9000"),
            Some(Path::new("/tmp/flag.json")),
        );

        assert_eq!(config.api.base_url(), "http://from-flag:9000");
        assert_eq!(config.state_path, PathBuf::from("/tmp/flag.json"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(FileConfig::parse("[api]\nbase = \"typo\"\n").is_err());
    }

    #[test]
    fn test_missing_file_is_default_and_bad_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(FileConfig::load(&dir.path().join("missing.toml")).is_ok());

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[api\n").unwrap();
        assert!(matches!(
            FileConfig::load(&bad),
            Err(ConfigError::Parse { .. })
        ));
    }
}
