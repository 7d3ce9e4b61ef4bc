use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use blog_core::PER_PAGE;
use blog_engine::{FetchSettings, DEV_TO_ARTICLES_URL};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "blog_reader.ron";

/// Optional settings read from `blog_reader.ron`. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: Option<u64>,
    pub log_destination: LogDestination,
    /// Clear the terminal before each redraw.
    pub clear_screen: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEV_TO_ARTICLES_URL.to_string(),
            request_timeout_ms: None,
            log_destination: LogDestination::default(),
            clear_screen: true,
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            api_base_url: self.api_base_url.clone(),
            per_page: PER_PAGE,
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            ..FetchSettings::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

/// Loads the config file. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fetch_settings().request_timeout, None);
        assert_eq!(config.fetch_settings().per_page, 6);
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(api_base_url: "http://localhost:9000/api/articles", request_timeout_ms: Some(1500), log_destination: Both)"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api/articles");
        assert_eq!(config.log_destination, LogDestination::Both);
        assert!(config.clear_screen);

        let settings = config.fetch_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(settings.api_base_url, "http://localhost:9000/api/articles");
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(api_base_url: 42").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }
}
