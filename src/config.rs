use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::Result;

/// Configuration for the OpenDart client
#[derive(Debug, Clone)]
pub struct OpenDartConfig {
    /// API key sent as `crtfc_key`. When `None`, the key stored in the settings file is used.
    pub api_key: Option<String>,
    /// Directory holding the registry cache and downloaded documents
    pub data_dir: PathBuf,
    /// Location of the persisted settings file
    pub settings_path: PathBuf,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Rate limit in requests per second
    pub rate_limit: u32,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URLs for the API and the DART website
    pub base_urls: OpenDartUrls,
}

/// Base URLs for the OpenDART API and the DART website
#[derive(Debug, Clone)]
pub struct OpenDartUrls {
    /// Base URL for OpenDART REST endpoints
    pub api: String,
    /// Base URL for the DART website (document viewer, daily listings)
    pub dart: String,
}

impl Default for OpenDartConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            data_dir: PathBuf::from("Data"),
            settings_path: PathBuf::from("Config").join("opendart_config.json"),
            user_agent: format!("opendartkit/{}", env!("CARGO_PKG_VERSION")),
            rate_limit: 10,
            timeout: Duration::from_secs(30),
            base_urls: OpenDartUrls::default(),
        }
    }
}

impl OpenDartConfig {
    /// Creates a configuration with an explicit API key and data directory.
    ///
    /// ```ignore
    /// use opendartkit::{OpenDart, OpenDartConfig};
    ///
    /// let config = OpenDartConfig::new("your-40-char-key", "./Data");
    /// let dart = OpenDart::with_config(config)?;
    /// ```
    pub fn new(api_key: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    pub fn with_base_urls(mut self, base_urls: OpenDartUrls) -> Self {
        self.base_urls = base_urls;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = rate_limit;
        self
    }
}

impl Default for OpenDartUrls {
    fn default() -> Self {
        Self {
            api: "https://opendart.fss.or.kr/api".to_string(),
            dart: "https://dart.fss.or.kr".to_string(),
        }
    }
}

impl OpenDartUrls {
    /// Points both the API and the website at the same host, typically a mock server.
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            api: format!("{}/api", host),
            dart: host.to_string(),
        }
    }
}

/// A literal substitution applied to raw disclosure XML before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Settings persisted between runs: the API key and the document repair rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_replacements")]
    pub replacements: Vec<Replacement>,
}

fn default_replacements() -> Vec<Replacement> {
    vec![
        Replacement::new("&cr;", "&#13;"),
        Replacement::new("M&A", "M&amp;A"),
        Replacement::new("R&D", "R&amp;D"),
        Replacement::new("S&P", "S&amp;P"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            replacements: default_replacements(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, writing a default file first if none exists.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            let settings = Self::default();
            settings.save(path)?;
            return Ok(settings);
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("saved settings to {}", path.display());
        Ok(())
    }
}
