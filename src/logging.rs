//! Optional `tracing` subscriber setup.
//!
//! The library only emits `tracing` events; applications that have no
//! subscriber of their own can call [`init_logging`] once at startup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::error::{OpenDartError, Result};

/// Subscriber settings.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Filter directive, e.g. `info` or `opendartkit=debug`. `RUST_LOG` wins when set.
    pub filter: String,
    /// Also append plain-text events to this file.
    pub file: Option<PathBuf>,
    pub with_target: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
            with_target: false,
        }
    }
}

impl LogOptions {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Default::default()
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.filter)
                .map_err(|e| OpenDartError::ConfigError(format!("invalid log filter: {}", e))),
        }
    }
}

/// Installs a console subscriber, plus a file writer when configured.
///
/// Returns `Ok(false)` when a global subscriber was already installed.
pub fn init_logging(options: LogOptions) -> Result<bool> {
    let filter = options.env_filter()?;

    let file_layer = match &options.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(options.with_target)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(options.with_target))
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialized");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let options = LogOptions::default();
        assert_eq!(options.filter, "info");
        assert!(options.file.is_none());
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let result = LogOptions::new("opendartkit=[").env_filter();
        assert!(matches!(result, Err(OpenDartError::ConfigError(_))));
    }
}
