use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::record::ExportSettings;
use crate::util::paths::config_path;
use crate::web::ServerConfig;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Download label and filename
    pub export: ExportSettings,
    /// Default tracing filter directive (RUST_LOG overrides it)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            export: ExportSettings::default(),
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_permissive: Option<bool>,
    pub max_sessions: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlExportConfig {
    pub label: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlLoggingConfig {
    pub filter: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub server: Option<TomlServerConfig>,
    pub export: Option<TomlExportConfig>,
    pub logging: Option<TomlLoggingConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults.
    ///
    /// Writes the bundled example on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(server) = toml_config.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
            if let Some(cors_permissive) = server.cors_permissive {
                config.server.cors_permissive = cors_permissive;
            }
            if let Some(max_sessions) = server.max_sessions {
                config.server.max_sessions = max_sessions;
            }
        }

        if let Some(export) = toml_config.export {
            if let Some(label) = export.label {
                config.export.label = label;
            }
            if let Some(filename) = export.filename {
                config.export.filename = filename;
            }
        }

        if let Some(filter) = toml_config.logging.and_then(|l| l.filter) {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_sessions == 0 {
            return Err(ConfigError::Invalid(
                "server.max_sessions must be at least 1".to_string(),
            ));
        }
        let filename = self.export.filename.as_str();
        let header_safe = filename
            .chars()
            .all(|c| c == ' ' || c.is_ascii_graphic());
        if filename.is_empty() || !header_safe || filename.contains(&['/', '\\', '"'][..]) {
            return Err(ConfigError::Invalid(format!(
                "export.filename must be a bare file name, got {:?}",
                filename
            )));
        }
        Ok(())
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!("Failed to create config directory: {}", e);
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            eprintln!("Failed to write default config: {}", e);
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}
