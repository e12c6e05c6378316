//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};
use crate::models::TransportEmployee;

use super::types::{ServerConfig, ServiceConfig};

/// The file read from the configuration directory.
pub const CONFIG_FILE_NAME: &str = "service.yaml";

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use roster_service::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Listening on {}", loader.server().bind_address);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from `service.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or fields of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|message| RosterError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Parses configuration from a YAML document.
    fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str::<ServiceConfig>(content)
            .map(|config| Self { config })
            .map_err(|e| e.to_string())
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the seed employees.
    pub fn seed(&self) -> &[TransportEmployee] {
        &self.config.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.server().bind_address, "0.0.0.0:8080");
        assert_eq!(loader.seed().len(), 2);
        assert_eq!(loader.seed()[0].name, "Ann");
        assert_eq!(loader.seed()[0].details.len(), 2);
        assert!(loader.seed()[1].details.is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(RosterError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml("{}").unwrap();
        assert_eq!(loader.server().bind_address, "127.0.0.1:8080");
        assert!(loader.seed().is_empty());
    }

    #[test]
    fn test_invalid_yaml_returns_message() {
        let result = ConfigLoader::from_yaml("server: [unterminated");
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_without_details_defaults_to_empty() {
        let yaml = r#"
seed:
  - name: Bo
    position: QA
"#;
        let loader = ConfigLoader::from_yaml(yaml).unwrap();
        assert_eq!(loader.seed()[0].id, None);
        assert!(loader.seed()[0].details.is_empty());
    }
}
