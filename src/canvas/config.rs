//! Configuration for markup canvases

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a canvas configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read canvas config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse canvas config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options controlling how drawing calls are serialized
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// XML-escape attribute values and text content.
    ///
    /// Off by default: callers may embed pre-rendered markup as text.
    pub escape: bool,
}

impl CanvasConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether values and text are escaped
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load a configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

impl FromStr for CanvasConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CanvasConfig::default();
        assert!(!config.escape);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CanvasConfig::new().with_escape(true);
        assert!(config.escape);
    }

    #[test]
    fn test_parse_toml() {
        let config = CanvasConfig::parse("escape = true").expect("Should parse");
        assert!(config.escape);

        let config = CanvasConfig::parse("").expect("Should parse");
        assert_eq!(config, CanvasConfig::default());
    }

    #[test]
    fn test_parse_through_from_str() {
        let config: CanvasConfig = "escape = true".parse().expect("Should parse");
        assert_eq!(config, CanvasConfig::new().with_escape(true));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = CanvasConfig::parse("escpae = true");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = CanvasConfig::from_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
