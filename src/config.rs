//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.urlwarden.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Analysis service settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Report rendering settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Analysis service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service root URL; the client appends `/analyze` itself.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:10000".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Report rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Colorize terminal output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Width of the risk bar in cells.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: true,
            bar_width: default_bar_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_bar_width() -> usize {
    30
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".urlwarden.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref endpoint) = args.endpoint {
            self.service.endpoint = endpoint.clone();
        }

        if let Some(timeout) = args.timeout {
            self.service.timeout_seconds = timeout;
        }

        // Flags always override
        if args.no_color {
            self.report.color = false;
        }
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, OutputFormat};

    fn make_args() -> Args {
        Args {
            url: Some("example.com".to_string()),
            endpoint: None,
            timeout: None,
            format: OutputFormat::Text,
            output: None,
            fail_on: None,
            config: None,
            no_color: false,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.endpoint, "http://localhost:10000");
        assert_eq!(config.service.timeout_seconds, 30);
        assert!(config.report.color);
        assert_eq!(config.report.bar_width, 30);
        assert!(!config.general.verbose);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[service]
endpoint = "http://risk.internal:8080"
timeout_seconds = 5

[report]
color = false
bar_width = 20
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.service.endpoint, "http://risk.internal:8080");
        assert_eq!(config.service.timeout_seconds, 5);
        assert!(!config.report.color);
        assert_eq!(config.report.bar_width, 20);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[service]\nendpoint = \"http://10.0.0.5:10000\"\n")
            .unwrap();
        assert_eq!(config.service.endpoint, "http://10.0.0.5:10000");
        assert_eq!(config.service.timeout_seconds, 30);
        assert!(config.report.color);
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let mut args = make_args();
        args.endpoint = Some("http://risk.internal:8080".to_string());
        args.timeout = Some(10);
        args.no_color = true;
        args.verbose = true;

        config.merge_with_args(&args);
        assert_eq!(config.service.endpoint, "http://risk.internal:8080");
        assert_eq!(config.service.timeout_seconds, 10);
        assert!(!config.report.color);
        assert!(config.general.verbose);
    }

    #[test]
    fn test_merge_without_overrides_keeps_config() {
        let mut config = Config::default();
        config.service.endpoint = "http://risk.internal:8080".to_string();
        config.report.color = false;

        config.merge_with_args(&make_args());
        assert_eq!(config.service.endpoint, "http://risk.internal:8080");
        assert!(!config.report.color);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".urlwarden.toml");
        std::fs::write(&path, "[service]\nendpoint = \"http://risk.internal:8080\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.service.endpoint, "http://risk.internal:8080");
        assert_eq!(config.service.timeout_seconds, 30);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".urlwarden.toml");
        std::fs::write(&path, "endpoint = [not toml").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[service]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("endpoint"));
    }
}
