//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// urlwarden - URL risk checker for phishing analysis services
///
/// Submit a URL to an analysis service and get a colored verdict in the
/// terminal, or a Markdown/JSON report for automation.
///
/// Examples:
///   urlwarden example.com
///   urlwarden https://login-secure-update.xyz --fail-on medium
///   urlwarden example.com --format json --output verdict.json
///   urlwarden example.com --endpoint http://risk.internal:8080
///   urlwarden --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// URL to analyze
    ///
    /// Sent to the service exactly as typed; a bare domain is fine.
    /// Not required when using --init-config.
    #[arg(value_name = "URL", required_unless_present = "init_config")]
    pub url: Option<String>,

    /// Analysis service endpoint URL
    ///
    /// The /analyze path is appended automatically. Defaults to the value
    /// from .urlwarden.toml (http://localhost:10000 out of the box).
    #[arg(short, long, value_name = "URL", env = "URLWARDEN_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    ///
    /// How long to wait for the service to answer. Default: from config
    /// or 30s.
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format (text, markdown, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fail if the verdict is at or above this severity
    ///
    /// Useful for CI pipelines. Exit code 2 when the threshold is met.
    /// Values: low, medium, high
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<ThresholdLevel>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .urlwarden.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (no spinner, minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .urlwarden.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal report (default)
    #[default]
    Text,
    /// Markdown format
    Markdown,
    /// JSON format
    Json,
}

/// Severity threshold for --fail-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ThresholdLevel {
    Low,
    Medium,
    High,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the target URL, empty if not set (should be validated first).
    pub fn target_url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // The URL itself is not inspected further; the service decides
        // what it can analyze.
        if self.target_url().trim().is_empty() {
            return Err("Please enter a URL".to_string());
        }

        // Validate endpoint format if provided
        if let Some(ref endpoint) = self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err("Endpoint URL must start with 'http://' or 'https://'".to_string());
            }
        }

        // Validate timeout if provided
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
