//! urlwarden - URL risk checker
//!
//! A CLI client that submits a URL to an analysis service and renders
//! the verdict: a qualitative level, a 0-100 risk score and a list of
//! categorized findings.
//!
//! Exit codes:
//!   0 - Success (verdict below --fail-on threshold, or no --fail-on set)
//!   1 - Runtime error (connection, config, bad input, etc.)
//!   2 - Verdict at or above --fail-on threshold

mod cli;
mod client;
mod config;
mod details;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat, ThresholdLevel};
use client::AnalyzerClient;
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use models::{RiskReport, ScanMetadata, Severity};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("urlwarden v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the scan
    match run_scan(args).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Scan failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .urlwarden.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".urlwarden.toml");

    if path.exists() {
        eprintln!("⚠️  .urlwarden.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .urlwarden.toml")?;

    println!("✅ Created .urlwarden.toml with default settings.");
    println!("   Edit it to customize the service endpoint, timeout, and report style.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete scan workflow. Returns exit code (0 or 2).
async fn run_scan(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Keep ANSI escapes out of files and uncolored terminals
    if !config.report.color || args.output.is_some() {
        colored::control::set_override(false);
    }

    let url = args.target_url().to_string();
    let endpoint = config.service.endpoint.clone();

    if !args.quiet {
        eprintln!("🔍 Analyzing URL: {}", url);
    }
    info!("Using analysis service at {}", endpoint);

    let client = AnalyzerClient::new(&endpoint, config.service.timeout_seconds)?;

    // Capture the result first; the spinner must be cleared on the
    // error path too.
    let spinner = new_spinner("Waiting for the analysis service...", args.quiet);
    let result = client.analyze(&url).await;
    spinner.finish_and_clear();

    let verdict = result.with_context(|| format!("Analysis of {} failed", url))?;
    let duration = start_time.elapsed().as_secs_f64();

    debug!(
        "Verdict: level={:?} risk={} details={}",
        verdict.level,
        verdict.risk,
        verdict.details.len()
    );

    // Build the report
    let entries = details::classify_all(&verdict.details);
    let metadata = ScanMetadata {
        url: url.clone(),
        endpoint,
        scanned_at: Utc::now(),
        duration_seconds: duration,
    };
    let report = RiskReport::new(metadata, verdict.level, verdict.risk, entries);

    emit_report(&args, &config, &report)?;

    // Check --fail-on threshold
    if let Some(fail_level) = args.fail_on {
        let threshold = threshold_to_severity(fail_level);
        if report.severity >= threshold {
            eprintln!(
                "\n⛔ Verdict at or above {:?} severity. Failing (exit code 2).",
                fail_level
            );
            return Ok(2);
        }
    }

    Ok(0)
}

/// Format the report and write it to stdout or the requested file.
fn emit_report(args: &Args, config: &Config, report: &RiskReport) -> Result<()> {
    let output = match args.format {
        OutputFormat::Text => {
            let mut buf = Vec::new();
            report::render_report(report, config.report.bar_width, &mut buf)?;
            String::from_utf8(buf).context("Rendered report was not valid UTF-8")?
        }
        OutputFormat::Markdown => report::generate_markdown_report(report),
        OutputFormat::Json => report::generate_json_report(report)?,
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("\n✅ Scan complete! Report saved to: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Spinner shown while the request is in flight. Hidden in quiet mode.
fn new_spinner(msg: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Convert ThresholdLevel to Severity for comparison.
fn threshold_to_severity(level: ThresholdLevel) -> Severity {
    match level {
        ThresholdLevel::Low => Severity::Low,
        ThresholdLevel::Medium => Severity::Medium,
        ThresholdLevel::High => Severity::High,
    }
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .urlwarden.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
