//! Markdown and JSON report generation.
//!
//! This module generates the file-oriented report formats from a
//! scan verdict.

use crate::models::{DetailKind, RiskReport, ScanMetadata};
use anyhow::Result;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &RiskReport) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Urlwarden Report\n\n");

    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_verdict_section(report));
    output.push_str(&generate_findings_section(report));
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ScanMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **URL:** {}\n", metadata.url));
    section.push_str(&format!("- **Service:** {}\n", metadata.endpoint));
    section.push_str(&format!(
        "- **Scan Date:** {}\n",
        metadata.scanned_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Scan Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push_str("\n");

    section
}

/// Generate the verdict section.
fn generate_verdict_section(report: &RiskReport) -> String {
    let mut section = String::new();

    section.push_str("## Verdict\n\n");
    section.push_str(&format!(
        "{} **{}** | Risk Score: {}/100\n\n",
        report.severity.emoji(),
        report.level,
        report.risk
    ));
    section.push_str(&format!(
        "`{}` {}\n\n",
        super::render::bar_string(report.risk, 20),
        super::render::percent_label(report.risk)
    ));

    section
}

/// Generate the findings section.
fn generate_findings_section(report: &RiskReport) -> String {
    let mut section = String::new();

    section.push_str("## Findings\n\n");

    if report.details.is_empty() {
        section.push_str("No findings reported.\n\n");
        return section;
    }

    // Kind breakdown
    section.push_str(&format!(
        "| {} Danger | {} Warning | {} Info | {} OK | **Total** |\n",
        DetailKind::Danger.icon(),
        DetailKind::Warning.icon(),
        DetailKind::Info.icon(),
        DetailKind::Success.icon(),
    ));
    section.push_str("|:---:|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {} | {} | {} | **{}** |\n\n",
        report.summary.danger,
        report.summary.warning,
        report.summary.info,
        report.summary.success,
        report.summary.total
    ));

    for entry in &report.details {
        section.push_str(&format!("- {} {}\n", entry.kind.icon(), entry.text));
    }
    section.push_str("\n");

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by urlwarden*\n");

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &RiskReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
