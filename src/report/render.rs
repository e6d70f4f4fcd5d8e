//! Terminal rendering of scan verdicts.
//!
//! The renderer consumes the [`RiskReport`] view-model and writes to any
//! `io::Write`, so tests can render into a buffer instead of a live
//! terminal.

use crate::models::{DetailKind, RiskReport};
use colored::Colorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 52;

/// Render the full report card.
pub fn render_report<W: Write>(
    report: &RiskReport,
    bar_width: usize,
    out: &mut W,
) -> io::Result<()> {
    let color = report.severity.color();
    let rule = "═".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", rule.bright_black())?;
    writeln!(out, "{}", "                  URL RISK REPORT".bold())?;
    writeln!(out, "{}", rule.bright_black())?;
    writeln!(out)?;

    writeln!(out, "  {} {}", "URL:".bold(), report.metadata.url)?;
    writeln!(
        out,
        "  {} {}",
        "Verdict:".bold(),
        report.level.color(color).bold()
    )?;
    writeln!(out, "  {} {}/100", "Risk Score:".bold(), report.risk)?;

    let bar = bar_string(report.risk, bar_width);
    writeln!(
        out,
        "  [{}] {}",
        bar.color(color),
        percent_label(report.risk)
    )?;
    writeln!(out)?;

    if report.details.is_empty() {
        writeln!(out, "  {}", "No findings reported.".bright_black())?;
    } else {
        writeln!(out, "  {}", "Findings:".bold())?;
        for entry in &report.details {
            writeln!(
                out,
                "    {} {}",
                entry.kind.icon().color(entry.kind.color()),
                entry.text
            )?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "  {} Danger: {} | {} Warning: {} | {} Info: {} | {} OK: {}",
            DetailKind::Danger.icon(),
            report.summary.danger,
            DetailKind::Warning.icon(),
            report.summary.warning,
            DetailKind::Info.icon(),
            report.summary.info,
            DetailKind::Success.icon(),
            report.summary.success
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", rule.bright_black())?;

    Ok(())
}

/// Proportional bar of `width` cells.
///
/// Only the filled span is clamped at 100; the label next to the bar
/// still shows the raw score.
pub(crate) fn bar_string(risk: u32, width: usize) -> String {
    let filled = filled_cells(risk, width);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}

/// Number of filled cells for a score.
fn filled_cells(risk: u32, width: usize) -> usize {
    (risk.min(100) as usize * width) / 100
}

/// The percent label shown next to the bar, always the raw score.
pub(crate) fn percent_label(risk: u32) -> String {
    format!("{}%", risk)
}
