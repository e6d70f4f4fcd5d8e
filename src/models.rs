//! Data models for the URL risk client.
//!
//! This module contains the wire types exchanged with the analysis
//! service and the view-model every renderer consumes.

use chrono::{DateTime, Utc};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    /// The URL exactly as the user typed it. The service does its own
    /// parsing, so no normalization happens on this side.
    pub url: String,
}

/// Verdict returned by the analysis service.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    /// Qualitative label such as "Low Risk" or "Suspicious". Open-ended;
    /// labels this client has never seen are treated as high risk.
    pub level: String,
    /// Risk score on a 0-100 scale. A busy service can sum past 100, so
    /// the raw value is kept as sent.
    pub risk: u32,
    /// Human-readable findings, each optionally carrying a marker glyph
    /// (see [`crate::details`]).
    #[serde(default)]
    pub details: Vec<String>,
}

/// Severity bucket derived from the service's level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// "Low Risk" - nothing alarming.
    Low,
    /// "Suspicious" - worth a closer look.
    Medium,
    /// Everything else, including labels added to the service after
    /// this client shipped.
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

impl Severity {
    /// Maps the service's level label to a severity bucket.
    ///
    /// The match is exact and case-sensitive: only the two known labels
    /// get a reduced bucket, every other string (empty included) falls
    /// through to high. Unknown labels are deliberately not an error.
    pub fn from_level(level: &str) -> Self {
        match level {
            "Low Risk" => Severity::Low,
            "Suspicious" => Severity::Medium,
            _ => Severity::High,
        }
    }

    /// Terminal color used for the badge and the risk bar.
    pub fn color(&self) -> Color {
        match self {
            Severity::Low => Color::Green,
            Severity::Medium => Color::Yellow,
            Severity::High => Color::Red,
        }
    }

    /// Returns an emoji representation of the severity.
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Low => "🟢",
            Severity::Medium => "🟡",
            Severity::High => "🔴",
        }
    }
}

/// Category of a single finding, derived from its marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    /// Carried a `❌` marker - a reason to distrust the URL.
    Danger,
    /// Carried a `⚠` marker - merits caution.
    Warning,
    /// Carried an `ℹ` marker - neutral observation.
    Info,
    /// No marker at all - good news.
    Success,
}

impl fmt::Display for DetailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailKind::Danger => write!(f, "Danger"),
            DetailKind::Warning => write!(f, "Warning"),
            DetailKind::Info => write!(f, "Info"),
            DetailKind::Success => write!(f, "OK"),
        }
    }
}

impl DetailKind {
    /// Icon rendered next to the finding text. Success entries get the
    /// check mark even though no glyph in the input selects them.
    pub fn icon(&self) -> &'static str {
        match self {
            DetailKind::Danger => "❌",
            DetailKind::Warning => "⚠",
            DetailKind::Info => "ℹ",
            DetailKind::Success => "✔",
        }
    }

    /// Terminal color for the finding line.
    pub fn color(&self) -> Color {
        match self {
            DetailKind::Danger => Color::Red,
            DetailKind::Warning => Color::Yellow,
            DetailKind::Info => Color::Cyan,
            DetailKind::Success => Color::Green,
        }
    }
}

/// A single classified finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    /// Category decided by the marker glyph, or success without one.
    pub kind: DetailKind,
    /// Finding text with all marker glyphs removed and the ends trimmed.
    pub text: String,
}

/// Tallies of findings by kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DetailSummary {
    /// Total number of findings.
    pub total: usize,
    /// Number of danger findings.
    pub danger: usize,
    /// Number of warning findings.
    pub warning: usize,
    /// Number of informational findings.
    pub info: usize,
    /// Number of findings with no marker.
    pub success: usize,
}

impl DetailSummary {
    /// Creates a summary from a list of classified findings.
    pub fn from_entries(entries: &[DetailEntry]) -> Self {
        let mut summary = Self::default();
        summary.total = entries.len();

        for entry in entries {
            match entry.kind {
                DetailKind::Danger => summary.danger += 1,
                DetailKind::Warning => summary.warning += 1,
                DetailKind::Info => summary.info += 1,
                DetailKind::Success => summary.success += 1,
            }
        }

        summary
    }
}

/// Metadata about one scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMetadata {
    /// The URL that was submitted.
    pub url: String,
    /// Endpoint of the service that produced the verdict.
    pub endpoint: String,
    /// Date and time the scan finished.
    pub scanned_at: DateTime<Utc>,
    /// Wall-clock duration of the request in seconds.
    pub duration_seconds: f64,
}

/// The complete, render-ready result of one scan.
///
/// Every output format consumes this and nothing else. It is built from
/// scratch per scan, so no finding can leak in from a previous run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    /// Metadata about the scan.
    pub metadata: ScanMetadata,
    /// The service's level label, verbatim. This is the badge text.
    pub level: String,
    /// Severity bucket derived from `level`.
    pub severity: Severity,
    /// Raw risk score, kept as sent even when it exceeds 100.
    pub risk: u32,
    /// Findings in response order.
    pub details: Vec<DetailEntry>,
    /// Summary statistics of the findings.
    pub summary: DetailSummary,
}

impl RiskReport {
    /// Assembles the view-model from an already-classified verdict.
    ///
    /// Severity and summary are derived here so they can never drift
    /// from the level and findings they describe.
    pub fn new(metadata: ScanMetadata, level: String, risk: u32, details: Vec<DetailEntry>) -> Self {
        let severity = Severity::from_level(&level);
        let summary = DetailSummary::from_entries(&details);

        Self {
            metadata,
            level,
            severity,
            risk,
            details,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ScanMetadata {
        ScanMetadata {
            url: "example.com".to_string(),
            endpoint: "http://localhost:10000".to_string(),
            scanned_at: Utc::now(),
            duration_seconds: 0.2,
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_severity_from_known_levels() {
        assert_eq!(Severity::from_level("Low Risk"), Severity::Low);
        assert_eq!(Severity::from_level("Suspicious"), Severity::Medium);
        assert_eq!(Severity::from_level("High Risk"), Severity::High);
    }

    #[test]
    fn test_severity_from_level_is_case_sensitive() {
        assert_eq!(Severity::from_level("low risk"), Severity::High);
        assert_eq!(Severity::from_level("LOW RISK"), Severity::High);
        assert_eq!(Severity::from_level("suspicious"), Severity::High);
    }

    #[test]
    fn test_severity_from_unknown_level_is_high() {
        assert_eq!(Severity::from_level(""), Severity::High);
        assert_eq!(Severity::from_level("Malicious"), Severity::High);
        assert_eq!(Severity::from_level("Low Risk "), Severity::High);
    }

    #[test]
    fn test_severity_color() {
        assert_eq!(Severity::Low.color(), Color::Green);
        assert_eq!(Severity::Medium.color(), Color::Yellow);
        assert_eq!(Severity::High.color(), Color::Red);
    }

    #[test]
    fn test_detail_kind_icon() {
        assert_eq!(DetailKind::Danger.icon(), "❌");
        assert_eq!(DetailKind::Warning.icon(), "⚠");
        assert_eq!(DetailKind::Info.icon(), "ℹ");
        assert_eq!(DetailKind::Success.icon(), "✔");
    }

    #[test]
    fn test_detail_summary_counts() {
        let entries = vec![
            DetailEntry {
                kind: DetailKind::Danger,
                text: "Domain uses an IP address".to_string(),
            },
            DetailEntry {
                kind: DetailKind::Warning,
                text: "No HTTPS".to_string(),
            },
            DetailEntry {
                kind: DetailKind::Warning,
                text: "Long URL".to_string(),
            },
            DetailEntry {
                kind: DetailKind::Success,
                text: "Domain looks normal".to_string(),
            },
        ];

        let summary = DetailSummary::from_entries(&entries);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.danger, 1);
        assert_eq!(summary.warning, 2);
        assert_eq!(summary.info, 0);
        assert_eq!(summary.success, 1);
    }

    #[test]
    fn test_report_derives_severity_and_summary() {
        let entries = vec![DetailEntry {
            kind: DetailKind::Info,
            text: "Shortened URL".to_string(),
        }];

        let report = RiskReport::new(metadata(), "Suspicious".to_string(), 55, entries);
        assert_eq!(report.severity, Severity::Medium);
        assert_eq!(report.level, "Suspicious");
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.summary.info, 1);
    }

    #[test]
    fn test_report_is_rebuilt_per_scan() {
        let first = RiskReport::new(
            metadata(),
            "High Risk".to_string(),
            80,
            vec![
                DetailEntry {
                    kind: DetailKind::Danger,
                    text: "Blacklisted domain".to_string(),
                },
                DetailEntry {
                    kind: DetailKind::Danger,
                    text: "Punycode homoglyph".to_string(),
                },
            ],
        );
        assert_eq!(first.summary.total, 2);

        let second = RiskReport::new(metadata(), "Low Risk".to_string(), 5, Vec::new());
        assert_eq!(second.summary.total, 0);
        assert!(second.details.is_empty());
        assert_eq!(second.severity, Severity::Low);
    }

    #[test]
    fn test_risk_above_100_is_preserved() {
        let report = RiskReport::new(metadata(), "High Risk".to_string(), 140, Vec::new());
        assert_eq!(report.risk, 140);
    }
}
