//! Classification of raw finding strings.
//!
//! The analysis service tags each finding by embedding a marker glyph
//! somewhere in the text: `❌` for dangers, `⚠` for warnings and `ℹ` for
//! neutral observations. A finding without any marker is good news. This
//! module turns those raw strings into tagged [`DetailEntry`] values once,
//! at the client boundary, so renderers never sniff substrings themselves.

use crate::models::{DetailEntry, DetailKind};

/// Marker for findings that are a reason to distrust the URL.
const DANGER_MARK: char = '❌';
/// Marker for findings that merit caution.
const WARNING_MARK: char = '⚠';
/// Marker for neutral, informational findings.
const INFO_MARK: char = 'ℹ';
/// Check mark some services embed in positive findings. Stripped from the
/// text like the others but never consulted for classification.
const SUCCESS_MARK: char = '✔';

/// Classifies one raw finding string.
///
/// Markers are checked in a fixed precedence order: danger first, then
/// warning, then info. A string carrying several glyphs lands in the most
/// alarming bucket it mentions. No marker at all means success. All four
/// glyphs are removed from the text regardless of which one decided the
/// kind, and surrounding whitespace is trimmed.
pub fn classify(raw: &str) -> DetailEntry {
    let kind = if raw.contains(DANGER_MARK) {
        DetailKind::Danger
    } else if raw.contains(WARNING_MARK) {
        DetailKind::Warning
    } else if raw.contains(INFO_MARK) {
        DetailKind::Info
    } else {
        DetailKind::Success
    };

    DetailEntry {
        kind,
        text: strip_markers(raw),
    }
}

/// Classifies every finding, preserving response order.
pub fn classify_all(raw: &[String]) -> Vec<DetailEntry> {
    raw.iter().map(|item| classify(item)).collect()
}

/// Removes every marker glyph and trims the surrounding whitespace.
fn strip_markers(raw: &str) -> String {
    raw.replace([DANGER_MARK, WARNING_MARK, INFO_MARK, SUCCESS_MARK], "")
        .trim()
        .to_string()
}
