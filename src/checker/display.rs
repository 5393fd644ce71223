// src/checker/display.rs
// =============================================================================
// This module maps a backlink status to its display affordances.
//
// Pure functions only: status in, (icon, label, severity) out. The actual
// printing happens in main.rs; this module just decides WHAT to show.
// =============================================================================

use crate::checker::mock::BacklinkStatus;
use crate::i18n::{self, Language};

// How serious a status is, for callers that color or sort output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The link is fine
    Success,
    /// The link needs attention
    Failure,
    /// The link works but not as expected
    Warning,
    /// Nothing conclusive yet
    Neutral,
}

/// Icon shown next to a result row
pub fn status_icon(status: BacklinkStatus) -> &'static str {
    match status {
        BacklinkStatus::Active => "✅",
        BacklinkStatus::Broken => "❌",
        BacklinkStatus::Redirect => "🔀",
        BacklinkStatus::Pending => "⏳",
    }
}

/// Localized label for the status badge
pub fn status_label(status: BacklinkStatus, language: Language) -> &'static str {
    match status {
        BacklinkStatus::Active => i18n::status_active(language),
        BacklinkStatus::Broken => i18n::status_broken(language),
        BacklinkStatus::Redirect => i18n::status_redirect(language),
        // The in-flight state reuses the "Checking..." wording
        BacklinkStatus::Pending => i18n::status_checking(language),
    }
}

/// Severity class for the status
pub fn status_severity(status: BacklinkStatus) -> Severity {
    match status {
        BacklinkStatus::Active => Severity::Success,
        BacklinkStatus::Broken => Severity::Failure,
        BacklinkStatus::Redirect => Severity::Warning,
        BacklinkStatus::Pending => Severity::Neutral,
    }
}

/// Icon and label combined, ready for a table cell
pub fn format_status(status: BacklinkStatus, language: Language) -> String {
    format!("{} {}", status_icon(status), status_label(status, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(status_severity(BacklinkStatus::Active), Severity::Success);
        assert_eq!(status_severity(BacklinkStatus::Broken), Severity::Failure);
        assert_eq!(status_severity(BacklinkStatus::Redirect), Severity::Warning);
        assert_eq!(status_severity(BacklinkStatus::Pending), Severity::Neutral);
    }

    #[test]
    fn test_labels_follow_language() {
        assert_eq!(
            status_label(BacklinkStatus::Broken, Language::English),
            "Broken"
        );
        assert_eq!(
            status_label(BacklinkStatus::Broken, Language::Turkish),
            "Kırık"
        );
    }

    #[test]
    fn test_format_combines_icon_and_label() {
        let formatted = format_status(BacklinkStatus::Active, Language::English);
        assert_eq!(formatted, "✅ Active");
    }
}
