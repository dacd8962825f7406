//! Status and priority style mapping.
//!
//! One lookup table feeds the console table, the HTML document and the pie
//! segment colors, so the screen view and the exported report can never
//! disagree about how a tag is displayed.
//!
//! Matching is case-sensitive: "Completed" is not "completed". Backends that
//! emit capitalized tags fall through to the neutral/standard category.

use term::color::Color;

/// Which kind of tag is being styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Status,
    Priority,
}

/// Display category for a status or priority tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    /// Status: completed
    Success,
    /// Status: resolved, in-transit
    Informational,
    /// Status: pending, preparing
    Caution,
    /// Any other status
    Neutral,
    /// Priority: STAT, Critical
    Urgent,
    /// Priority: High
    Elevated,
    /// Any other priority
    Standard,
}

const STATUS_TABLE: &[(&str, DisplayCategory)] = &[
    ("completed", DisplayCategory::Success),
    ("resolved", DisplayCategory::Informational),
    ("in-transit", DisplayCategory::Informational),
    ("pending", DisplayCategory::Caution),
    ("preparing", DisplayCategory::Caution),
];

const PRIORITY_TABLE: &[(&str, DisplayCategory)] = &[
    ("STAT", DisplayCategory::Urgent),
    ("Critical", DisplayCategory::Urgent),
    ("High", DisplayCategory::Elevated),
];

/// Map a raw status or priority tag to its display category.
pub fn style_for(kind: StyleKind, value: &str) -> DisplayCategory {
    let (table, fallback) = match kind {
        StyleKind::Status => (STATUS_TABLE, DisplayCategory::Neutral),
        StyleKind::Priority => (PRIORITY_TABLE, DisplayCategory::Standard),
    };

    table.iter().find(|(tag, _)| *tag == value).map(|(_, category)| *category).unwrap_or(fallback)
}

/// Hex color used for a status in the document pie and legend.
pub fn color_for_status(status: &str) -> &'static str {
    style_for(StyleKind::Status, status).hex()
}

impl DisplayCategory {
    /// Document color
    pub fn hex(&self) -> &'static str {
        match self {
            DisplayCategory::Success => "#22c55e",
            DisplayCategory::Informational => "#3b82f6",
            DisplayCategory::Caution => "#f59e0b",
            DisplayCategory::Neutral => "#64748b",
            DisplayCategory::Urgent => "#ef4444",
            DisplayCategory::Elevated => "#f97316",
            DisplayCategory::Standard => "#64748b",
        }
    }

    /// Console color
    pub fn term_color(&self) -> Color {
        match self {
            DisplayCategory::Success => term::color::BRIGHT_GREEN,
            DisplayCategory::Informational => term::color::BRIGHT_BLUE,
            DisplayCategory::Caution => term::color::BRIGHT_YELLOW,
            DisplayCategory::Neutral => term::color::WHITE,
            DisplayCategory::Urgent => term::color::BRIGHT_RED,
            DisplayCategory::Elevated => term::color::MAGENTA,
            DisplayCategory::Standard => term::color::WHITE,
        }
    }

    /// CSS class carried by document cells
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayCategory::Success => "cat-success",
            DisplayCategory::Informational => "cat-info",
            DisplayCategory::Caution => "cat-caution",
            DisplayCategory::Neutral => "cat-neutral",
            DisplayCategory::Urgent => "cat-urgent",
            DisplayCategory::Elevated => "cat-elevated",
            DisplayCategory::Standard => "cat-standard",
        }
    }

    /// Every category, in stylesheet order
    pub fn all() -> [DisplayCategory; 7] {
        [
            DisplayCategory::Success,
            DisplayCategory::Informational,
            DisplayCategory::Caution,
            DisplayCategory::Neutral,
            DisplayCategory::Urgent,
            DisplayCategory::Elevated,
            DisplayCategory::Standard,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        assert_eq!(style_for(StyleKind::Status, "completed"), DisplayCategory::Success);
        assert_eq!(style_for(StyleKind::Status, "resolved"), DisplayCategory::Informational);
        assert_eq!(style_for(StyleKind::Status, "in-transit"), DisplayCategory::Informational);
        assert_eq!(style_for(StyleKind::Status, "pending"), DisplayCategory::Caution);
        assert_eq!(style_for(StyleKind::Status, "preparing"), DisplayCategory::Caution);
        assert_eq!(style_for(StyleKind::Status, "maintenance"), DisplayCategory::Neutral);
        assert_eq!(style_for(StyleKind::Status, ""), DisplayCategory::Neutral);
    }

    #[test]
    fn test_priority_categories() {
        assert_eq!(style_for(StyleKind::Priority, "STAT"), DisplayCategory::Urgent);
        assert_eq!(style_for(StyleKind::Priority, "Critical"), DisplayCategory::Urgent);
        assert_eq!(style_for(StyleKind::Priority, "High"), DisplayCategory::Elevated);
        assert_eq!(style_for(StyleKind::Priority, "Standard"), DisplayCategory::Standard);
        assert_eq!(style_for(StyleKind::Priority, "Routine"), DisplayCategory::Standard);
    }

    #[test]
    fn test_matching_is_case_sensitive_on_purpose() {
        // Capitalized tags from a backend do not pick up the lowercase styling.
        assert_ne!(style_for(StyleKind::Status, "completed"), style_for(StyleKind::Status, "Completed"));
        assert_eq!(style_for(StyleKind::Status, "Completed"), DisplayCategory::Neutral);
        assert_eq!(style_for(StyleKind::Priority, "stat"), DisplayCategory::Standard);
    }

    #[test]
    fn test_kinds_do_not_share_entries() {
        // A priority tag used as a status is just an unknown status
        assert_eq!(style_for(StyleKind::Status, "STAT"), DisplayCategory::Neutral);
        assert_eq!(style_for(StyleKind::Priority, "completed"), DisplayCategory::Standard);
    }

    #[test]
    fn test_status_palette() {
        assert_eq!(color_for_status("completed"), "#22c55e");
        assert_eq!(color_for_status("resolved"), "#3b82f6");
        assert_eq!(color_for_status("cancelled"), "#64748b");
    }

    #[test]
    fn test_css_classes_are_unique() {
        let classes: std::collections::HashSet<_> = DisplayCategory::all().iter().map(|c| c.css_class()).collect();
        assert_eq!(classes.len(), DisplayCategory::all().len());
    }
}
