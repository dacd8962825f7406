//! Report type definitions for the derived model.
//!
//! The report model is pure derived state: it is rebuilt from the record list
//! on every request and has no identity of its own.

use crate::style::color_for_status;

/// Count of records carrying one distinct status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// A slice of the unit interval owned by one status.
///
/// Segments appear in first-occurrence order of their status and partition
/// `[0, 1]`: each `start_fraction` is the previous segment's `end_fraction`
/// and the last segment ends at exactly 1.0.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub status: String,
    pub count: usize,
    pub start_fraction: f64,
    pub end_fraction: f64,
}

impl Segment {
    /// Width of this segment as a fraction of the total
    pub fn fraction(&self) -> f64 {
        self.end_fraction - self.start_fraction
    }
}

/// Aggregate view over a record list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportModel {
    /// Number of input records
    pub total: usize,
    /// Distinct statuses with counts, in first-occurrence order
    pub status_breakdown: Vec<StatusCount>,
    /// Pie segments, same order as `status_breakdown`
    pub segments: Vec<Segment>,
}

impl ReportModel {
    /// Count for a status, 0 when absent. Case-sensitive.
    pub fn count_for(&self, status: &str) -> usize {
        self.status_breakdown.iter().find(|s| s.status == status).map(|s| s.count).unwrap_or(0)
    }

    /// Share of `count` in the total as a percentage (0.0 for an empty model)
    pub fn percent_of(&self, count: usize) -> f64 {
        if self.total == 0 { 0.0 } else { count as f64 / self.total as f64 * 100.0 }
    }

    /// Conic-gradient color stops, e.g. `#22c55e 0.00% 85.71%, #3b82f6 85.71% 100.00%`.
    pub fn gradient_stops(&self) -> String {
        self.segments
            .iter()
            .map(|seg| {
                format!(
                    "{} {:.2}% {:.2}%",
                    color_for_status(&seg.status),
                    seg.start_fraction * 100.0,
                    seg.end_fraction * 100.0
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Where the headline numbers of a report come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadlineMode {
    /// Computed from the records being reported
    #[default]
    Derived,
    /// Legacy fixed figures from the dashboard mock-ups
    Static,
}

impl HeadlineMode {
    pub fn from_static_flag(use_static_placeholders: bool) -> Self {
        if use_static_placeholders { HeadlineMode::Static } else { HeadlineMode::Derived }
    }
}

/// The four summary figures shown at the top of every report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeadlineStats {
    pub completed_flights: usize,
    pub active_missions: usize,
    /// Pre-formatted ("98.7%", or "N/A" when there are no records)
    pub success_rate: String,
    pub stat_alerts: usize,
    pub mode: HeadlineMode,
}

impl HeadlineStats {
    /// (label, value) pairs in display order
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Completed Flights", self.completed_flights.to_string()),
            ("Active Missions", self.active_missions.to_string()),
            ("Success Rate", self.success_rate.clone()),
            ("STAT Alerts", self.stat_alerts.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ReportModel {
        ReportModel {
            total: 4,
            status_breakdown: vec![
                StatusCount { status: "completed".to_string(), count: 3 },
                StatusCount { status: "resolved".to_string(), count: 1 },
            ],
            segments: vec![
                Segment { status: "completed".to_string(), count: 3, start_fraction: 0.0, end_fraction: 0.75 },
                Segment { status: "resolved".to_string(), count: 1, start_fraction: 0.75, end_fraction: 1.0 },
            ],
        }
    }

    #[test]
    fn test_count_for() {
        let m = model();
        assert_eq!(m.count_for("completed"), 3);
        assert_eq!(m.count_for("Completed"), 0);
        assert_eq!(m.count_for("pending"), 0);
    }

    #[test]
    fn test_gradient_stops() {
        assert_eq!(model().gradient_stops(), "#22c55e 0.00% 75.00%, #3b82f6 75.00% 100.00%");
    }

    #[test]
    fn test_percent_of_empty_model() {
        let m = ReportModel { total: 0, status_breakdown: vec![], segments: vec![] };
        assert_eq!(m.percent_of(0), 0.0);
        assert_eq!(m.gradient_stops(), "");
    }

    #[test]
    fn test_headline_cards_order() {
        let stats = HeadlineStats {
            completed_flights: 24,
            active_missions: 3,
            success_rate: "98.7%".to_string(),
            stat_alerts: 2,
            mode: HeadlineMode::Static,
        };
        let labels: Vec<_> = stats.cards().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Completed Flights", "Active Missions", "Success Rate", "STAT Alerts"]);
        assert_eq!(stats.cards()[2].1, "98.7%");
    }
}
