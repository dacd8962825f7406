//! Statistics and summary generation for flight-log records.
//!
//! This module turns a record list into the aggregate report model and the
//! headline figures shown on reports.

use super::types::{HeadlineMode, HeadlineStats, ReportModel, Segment, StatusCount};
use crate::error::ReportError;
use crate::types::EventRecord;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Legacy dashboard figures, shown when static placeholders are requested
const PLACEHOLDER_COMPLETED: usize = 24;
const PLACEHOLDER_ACTIVE: usize = 3;
const PLACEHOLDER_SUCCESS_RATE: &str = "98.7%";
const PLACEHOLDER_STAT_ALERTS: usize = 2;

/// Build the aggregate report model from records.
///
/// Statuses are counted case-sensitively in a single pass and kept in the
/// order they first appear. Segment boundaries accumulate `count / total` in
/// that same order; the final boundary is pinned to 1.0.
///
/// # Errors
/// `ReportError::InputShape` if any record has an empty status. The whole
/// call fails; no partial model is returned.
pub fn aggregate(records: &[EventRecord]) -> Result<ReportModel, ReportError> {
    let mut status_breakdown: Vec<StatusCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        if !record.has_status() {
            return Err(ReportError::InputShape { index, identifier: record.identifier.clone() });
        }

        match positions.get(record.status.as_str()) {
            Some(&pos) => status_breakdown[pos].count += 1,
            None => {
                positions.insert(record.status.as_str(), status_breakdown.len());
                status_breakdown.push(StatusCount { status: record.status.clone(), count: 1 });
            }
        }
    }

    let total = records.len();
    let mut segments = Vec::with_capacity(status_breakdown.len());
    let mut cumulative = 0usize;
    let last = status_breakdown.len().saturating_sub(1);

    for (i, entry) in status_breakdown.iter().enumerate() {
        let start_fraction = segments.last().map(|s: &Segment| s.end_fraction).unwrap_or(0.0);
        cumulative += entry.count;
        // Accumulating integer counts keeps the boundaries reproducible
        let end_fraction = if i == last { 1.0 } else { cumulative as f64 / total as f64 };
        segments.push(Segment { status: entry.status.clone(), count: entry.count, start_fraction, end_fraction });
    }

    debug!("aggregated {} records into {} status segments", total, segments.len());

    Ok(ReportModel { total, status_breakdown, segments })
}

/// Compute the four headline figures for a report.
///
/// In `Derived` mode:
/// - completed flights: records with status "completed"
/// - active missions: distinct identifiers with at least one record that is
///   neither "completed" nor "resolved"
/// - success rate: (completed + resolved) / total, one decimal
/// - STAT alerts: STAT-priority records that are not "completed"
pub fn headline_stats(records: &[EventRecord], model: &ReportModel, mode: HeadlineMode) -> HeadlineStats {
    if mode == HeadlineMode::Static {
        return HeadlineStats {
            completed_flights: PLACEHOLDER_COMPLETED,
            active_missions: PLACEHOLDER_ACTIVE,
            success_rate: PLACEHOLDER_SUCCESS_RATE.to_string(),
            stat_alerts: PLACEHOLDER_STAT_ALERTS,
            mode,
        };
    }

    let completed = model.count_for("completed");
    let resolved = model.count_for("resolved");

    let active: HashSet<&str> = records
        .iter()
        .filter(|r| r.status != "completed" && r.status != "resolved")
        .map(|r| r.identifier.as_str())
        .collect();

    let stat_alerts = records.iter().filter(|r| r.is_stat() && r.status != "completed").count();

    let success_rate = if model.total == 0 {
        "N/A".to_string()
    } else {
        format!("{:.1}%", model.percent_of(completed + resolved))
    };

    HeadlineStats { completed_flights: completed, active_missions: active.len(), success_rate, stat_alerts, mode }
}
