//! Report generation module - Data transformations and business logic.
//!
//! This module handles:
//! - Aggregating records into status breakdowns and pie segments
//! - Headline statistics (derived or legacy placeholders)
//! - Export to HTML documents and JSON
//! - The console view of the same report
//!
//! Console rendering primitives live in the console_format module.
//!
//! # Module Organization
//!
//! - `types` - Report model types (ReportModel, Segment, HeadlineStats)
//! - `stats` - Aggregation and headline statistics
//! - `export` - HTML document and JSON export
//! - `table` - Console table and summary output

mod export;
mod stats;
mod table;
mod types;

// Re-export types
pub use types::HeadlineMode;

// Re-export stats functions
pub use stats::{aggregate, headline_stats};

// Re-export export functions
pub use export::{DocumentOptions, export_json_report, json_report, render_report, write_html_report};

// Re-export table functions
pub use table::{print_breakdown, print_headline, print_records_table};
