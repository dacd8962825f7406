//! Report export functions for HTML and JSON formats.
//!
//! The HTML document is self-contained (inline stylesheet, no external
//! assets) so it can be printed to PDF or shared as-is. Delivery of the
//! produced bytes is up to the caller.

use super::stats::headline_stats;
use super::types::{HeadlineMode, HeadlineStats, ReportModel};
use crate::error::ReportError;
use crate::style::{DisplayCategory, StyleKind, color_for_status, style_for};
use crate::types::EventRecord;
use chrono::{DateTime, Local};
use log::debug;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Presentation options for a rendered document.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub title: String,
    pub subtitle: String,
    pub headline_mode: HeadlineMode,
    /// The only input that varies between otherwise identical renders
    pub generated_at: DateTime<Local>,
}

impl DocumentOptions {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, headline_mode: HeadlineMode) -> Self {
        Self { title: title.into(), subtitle: subtitle.into(), headline_mode, generated_at: Local::now() }
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self::new(
            "Flight Log System – Report",
            "Comprehensive flight event tracking and documentation",
            HeadlineMode::Derived,
        )
    }
}

/// Render records and their model into an HTML report document.
///
/// Sections, in order: header with generation time, status overview (pie and
/// legend), headline cards, and the full event table in input order.
/// The caller is responsible for passing the model derived from `records`.
///
/// # Errors
/// `ReportError::Render` if the document could not be assembled.
pub fn render_report(
    records: &[EventRecord],
    model: &ReportModel,
    options: &DocumentOptions,
) -> Result<Vec<u8>, ReportError> {
    let headline = headline_stats(records, model, options.headline_mode);
    let mut html = String::with_capacity(8 * 1024 + records.len() * 256);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html>")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\" />")?;
    writeln!(html, "<title>{}</title>", escape_html(&options.title))?;
    write_stylesheet(&mut html, model)?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;

    writeln!(html, "<h1>{}</h1>", escape_html(&options.title))?;
    writeln!(html, "<div class=\"subtitle\">{}</div>", escape_html(&options.subtitle))?;
    writeln!(
        html,
        "<div class=\"header-meta\">Generated at: {}<br/>Total events: {}</div>",
        options.generated_at.format(TIMESTAMP_FORMAT),
        model.total
    )?;

    write_overview(&mut html, model)?;
    write_headline(&mut html, &headline)?;
    write_event_table(&mut html, records)?;

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    debug!("rendered report document: {} bytes, {} rows", html.len(), records.len());

    Ok(html.into_bytes())
}

fn write_stylesheet(html: &mut String, model: &ReportModel) -> std::fmt::Result {
    writeln!(html, "<style>")?;
    html.push_str(BASE_STYLESHEET);
    for category in DisplayCategory::all() {
        writeln!(html, ".{} {{ background-color: {}; color: #fff; }}", category.css_class(), category.hex())?;
    }
    let stops = model.gradient_stops();
    let background = if stops.is_empty() { "#e5e7eb".to_string() } else { format!("conic-gradient({})", stops) };
    writeln!(html, ".pie {{ background: {}; }}", background)?;
    writeln!(html, "</style>")
}

fn write_overview(html: &mut String, model: &ReportModel) -> std::fmt::Result {
    writeln!(html, "<h2>Flight Status Overview</h2>")?;
    writeln!(html, "<div class=\"chart-container\">")?;
    writeln!(html, "<div class=\"pie\"></div>")?;
    writeln!(html, "<div class=\"legend\">")?;
    if model.segments.is_empty() {
        writeln!(html, "<div class=\"legend-item\"><span class=\"legend-text\">No events</span></div>")?;
    }
    for seg in &model.segments {
        writeln!(
            html,
            "<div class=\"legend-item\"><span class=\"legend-color\" style=\"background-color:{};\"></span>\
             <span class=\"legend-text\">{} – {} ({:.1}%)</span></div>",
            color_for_status(&seg.status),
            escape_html(&seg.status),
            seg.count,
            model.percent_of(seg.count)
        )?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</div>")
}

fn write_headline(html: &mut String, headline: &HeadlineStats) -> std::fmt::Result {
    const CARD_CLASSES: [&str; 4] = ["summary-green", "summary-blue", "summary-purple", "summary-red"];

    writeln!(html, "<div class=\"summary-row\">")?;
    for ((label, value), class) in headline.cards().iter().zip(CARD_CLASSES) {
        writeln!(
            html,
            "<div class=\"summary-card {}\"><div class=\"summary-title\">{}</div>\
             <div class=\"summary-number\">{}</div></div>",
            class,
            label,
            escape_html(value)
        )?;
    }
    writeln!(html, "</div>")
}

fn write_event_table(html: &mut String, records: &[EventRecord]) -> std::fmt::Result {
    writeln!(html, "<h2>Flight Events Log</h2>")?;
    writeln!(html, "<table>")?;
    writeln!(html, "<thead>")?;
    writeln!(
        html,
        "<tr><th>Timestamp</th><th>Event</th><th>Flight ID</th><th>Location</th>\
         <th>Status</th><th>Priority</th><th>CoC</th><th>Temp</th></tr>"
    )?;
    writeln!(html, "</thead>")?;
    writeln!(html, "<tbody>")?;
    for record in records {
        let status_class = style_for(StyleKind::Status, &record.status).css_class();
        let priority_class = style_for(StyleKind::Priority, &record.priority).css_class();
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><span class=\"tag {}\">{}</span></td><td><span class=\"tag {}\">{}</span></td>\
             <td>{}</td><td>{}</td></tr>",
            escape_html(&record.timestamp),
            escape_html(&record.event),
            escape_html(&record.identifier),
            escape_html(&record.location),
            status_class,
            escape_html(&record.status),
            priority_class,
            escape_html(&record.priority),
            record.coc_display(),
            escape_html(&record.temperature)
        )?;
    }
    writeln!(html, "</tbody>")?;
    writeln!(html, "</table>")
}

/// Escape text for inclusion in HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the HTML report and write it to `output_path`.
pub fn write_html_report(
    output_path: &Path,
    records: &[EventRecord],
    model: &ReportModel,
    options: &DocumentOptions,
) -> Result<(), ReportError> {
    let bytes = render_report(records, model, options)?;

    let io_err = |source| ReportError::Io { path: output_path.to_path_buf(), source };
    let mut file = File::create(output_path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;

    debug!("wrote HTML report to {}", output_path.display());
    Ok(())
}

/// Build the JSON report value: summary, segments, headline and all records.
pub fn json_report(
    records: &[EventRecord],
    model: &ReportModel,
    headline: &HeadlineStats,
    generated_at: &DateTime<Local>,
) -> serde_json::Value {
    use serde_json::json;

    json!({
        "generated_at": generated_at.format(TIMESTAMP_FORMAT).to_string(),
        "total": model.total,
        "status_breakdown": model.status_breakdown,
        "segments": model.segments,
        "headline": headline,
        "records": records,
    })
}

/// Export the report as pretty-printed JSON.
pub fn export_json_report(
    output_path: &Path,
    records: &[EventRecord],
    model: &ReportModel,
    headline: &HeadlineStats,
    generated_at: &DateTime<Local>,
) -> Result<(), ReportError> {
    let report = json_report(records, model, headline, generated_at);

    let file = File::create(output_path).map_err(|source| ReportError::Io { path: output_path.to_path_buf(), source })?;
    serde_json::to_writer_pretty(file, &report)?;

    debug!("wrote JSON report to {}", output_path.display());
    Ok(())
}

const BASE_STYLESHEET: &str = r#"body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; padding: 24px; color: #0f172a; background-color: #f8fafc; }
h1 { font-size: 24px; margin-bottom: 4px; color: #111827; }
h2 { font-size: 18px; margin-top: 24px; margin-bottom: 8px; color: #111827; }
.subtitle { color: #6b7280; font-size: 12px; margin-bottom: 16px; }
.header-meta { font-size: 12px; color: #6b7280; }
table { width: 100%; border-collapse: collapse; margin-top: 8px; font-size: 11px; }
th, td { border: 1px solid #e5e7eb; padding: 6px 8px; text-align: left; }
th { background-color: #f3f4f6; font-weight: 600; color: #374151; }
tr:nth-child(even) td { background-color: #f9fafb; }
.tag { border-radius: 999px; padding: 2px 8px; font-weight: 600; }
.summary-row { display: flex; gap: 16px; margin-top: 12px; }
.summary-card { flex: 1; border-radius: 12px; padding: 10px 12px; color: #fff; }
.summary-title { font-size: 12px; opacity: 0.9; }
.summary-number { font-size: 20px; font-weight: 700; margin-top: 4px; }
.summary-green { background-color: #22c55e; }
.summary-blue { background-color: #3b82f6; }
.summary-purple { background-color: #8b5cf6; }
.summary-red { background-color: #ef4444; }
.chart-container { display: flex; gap: 24px; align-items: center; margin-top: 12px; }
.pie { width: 180px; height: 180px; border-radius: 50%; border: 4px solid #e5e7eb; }
.legend { display: flex; flex-direction: column; gap: 6px; font-size: 12px; }
.legend-item { display: flex; align-items: center; gap: 6px; }
.legend-color { width: 12px; height: 12px; border-radius: 999px; display: inline-block; }
.legend-text { color: #374151; }
"#;

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
