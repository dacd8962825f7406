//! Table output formatting for flight-log reports.
//!
//! This module renders the console view of a report: the event table, the
//! status breakdown bars and the headline summary. Colors come from the same
//! style table as the exported document.

use super::types::{HeadlineStats, ReportModel};
use crate::console_format::{self, Cell, Column, TableLayout, TableWriter, display_width};
use crate::style::{StyleKind, style_for};
use crate::types::EventRecord;
use std::io::{self, IsTerminal, Write};

const COLUMNS: [Column; 8] = [
    Column { header: "Timestamp", min: 10, max: 19 },
    Column { header: "Event", min: 9, max: 28 },
    Column { header: "Flight ID", min: 7, max: 12 },
    Column { header: "Location", min: 8, max: 30 },
    Column { header: "Status", min: 6, max: 12 },
    Column { header: "Priority", min: 4, max: 10 },
    Column { header: "CoC", min: 3, max: 3 },
    Column { header: "Temp", min: 4, max: 16 },
];

/// Width of the bar in the status breakdown
const BAR_WIDTH: usize = 30;

/// Placeholder row for an empty event list
const NO_EVENTS: &str = "No events";

fn cell_texts(record: &EventRecord) -> [&str; 8] {
    [
        &record.timestamp,
        &record.event,
        &record.identifier,
        &record.location,
        &record.status,
        &record.priority,
        record.coc_display(),
        &record.temperature,
    ]
}

/// Compute the table layout for a set of records
pub fn layout_for(records: &[EventRecord], console_width: usize) -> TableLayout {
    let mut natural = [0usize; 8];
    if records.is_empty() {
        natural[1] = display_width(NO_EVENTS);
    }
    for record in records {
        for (slot, text) in natural.iter_mut().zip(cell_texts(record)) {
            *slot = (*slot).max(display_width(text));
        }
    }
    TableLayout::fit(&COLUMNS, &natural, console_width)
}

/// Write every record as a table row, in input order.
///
/// Status and priority cells are colored by their display category.
pub fn write_records_table<W: Write>(
    writer: &mut TableWriter<W>,
    records: &[EventRecord],
    console_width: usize,
) -> io::Result<()> {
    let layout = layout_for(records, console_width);

    writer.write_header(&layout, &COLUMNS)?;
    if records.is_empty() {
        let mut cells = [Cell::plain(""); 8];
        cells[1] = Cell::plain(NO_EVENTS);
        writer.write_row(&layout, &cells)?;
    }
    for record in records {
        let texts = cell_texts(record);
        let status_color = style_for(StyleKind::Status, &record.status).term_color();
        let priority_color = style_for(StyleKind::Priority, &record.priority).term_color();

        let mut cells = texts.map(Cell::plain);
        cells[4] = Cell::colored(texts[4], status_color);
        cells[5] = Cell::colored(texts[5], priority_color);
        writer.write_row(&layout, &cells)?;
    }
    writer.write_bottom_border(&layout)
}

/// Write the status breakdown: one proportional bar per segment, in segment order.
pub fn write_breakdown<W: Write>(writer: &mut TableWriter<W>, model: &ReportModel) -> io::Result<()> {
    writer.write_line("")?;
    writer.write_line("Status Breakdown:")?;

    if model.segments.is_empty() {
        return writer.write_line("  (no events)");
    }

    let label_width = model.segments.iter().map(|s| display_width(&s.status)).max().unwrap_or(0);
    for seg in &model.segments {
        let suffix = format!("{} ({:.1}%)", seg.count, model.percent_of(seg.count));
        let color = style_for(StyleKind::Status, &seg.status).term_color();
        writer.write_bar(&seg.status, label_width, seg.fraction(), BAR_WIDTH, &suffix, Some(color))?;
    }
    Ok(())
}

/// Print the event table to stdout.
pub fn print_records_table(records: &[EventRecord]) {
    let mut writer = TableWriter::new(io::stdout(), use_colors());
    let _ = write_records_table(&mut writer, records, console_format::console_width());
}

/// Print the status breakdown to stdout.
pub fn print_breakdown(model: &ReportModel) {
    let mut writer = TableWriter::new(io::stdout(), use_colors());
    let _ = write_breakdown(&mut writer, model);
}

/// Print the headline summary to stdout.
pub fn print_headline(headline: &HeadlineStats, total: usize) {
    println!("\n=== Summary ===");
    for (label, value) in headline.cards() {
        println!("{:<19}{}", format!("{}:", label), value);
    }
    println!("{:<19}{}", "Total events:", total);
}

/// Colors only when stdout is a terminal we can drive
fn use_colors() -> bool {
    io::stdout().is_terminal() && term::stdout().is_some()
}
