/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Table layout and borders
/// - Color terminal output
/// - Text truncation and padding
///
/// It accepts pre-formatted cells from the report module and renders them.
///
/// ## Output Flexibility
///
/// `TableWriter` writes to any `std::io::Write` destination:
/// - Console (stdout) with optional colors
/// - String/byte buffers (tests)
/// - Files
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A column in a bordered table
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    /// Content width never shrinks below this
    pub min: usize,
    /// Content width never grows beyond this
    pub max: usize,
}

/// A cell to render, with an optional foreground color
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub text: &'a str,
    pub color: Option<Color>,
}

impl<'a> Cell<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, color: None }
    }

    pub fn colored(text: &'a str, color: Color) -> Self {
        Self { text, color: Some(color) }
    }
}

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Consume the writer, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write formatted text, optionally with color
    pub fn write_colored(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(color) if self.use_colors => write!(self.writer, "{}{}\x1b[0m", ansi_fg(color), text),
            _ => write!(self.writer, "{}", text),
        }
    }

    /// Write a plain line of text
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Write a horizontal border: `left`, `mid` and `right` are the junction glyphs
    fn write_border(&mut self, layout: &TableLayout, left: char, mid: char, right: char) -> io::Result<()> {
        let mut line = String::with_capacity(layout.total * 3);
        line.push(left);
        for (i, width) in layout.widths.iter().enumerate() {
            if i > 0 {
                line.push(mid);
            }
            line.push_str(&"─".repeat(width + 2));
        }
        line.push(right);
        writeln!(self.writer, "{}", line)
    }

    pub fn write_top_border(&mut self, layout: &TableLayout) -> io::Result<()> {
        self.write_border(layout, '┌', '┬', '┐')
    }

    pub fn write_separator_line(&mut self, layout: &TableLayout) -> io::Result<()> {
        self.write_border(layout, '├', '┼', '┤')
    }

    pub fn write_bottom_border(&mut self, layout: &TableLayout) -> io::Result<()> {
        self.write_border(layout, '└', '┴', '┘')
    }

    /// Write one row; each cell is truncated/padded to its column width
    pub fn write_row(&mut self, layout: &TableLayout, cells: &[Cell<'_>]) -> io::Result<()> {
        write!(self.writer, "│")?;
        for (cell, width) in cells.iter().zip(layout.widths.iter()) {
            write!(self.writer, " ")?;
            self.write_colored(&truncate_with_padding(cell.text, *width), cell.color)?;
            write!(self.writer, " │")?;
        }
        writeln!(self.writer)
    }

    /// Write the header row framed by borders
    pub fn write_header(&mut self, layout: &TableLayout, columns: &[Column]) -> io::Result<()> {
        let cells: Vec<Cell<'_>> = columns.iter().map(|c| Cell::plain(c.header)).collect();
        self.write_top_border(layout)?;
        self.write_row(layout, &cells)?;
        self.write_separator_line(layout)
    }

    /// Write a labelled proportional bar, e.g. `completed   ██████████  6 (85.7%)`
    pub fn write_bar(
        &mut self,
        label: &str,
        label_width: usize,
        fraction: f64,
        bar_width: usize,
        suffix: &str,
        color: Option<Color>,
    ) -> io::Result<()> {
        let filled = ((fraction.clamp(0.0, 1.0) * bar_width as f64).round() as usize).min(bar_width);
        write!(self.writer, "  {} ", truncate_with_padding(label, label_width))?;
        self.write_colored(&"█".repeat(filled), color)?;
        write!(self.writer, "{}", "░".repeat(bar_width - filled))?;
        writeln!(self.writer, " {}", suffix)
    }
}

/// ANSI escape for a `term` palette color (0-7 normal, 8-15 bright)
fn ansi_fg(color: Color) -> String {
    match color {
        0..=7 => format!("\x1b[{}m", 30 + color),
        8..=15 => format!("\x1b[{}m", 90 + (color - 8)),
        _ => "\x1b[39m".to_string(),
    }
}

//
// Table Layout and Widths
//

/// Resolved content widths for a table (borders and padding excluded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub widths: Vec<usize>,
    /// Total table width including borders and padding
    pub total: usize,
}

impl TableLayout {
    /// Fit columns to the console.
    ///
    /// Each column starts at its natural (widest content) width clamped to
    /// `[min, max]`. While the table is wider than `console_width`, the widest
    /// shrinkable column gives up one character at a time.
    pub fn fit(columns: &[Column], natural: &[usize], console_width: usize) -> Self {
        let mut widths: Vec<usize> = columns
            .iter()
            .zip(natural.iter().copied().chain(std::iter::repeat(0)))
            .map(|(col, nat)| nat.max(display_width(col.header)).clamp(col.min, col.max))
            .collect();

        while Self::total_for(&widths) > console_width {
            let widest = widths
                .iter()
                .enumerate()
                .filter(|(i, w)| **w > columns[*i].min)
                .max_by_key(|(_, w)| **w)
                .map(|(i, _)| i);
            match widest {
                Some(i) => widths[i] -= 1,
                None => break, // Everything at minimum; let the terminal wrap
            }
        }

        let total = Self::total_for(&widths);
        TableLayout { widths, total }
    }

    fn total_for(widths: &[usize]) -> usize {
        // "│ " before each cell, " " after, closing "│"
        widths.iter().map(|w| w + 3).sum::<usize>() + 1
    }
}

// Width override - set once from --console-width
static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (for tests and --console-width)
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width); // Ignore error if already initialized
}

/// Get the console width: override, then terminal size, then 120
pub fn console_width() -> usize {
    if let Some(width) = CONSOLE_WIDTH.get() {
        return *width;
    }
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { 120 }
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w <= width {
        return format!("{}{}", s, " ".repeat(width - display_w));
    }

    // Reserve space for "..."
    let target_width = if width >= 3 { width - 3 } else { width };
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + c_width > target_width {
            break;
        }
        result.push(c);
        current_width += c_width;
    }

    if width >= 3 {
        result.push_str("...");
        current_width += 3;
    }

    // Pad if a wide char left a gap
    if current_width < width {
        result.push_str(&" ".repeat(width - current_width));
    }

    result
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
