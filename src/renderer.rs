//! Output formatting for rendered text art.
//!
//! The engine stops at glyphs and `(glyph, r, g, b)` cells. This module turns
//! them into something a terminal or browser can show: plain text, ANSI
//! 24-bit color escapes, or an HTML `<pre>` block.

use std::fmt::Write as _;

use serde::Deserialize;

use crate::ascii::{ColorGrid, Rendered};

/// Output format for rendered art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Glyphs only
    #[default]
    Plain,
    /// ANSI true-color escapes (color mode only)
    Ansi,
    /// HTML `<pre>` with colored spans (color mode only)
    Html,
}

/// Format rendered output.
///
/// Plain text output is passed through for every format except HTML, which
/// escapes it and wraps it in `<pre>`.
pub fn format(rendered: &Rendered, format: OutputFormat) -> String {
    match (format, rendered) {
        (OutputFormat::Plain, _) => rendered.text(),
        (OutputFormat::Ansi, Rendered::Colored(grid)) => to_ansi(grid),
        (OutputFormat::Ansi, Rendered::Text(text)) => text.clone(),
        (OutputFormat::Html, Rendered::Colored(grid)) => to_html(grid),
        (OutputFormat::Html, Rendered::Text(text)) => {
            let mut output = String::from("<pre>");
            for c in text.chars() {
                push_escaped(&mut output, c);
            }
            output.push_str("</pre>\n");
            output
        }
    }
}

/// Render a color grid with ANSI 24-bit foreground escapes.
///
/// The color escape is only emitted when it changes; attributes are reset at
/// the end of every row.
pub fn to_ansi(grid: &ColorGrid) -> String {
    let mut output = String::with_capacity(grid.cells().len() * 20);

    for row in grid.rows() {
        let mut current: Option<(u8, u8, u8)> = None;
        for cell in row {
            let color = (cell.r, cell.g, cell.b);
            if current != Some(color) {
                // ANSI true color (24-bit): ESC[38;2;R;G;Bm for foreground
                let _ = write!(output, "\x1b[38;2;{};{};{}m", cell.r, cell.g, cell.b);
                current = Some(color);
            }
            output.push(cell.glyph);
        }
        output.push_str("\x1b[0m\n");
    }

    output
}

/// Render a color grid as an HTML `<pre>` block, one span per cell.
pub fn to_html(grid: &ColorGrid) -> String {
    let mut output = String::from("<pre>");

    for row in grid.rows() {
        for cell in row {
            let _ = write!(
                output,
                "<span style=\"color:rgb({},{},{})\">",
                cell.r, cell.g, cell.b
            );
            push_escaped(&mut output, cell.glyph);
            output.push_str("</span>");
        }
        output.push('\n');
    }

    output.push_str("</pre>\n");
    output
}

fn push_escaped(output: &mut String, c: char) {
    match c {
        '<' => output.push_str("&lt;"),
        '>' => output.push_str("&gt;"),
        '&' => output.push_str("&amp;"),
        '"' => output.push_str("&quot;"),
        '\'' => output.push_str("&#39;"),
        c => output.push(c),
    }
}
