//! Title and footnote harvesting from the bands around a table.
//!
//! Table detection reports only the cell grid; the title above a table and
//! the annotation lines below it live outside that grid. Both are recovered
//! by scanning fixed-height bands adjacent to the table's bounding box. The
//! fixed heights assume consistent vertical spacing across the document set
//! and a fixed number of meaningful lines (two above, three below); this is
//! a heuristic, not a layout parse.

use crate::geometry::{BBox, footer_band, header_band};
use crate::normalize::TextFix;
use crate::page::PageText;

/// Trimmed, non-empty lines of a band's text, top to bottom.
fn band_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Line at `index` passed through `fix`, or an empty string.
fn fixed_line(lines: &[&str], index: usize, fix: TextFix) -> String {
    lines
        .get(index)
        .map(|line| fix.apply(line))
        .unwrap_or_default()
}

/// Resolve the two title lines directly above a table.
///
/// Scans a band `height_above` points tall ending at the table's top edge,
/// clipped to the page. The first two trimmed non-empty lines become the
/// title; absent lines degrade to empty strings. Each line goes through
/// `fix` at the point of extraction.
pub fn resolve_title<P: PageText + ?Sized>(
    page: &P,
    table: BBox,
    height_above: f64,
    fix: TextFix,
) -> (String, String) {
    let band = header_band(&table, page.width(), height_above);
    let Some(text) = page.extract_text(band) else {
        return (String::new(), String::new());
    };
    let lines = band_lines(&text);
    (fixed_line(&lines, 0, fix), fixed_line(&lines, 1, fix))
}

/// Resolve the combined footnote text directly below a table.
///
/// Scans a band `height_scan` points tall starting at the table's bottom
/// edge, clipped to the page, and takes the 3rd, 4th and 5th trimmed
/// non-empty lines. The 3rd line is the base of the combined string even
/// when it is empty; the 4th and 5th are appended on new lines only when
/// non-empty. A band without extractable text yields an empty string.
pub fn resolve_footnote<P: PageText + ?Sized>(
    page: &P,
    table: BBox,
    height_scan: f64,
    fix: TextFix,
) -> String {
    let band = footer_band(&table, page.width(), page.height(), height_scan);
    let Some(text) = page.extract_text(band) else {
        return String::new();
    };
    let lines = band_lines(&text);

    let mut combined = fixed_line(&lines, 2, fix);
    for line in [fixed_line(&lines, 3, fix), fixed_line(&lines, 4, fix)] {
        if !line.is_empty() {
            combined.push('\n');
            combined.push_str(&line);
        }
    }
    combined
}
