//! Metadata columns attached to every extracted row.

use crate::frame::{CellValue, Frame};

/// Column name for the 1-based page number.
pub const COL_PAGE_NUMBER: &str = "page_number";
/// Column name for the 1-based, per-table row index.
pub const COL_ROW_INDEX: &str = "row_index";
/// Column name for the subject/track label of the run.
pub const COL_TRACK_LABEL: &str = "track_label";
/// Column name for the first title line found above a table.
pub const COL_TITLE_LINE_1: &str = "title_line_1";
/// Column name for the second title line found above a table.
pub const COL_TITLE_LINE_2: &str = "title_line_2";
/// Column name for the combined footnote text found below a table.
pub const COL_FOOTNOTE_TEXT: &str = "footnote_text";

/// Append the six metadata columns to a per-table frame.
///
/// The row index numbers rows 1..=N within this table; the other five
/// values are broadcast to every row. Title and footnote text arrive
/// already normalized and are not touched again here, and neither are the
/// page number or label.
pub fn annotate(
    frame: &mut Frame,
    page_number: u32,
    track_label: &str,
    title_line_1: &str,
    title_line_2: &str,
    footnote_text: &str,
) {
    frame.push_scalar_column(COL_PAGE_NUMBER, CellValue::Number(f64::from(page_number)));

    let indices = (1..=frame.n_rows())
        .map(|i| CellValue::Number(i as f64))
        .collect();
    frame.push_column(COL_ROW_INDEX, indices);

    frame.push_scalar_column(COL_TRACK_LABEL, CellValue::Text(track_label.to_string()));
    frame.push_scalar_column(COL_TITLE_LINE_1, CellValue::Text(title_line_1.to_string()));
    frame.push_scalar_column(COL_TITLE_LINE_2, CellValue::Text(title_line_2.to_string()));
    frame.push_scalar_column(COL_FOOTNOTE_TEXT, CellValue::Text(footnote_text.to_string()));
}
