//! Per-page pipeline: detected tables to one annotated frame.

use crate::annotate::annotate;
use crate::caption::{resolve_footnote, resolve_title};
use crate::frame::{CellValue, Frame};
use crate::normalize::{TextFix, normalize};
use crate::page::TablePage;

/// Knobs for assembling one page.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Subject/track label stamped on every row.
    pub track_label: String,
    /// Height of the title band above each table, in page units.
    pub header_band_height: f64,
    /// Height of the footnote band below each table, in page units.
    pub footer_band_height: f64,
    /// Character-order fix for extracted text.
    pub text_fix: TextFix,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            track_label: String::new(),
            header_band_height: 60.0,
            footer_band_height: 70.0,
            text_fix: TextFix::default(),
        }
    }
}

/// Convert every table on `page` into annotated rows and stack them.
///
/// Returns `None` when the page yields nothing: no detected tables, only
/// zero-row grids, or a grid/region count mismatch. A mismatch means the
/// backend's two table reports cannot be paired positionally, so the page
/// is dropped with a warning rather than paired by guesswork.
pub fn assemble_page<P: TablePage + ?Sized>(
    page: &P,
    page_number: u32,
    opts: &AssembleOptions,
) -> Option<Frame> {
    let grids = page.table_grids();
    let regions = page.table_regions();

    if grids.is_empty() {
        return None;
    }
    if grids.len() != regions.len() {
        log::warn!(
            "page {page_number}: {} table grid(s) but {} region(s); skipping page",
            grids.len(),
            regions.len()
        );
        return None;
    }

    let mut frames = Vec::new();
    for (grid, region) in grids.into_iter().zip(regions) {
        if grid.rows.is_empty() {
            continue;
        }

        let rows = grid
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::from).collect())
            .collect();
        let mut frame = Frame::from_rows(rows);
        normalize(&mut frame, opts.text_fix);

        let (title_line_1, title_line_2) =
            resolve_title(page, region, opts.header_band_height, opts.text_fix);
        let footnote = resolve_footnote(page, region, opts.footer_band_height, opts.text_fix);

        annotate(
            &mut frame,
            page_number,
            &opts.track_label,
            &title_line_1,
            &title_line_2,
            &footnote,
        );
        frames.push(frame);
    }

    Frame::concat(frames)
}
