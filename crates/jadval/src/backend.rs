//! Binding of the core page traits to the pdfplumber backend.

use jadval_core::{BBox, PageText, TableGrid, TablePage};
use pdfplumber::{Page, Strategy, Table, TableSettings, TextOptions};

/// Table detection strategy, mirrored from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStrategy {
    /// Detect tables from visible line and rect edges.
    #[default]
    Lattice,
    /// Detect tables from text alignment patterns.
    Stream,
}

/// Table detection parameters passed through to the backend.
///
/// All tolerances default to 3.0, the backend's own defaults.
#[derive(Debug, Clone)]
pub struct TableParams {
    /// Table detection strategy.
    pub strategy: TableStrategy,
    /// Snap tolerance for aligning nearby edges.
    pub snap_tolerance: f64,
    /// Join tolerance for merging collinear edges.
    pub join_tolerance: f64,
    /// Text tolerance for assigning text to cells.
    pub text_tolerance: f64,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            strategy: TableStrategy::default(),
            snap_tolerance: 3.0,
            join_tolerance: 3.0,
            text_tolerance: 3.0,
        }
    }
}

impl TableParams {
    fn settings(&self) -> TableSettings {
        let strategy = match self.strategy {
            TableStrategy::Lattice => Strategy::Lattice,
            TableStrategy::Stream => Strategy::Stream,
        };

        TableSettings {
            strategy,
            snap_tolerance: self.snap_tolerance,
            snap_x_tolerance: self.snap_tolerance,
            snap_y_tolerance: self.snap_tolerance,
            join_tolerance: self.join_tolerance,
            join_x_tolerance: self.join_tolerance,
            join_y_tolerance: self.join_tolerance,
            text_tolerance: self.text_tolerance,
            text_x_tolerance: self.text_tolerance,
            text_y_tolerance: self.text_tolerance,
            ..TableSettings::default()
        }
    }
}

/// One pdfplumber page wearing the core page traits.
///
/// Table detection runs once at construction; the grid and region accessors
/// read from the cached result, which keeps the two reports positionally
/// consistent for this backend.
pub struct PdfPage {
    page: Page,
    tables: Vec<Table>,
}

impl PdfPage {
    /// Wrap a page, running table detection with `params`.
    pub fn new(page: Page, params: &TableParams) -> Self {
        let tables = page.find_tables(&params.settings());
        Self { page, tables }
    }
}

impl PageText for PdfPage {
    fn width(&self) -> f64 {
        self.page.width()
    }

    fn height(&self) -> f64 {
        self.page.height()
    }

    fn extract_text(&self, bbox: BBox) -> Option<String> {
        let region = self.page.within_bbox(pdfplumber::BBox::new(
            bbox.x0,
            bbox.top,
            bbox.x1,
            bbox.bottom,
        ));
        let text = region.extract_text(&TextOptions::default());
        if text.is_empty() { None } else { Some(text) }
    }
}

impl TablePage for PdfPage {
    fn table_grids(&self) -> Vec<TableGrid> {
        self.tables
            .iter()
            .map(|table| TableGrid {
                rows: table
                    .rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
                    .collect(),
            })
            .collect()
    }

    fn table_regions(&self) -> Vec<BBox> {
        self.tables
            .iter()
            .map(|table| {
                BBox::new(
                    table.bbox.x0,
                    table.bbox.top,
                    table.bbox.x1,
                    table.bbox.bottom,
                )
            })
            .collect()
    }
}
