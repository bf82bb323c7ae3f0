//! Narrow interface onto the PDF extraction backend.
//!
//! The pipeline never talks to a PDF library directly; it sees pages through
//! the traits below. Any backend able to report page dimensions, extract
//! plain text inside a rectangle, and detect tables as cell grids with
//! bounding boxes can drive the pipeline.

use crate::geometry::BBox;

/// Cell grid of one detected table, rows top-to-bottom.
///
/// `None` marks a cell the detector could not assign any text to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableGrid {
    pub rows: Vec<Vec<Option<String>>>,
}

/// Text extraction within a page.
pub trait PageText {
    /// Page width in page units.
    fn width(&self) -> f64;

    /// Page height in page units.
    fn height(&self) -> f64;

    /// Plain text of the region, top-to-bottom with `\n` between lines, or
    /// `None` when the region contains no extractable text.
    fn extract_text(&self, bbox: BBox) -> Option<String>;
}

/// A page that also reports detected tables.
///
/// Grids and regions are separate collections on purpose: the upstream
/// detector reports them through two calls, and the two lists are only
/// trusted when their lengths agree.
pub trait TablePage: PageText {
    /// Cell grids of detected tables, in detection order.
    fn table_grids(&self) -> Vec<TableGrid>;

    /// Bounding boxes of the detected tables, in detection order.
    fn table_regions(&self) -> Vec<BBox>;
}
