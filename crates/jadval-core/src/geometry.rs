//! Bounding boxes and scan-band construction.
//!
//! Coordinates follow the extraction backend's convention: top-left origin,
//! y increasing downward. A band is the fixed-height region directly above
//! or below a table in which title and footnote lines are searched.

/// Axis-aligned rectangle in page coordinates.
///
/// - `x0`: left edge
/// - `top`: top edge (distance from the top of the page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from the top of the page)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Band spanning the full page width directly above a table.
///
/// Extends `height_above` points up from the table's top edge, clipped at
/// the top of the page.
pub fn header_band(table: &BBox, page_width: f64, height_above: f64) -> BBox {
    BBox::new(
        0.0,
        (table.top - height_above).max(0.0),
        page_width,
        table.top,
    )
}

/// Band spanning the full page width directly below a table.
///
/// Extends `height_scan` points down from the table's bottom edge, clipped
/// at the bottom of the page.
pub fn footer_band(table: &BBox, page_width: f64, page_height: f64, height_scan: f64) -> BBox {
    BBox::new(
        0.0,
        table.bottom,
        page_width,
        (table.bottom + height_scan).min(page_height),
    )
}
