//! jadval-core: backend-independent pieces of the jadval pipeline.
//!
//! Provides the geometry and band arithmetic, the caption resolver that
//! associates title and footnote text with a table by position, the cell
//! normalizer, the tabular frame model, the row annotator, and the per-page
//! assembly pipeline. PDF access is abstracted behind the traits in
//! [`page`]; nothing in this crate touches a PDF or spreadsheet library.

pub mod annotate;
pub mod assemble;
pub mod caption;
pub mod frame;
pub mod geometry;
pub mod normalize;
pub mod page;

pub use annotate::{
    COL_FOOTNOTE_TEXT, COL_PAGE_NUMBER, COL_ROW_INDEX, COL_TITLE_LINE_1, COL_TITLE_LINE_2,
    COL_TRACK_LABEL, annotate,
};
pub use assemble::{AssembleOptions, assemble_page};
pub use caption::{resolve_footnote, resolve_title};
pub use frame::{CellValue, Frame};
pub use geometry::{BBox, footer_band, header_band};
pub use normalize::{TextFix, normalize};
pub use page::{PageText, TableGrid, TablePage};
