//! jadval: convert tables embedded in PDF pages into spreadsheet files.
//!
//! Scans a directory of PDF documents, detects the tables on every page,
//! harvests the two title lines above and the footnote lines below each
//! table from fixed-height bands, optionally reverses the character order
//! of extracted text (right-to-left sources whose extraction order is
//! visual), and writes one `.xlsx` file per page that yielded rows.
//!
//! This crate wires the backend-independent pipeline in `jadval-core` to
//! the pdfplumber extraction backend and the rust_xlsxwriter serializer.
//!
//! # Example
//!
//! ```no_run
//! use jadval::BatchConfig;
//!
//! let mut config = BatchConfig::new("transcripts/pdf", "transcripts/xlsx");
//! config.track_label = "هنر".to_string();
//! let summary = jadval::run(&config)?;
//! println!("wrote {} sheet(s)", summary.sheets);
//! # Ok::<(), jadval::Error>(())
//! ```

pub mod backend;
pub mod batch;
pub mod error;
pub mod writer;

pub use jadval_core;

pub use backend::{PdfPage, TableParams, TableStrategy};
pub use batch::{BatchConfig, RunSummary, parse_page_range, pdf_files, run};
pub use error::Error;
pub use jadval_core::{AssembleOptions, BBox, CellValue, Frame, TextFix, assemble_page};
pub use writer::write_frame;
