//! Error type for the batch conversion run.

use std::fmt;
use std::io;

use pdfplumber::PdfError;
use rust_xlsxwriter::XlsxError;

/// Fatal error that aborts the whole batch run.
///
/// Recoverable conditions (missing captions, empty pages, grid/region count
/// mismatches) never surface here; they are absorbed inside the pipeline by
/// substituting empty values or skipping the page.
#[derive(Debug)]
pub enum Error {
    /// Filesystem error walking the input directory or creating output paths.
    Io(io::Error),
    /// The PDF backend failed to open or read a document.
    Pdf(PdfError),
    /// The spreadsheet writer failed to serialize a page's frame.
    Spreadsheet(XlsxError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Pdf(err) => write!(f, "PDF error: {err}"),
            Error::Spreadsheet(err) => write!(f, "spreadsheet error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Pdf(err) => Some(err),
            Error::Spreadsheet(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<PdfError> for Error {
    fn from(err: PdfError) -> Self {
        Error::Pdf(err)
    }
}

impl From<XlsxError> for Error {
    fn from(err: XlsxError) -> Self {
        Error::Spreadsheet(err)
    }
}
