//! End-to-end batch run: an input directory of PDFs to per-page workbooks.

use std::fs;
use std::path::{Path, PathBuf};

use jadval_core::{AssembleOptions, TextFix, assemble_page};
use pdfplumber::Pdf;

use crate::backend::{PdfPage, TableParams};
use crate::error::Error;
use crate::writer::write_frame;

/// Input files must end with this case-sensitive suffix.
const PDF_SUFFIX: &str = ".pdf";

/// Configuration of one batch run.
///
/// Replaces the fixed constants a one-off script would hard-code; every
/// field has a default except the two directories.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned for `.pdf` files (case-sensitive suffix).
    pub input_dir: PathBuf,
    /// Directory receiving the `.xlsx` outputs; created if absent.
    pub output_dir: PathBuf,
    /// Subject/track label stamped on every output row. Default: empty.
    pub track_label: String,
    /// Height of the title band above each table. Default: 60.0.
    pub header_band_height: f64,
    /// Height of the footnote band below each table. Default: 70.0.
    pub footer_band_height: f64,
    /// Character-order fix for extracted text. Default: reverse.
    pub text_fix: TextFix,
    /// Table detection parameters.
    pub table: TableParams,
    /// 1-indexed pages to convert from every file; `None` means all pages.
    /// Out-of-range entries simply match nothing for a given file.
    pub pages: Option<Vec<usize>>,
}

impl BatchConfig {
    /// Configuration with default knobs for the given directories.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            track_label: String::new(),
            header_band_height: 60.0,
            footer_band_height: 70.0,
            text_fix: TextFix::default(),
            table: TableParams::default(),
            pages: None,
        }
    }

    fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            track_label: self.track_label.clone(),
            header_band_height: self.header_band_height,
            footer_band_height: self.footer_band_height,
            text_fix: self.text_fix,
        }
    }
}

/// Counters reported after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// PDF files opened.
    pub files: usize,
    /// Pages processed, after page-range filtering.
    pub pages: usize,
    /// Workbooks written.
    pub sheets: usize,
}

/// Parse a 1-indexed page selection like "1,3-5".
///
/// Returns sorted, deduplicated page numbers. The selection is deliberately
/// not bounded by any document's page count: one selection applies to every
/// file of a batch, and files differ in length.
pub fn parse_page_range(input: &str) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start_str, end_str)) = part.split_once('-') {
            let start: usize = start_str
                .trim()
                .parse()
                .map_err(|_| format!("invalid page number: '{start_str}'"))?;
            let end: usize = end_str
                .trim()
                .parse()
                .map_err(|_| format!("invalid page number: '{end_str}'"))?;

            if start == 0 || end == 0 {
                return Err("page 0 is invalid (pages start at 1)".to_string());
            }
            if start > end {
                return Err(format!("invalid page range: '{part}'"));
            }
            pages.extend(start..=end);
        } else {
            let page: usize = part
                .parse()
                .map_err(|_| format!("invalid page number: '{part}'"))?;

            if page == 0 {
                return Err("page 0 is invalid (pages start at 1)".to_string());
            }
            pages.push(page);
        }
    }

    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

/// `.pdf` entries of `dir`, sorted by file name.
///
/// The suffix match is case-sensitive, so `SCAN.PDF` is not picked up.
pub fn pdf_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_pdf = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(PDF_SUFFIX));
        if is_pdf && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Run the whole batch described by `config`.
///
/// Creates the output directory, then converts every input file page by
/// page. Pages that yield no rows produce no file. Backend and I/O
/// failures abort the run; there is no per-file recovery.
pub fn run(config: &BatchConfig) -> Result<RunSummary, Error> {
    fs::create_dir_all(&config.output_dir)?;

    let mut summary = RunSummary::default();
    for path in pdf_files(&config.input_dir)? {
        process_file(&path, config, &mut summary)?;
        summary.files += 1;
    }
    Ok(summary)
}

/// Convert one PDF file, page by page.
///
/// The open document handle lives for this function's scope and is released
/// on every exit path, including early `?` returns.
fn process_file(path: &Path, config: &BatchConfig, summary: &mut RunSummary) -> Result<(), Error> {
    log::info!("processing {}", path.display());
    let pdf = Pdf::open_file(path, None)?;

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let opts = config.assemble_options();

    for (index, page_result) in pdf.pages_iter().enumerate() {
        let page_number = index + 1;
        if let Some(selected) = &config.pages {
            if !selected.contains(&page_number) {
                continue;
            }
        }

        log::info!("processing page {page_number} of {}", path.display());
        let page = PdfPage::new(page_result?, &config.table);
        summary.pages += 1;

        let Some(frame) = assemble_page(&page, page_number as u32, &opts) else {
            continue;
        };

        let out_path = config
            .output_dir
            .join(format!("{stem}_page_{page_number}.xlsx"));
        write_frame(&frame, &out_path)?;
        log::info!("wrote {}", out_path.display());
        summary.sheets += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    // --- parse_page_range tests ---

    #[test]
    fn single_page() {
        assert_eq!(parse_page_range("1").unwrap(), vec![1]);
        assert_eq!(parse_page_range("3").unwrap(), vec![3]);
    }

    #[test]
    fn page_range() {
        assert_eq!(parse_page_range("2-4").unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn comma_separated() {
        assert_eq!(parse_page_range("1,3,5").unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn mixed() {
        assert_eq!(
            parse_page_range("1-3,7,10-12").unwrap(),
            vec![1, 2, 3, 7, 10, 11, 12]
        );
    }

    #[test]
    fn page_zero_invalid() {
        let err = parse_page_range("0").unwrap_err();
        assert!(err.contains("invalid"));
    }

    #[test]
    fn reversed_range_invalid() {
        let err = parse_page_range("5-2").unwrap_err();
        assert!(err.contains("invalid"));
    }

    #[test]
    fn garbage_invalid() {
        assert!(parse_page_range("abc").is_err());
    }

    #[test]
    fn duplicates_removed() {
        assert_eq!(parse_page_range("1,1,2").unwrap(), vec![1, 2]);
    }

    #[test]
    fn whitespace_tolerance() {
        assert_eq!(parse_page_range(" 1 , 3 - 5 ").unwrap(), vec![1, 3, 4, 5]);
    }

    // --- pdf_files tests ---

    #[test]
    fn pdf_files_filters_by_case_sensitive_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.pdf", "B.PDF", "c.txt", "d.pdf.bak", "z.pdf"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = pdf_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.pdf", "z.pdf"]);
    }

    #[test]
    fn pdf_files_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.pdf")).unwrap();
        File::create(dir.path().join("real.pdf")).unwrap();

        let files = pdf_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.pdf"));
    }

    #[test]
    fn pdf_files_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(pdf_files(&missing), Err(Error::Io(_))));
    }

    // --- config tests ---

    #[test]
    fn config_defaults_match_documented_values() {
        let config = BatchConfig::new("in", "out");
        assert_eq!(config.header_band_height, 60.0);
        assert_eq!(config.footer_band_height, 70.0);
        assert_eq!(config.text_fix, TextFix::ReverseChars);
        assert!(config.track_label.is_empty());
        assert!(config.pages.is_none());
    }

    #[test]
    fn run_on_empty_input_dir_reports_zero_work() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(input.path(), output.path());

        let summary = run(&config).unwrap();
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn run_creates_missing_output_dir() {
        let input = tempfile::tempdir().unwrap();
        let output_root = tempfile::tempdir().unwrap();
        let output = output_root.path().join("nested/xlsx");
        let config = BatchConfig::new(input.path(), &output);

        run(&config).unwrap();
        assert!(output.is_dir());
    }

    #[test]
    fn run_on_missing_input_dir_fails() {
        let output = tempfile::tempdir().unwrap();
        let config = BatchConfig::new("/definitely/not/here", output.path());
        assert!(run(&config).is_err());
    }
}
