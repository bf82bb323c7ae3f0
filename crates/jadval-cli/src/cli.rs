use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jadval::{BatchConfig, TableStrategy, TextFix};

/// Convert tables embedded in PDF pages into per-page spreadsheet files.
///
/// Scans INPUT_DIR for `.pdf` files, detects the tables on every page,
/// harvests the two title lines above and the footnote lines below each
/// table, and writes one `.xlsx` file per page that contained at least one
/// table.
#[derive(Debug, Parser)]
#[command(name = "jadval", about, version)]
pub struct Cli {
    /// Directory containing the input PDF files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory to write the .xlsx files into (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Subject/track label stamped on every output row
    #[arg(long, default_value = "")]
    pub track_label: String,

    /// Height of the band scanned for title lines above each table (points)
    #[arg(long, default_value_t = 60.0)]
    pub header_band: f64,

    /// Height of the band scanned for footnote lines below each table (points)
    #[arg(long, default_value_t = 70.0)]
    pub footer_band: f64,

    /// Keep extracted text as-is instead of reversing character order
    #[arg(long)]
    pub no_reverse: bool,

    /// Page range to convert from every file (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Lattice)]
    pub strategy: StrategyArg,

    /// Snap tolerance for aligning nearby edges (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub snap_tolerance: f64,

    /// Join tolerance for merging collinear edges (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub join_tolerance: f64,

    /// Text tolerance for assigning text to cells (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub text_tolerance: f64,
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Detect tables using visible lines and rect edges
    Lattice,
    /// Detect tables from text alignment patterns
    Stream,
}

impl Cli {
    /// Build the batch configuration, parsing the page range if given.
    pub fn into_config(self) -> Result<BatchConfig, String> {
        let pages = match &self.pages {
            Some(range) => Some(jadval::parse_page_range(range)?),
            None => None,
        };

        let mut config = BatchConfig::new(self.input_dir, self.output_dir);
        config.track_label = self.track_label;
        config.header_band_height = self.header_band;
        config.footer_band_height = self.footer_band;
        config.text_fix = if self.no_reverse {
            TextFix::None
        } else {
            TextFix::ReverseChars
        };
        config.table.strategy = match self.strategy {
            StrategyArg::Lattice => TableStrategy::Lattice,
            StrategyArg::Stream => TableStrategy::Stream,
        };
        config.table.snap_tolerance = self.snap_tolerance;
        config.table.join_tolerance = self.join_tolerance;
        config.table.text_tolerance = self.text_tolerance;
        config.pages = pages;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_directories() {
        let cli = Cli::parse_from(["jadval", "in", "out"]);
        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::parse_from(["jadval", "in", "out"]);
        assert_eq!(cli.track_label, "");
        assert!((cli.header_band - 60.0).abs() < f64::EPSILON);
        assert!((cli.footer_band - 70.0).abs() < f64::EPSILON);
        assert!(!cli.no_reverse);
        assert!(cli.pages.is_none());
        assert!(matches!(cli.strategy, StrategyArg::Lattice));
        assert!((cli.snap_tolerance - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_band_heights() {
        let cli = Cli::parse_from([
            "jadval",
            "in",
            "out",
            "--header-band",
            "45.5",
            "--footer-band",
            "90",
        ]);
        assert!((cli.header_band - 45.5).abs() < f64::EPSILON);
        assert!((cli.footer_band - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_track_label() {
        let cli = Cli::parse_from(["jadval", "in", "out", "--track-label", "هنر"]);
        assert_eq!(cli.track_label, "هنر");
    }

    #[test]
    fn parse_stream_strategy() {
        let cli = Cli::parse_from(["jadval", "in", "out", "--strategy", "stream"]);
        assert!(matches!(cli.strategy, StrategyArg::Stream));
    }

    #[test]
    fn missing_directories_rejected() {
        assert!(Cli::try_parse_from(["jadval"]).is_err());
        assert!(Cli::try_parse_from(["jadval", "in"]).is_err());
    }

    // --- into_config tests ---

    #[test]
    fn config_carries_flags_through() {
        let cli = Cli::parse_from([
            "jadval",
            "in",
            "out",
            "--track-label",
            "riazi",
            "--no-reverse",
            "--pages",
            "1,3-4",
        ]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.track_label, "riazi");
        assert_eq!(config.text_fix, TextFix::None);
        assert_eq!(config.pages, Some(vec![1, 3, 4]));
    }

    #[test]
    fn default_config_reverses_text() {
        let cli = Cli::parse_from(["jadval", "in", "out"]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.text_fix, TextFix::ReverseChars);
    }

    #[test]
    fn invalid_page_range_is_an_error() {
        let cli = Cli::parse_from(["jadval", "in", "out", "--pages", "0"]);
        assert!(cli.into_config().is_err());
    }
}
