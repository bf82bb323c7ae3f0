//! In-memory tabular record set, written out as one worksheet.

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value; written as a blank cell.
    Missing,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// The text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => CellValue::Text(text),
            None => CellValue::Missing,
        }
    }
}

/// Named columns over rectangular rows of cells.
///
/// Cell columns coming straight from table extraction are named by position
/// ("0", "1", ...); metadata columns appended later carry their own names.
/// The header row of a detected table is ordinary data here, never a source
/// of column names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Frame {
    /// Build a frame from raw grid rows.
    ///
    /// Columns are named by position. Rows shorter than the widest row are
    /// padded with missing cells so the frame stays rectangular.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let columns = (0..n_cols).map(|i| i.to_string()).collect();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(n_cols, CellValue::Missing);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// True when the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names, left to right.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, top to bottom.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Append a column holding `value` in every row.
    pub fn push_scalar_column(&mut self, name: impl Into<String>, value: CellValue) {
        self.columns.push(name.into());
        for row in &mut self.rows {
            row.push(value.clone());
        }
    }

    /// Append a column from per-row values.
    ///
    /// `values` must carry exactly one entry per existing row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<CellValue>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Rewrite every text cell through `f`.
    pub fn map_text(&mut self, f: impl Fn(&str) -> String) {
        for row in &mut self.rows {
            for cell in row {
                if let CellValue::Text(text) = cell {
                    *text = f(text);
                }
            }
        }
    }

    /// Stack frames vertically, aligning columns by name.
    ///
    /// Column order is first appearance across the inputs; cells a frame has
    /// no column for are filled as missing. Returns `None` when `frames` is
    /// empty, so an empty page yields no output at all.
    pub fn concat(frames: Vec<Frame>) -> Option<Frame> {
        if frames.is_empty() {
            return None;
        }

        let mut columns: Vec<String> = Vec::new();
        for frame in &frames {
            for name in &frame.columns {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
        }

        let mut rows = Vec::new();
        for frame in frames {
            let slots: Vec<usize> = frame
                .columns
                .iter()
                .map(|name| columns.iter().position(|c| c == name).unwrap())
                .collect();
            for row in frame.rows {
                let mut out = vec![CellValue::Missing; columns.len()];
                for (value, &slot) in row.into_iter().zip(&slots) {
                    out[slot] = value;
                }
                rows.push(out);
            }
        }

        Some(Frame { columns, rows })
    }
}
