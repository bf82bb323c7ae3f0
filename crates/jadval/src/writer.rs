//! Spreadsheet serialization of assembled frames.

use std::path::Path;

use jadval_core::{CellValue, Frame};
use rust_xlsxwriter::{Workbook, XlsxError};

/// Write `frame` as a single-worksheet workbook at `path`.
///
/// Row 0 carries the column names; data rows follow. Missing cells are left
/// blank and no index column is emitted. An existing file at `path` is
/// overwritten.
pub fn write_frame(frame: &Frame, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in frame.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, name.as_str())?;
    }

    for (row, cells) in frame.rows().iter().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Missing => {}
                CellValue::Number(value) => {
                    worksheet.write_number(row, col, *value)?;
                }
                CellValue::Text(text) => {
                    worksheet.write_string(row, col, text.as_str())?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook};

    fn read_rows(path: &Path) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();
        range.rows().map(<[Data]>::to_vec).collect()
    }

    #[test]
    fn writes_header_row_and_typed_cells() {
        let mut frame = Frame::from_rows(vec![vec![
            CellValue::Text("ab".to_string()),
            CellValue::Missing,
        ]]);
        frame.push_scalar_column("page_number", CellValue::Number(2.0));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_frame(&frame, &path).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Data::String("0".to_string()));
        assert_eq!(rows[0][1], Data::String("1".to_string()));
        assert_eq!(rows[0][2], Data::String("page_number".to_string()));
        assert_eq!(rows[1][0], Data::String("ab".to_string()));
        assert_eq!(rows[1][1], Data::Empty);
        assert_eq!(rows[1][2], Data::Float(2.0));
    }

    #[test]
    fn multiline_footnote_text_survives_round_trip() {
        let frame = Frame::from_rows(vec![vec![CellValue::Text(
            "line a\nline b".to_string(),
        )]]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_frame(&frame, &path).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[1][0], Data::String("line a\nline b".to_string()));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        let first = Frame::from_rows(vec![vec![CellValue::Text("old".to_string())]]);
        write_frame(&first, &path).unwrap();
        let second = Frame::from_rows(vec![vec![CellValue::Text("new".to_string())]]);
        write_frame(&second, &path).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[1][0], Data::String("new".to_string()));
    }

    #[test]
    fn persian_text_survives_round_trip() {
        let frame = Frame::from_rows(vec![vec![CellValue::Text("ریاضی".to_string())]]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_frame(&frame, &path).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[1][0], Data::String("ریاضی".to_string()));
    }
}
