//! Reading the first sheet of an Excel workbook into raw cells.

use super::parser::{Cell, SheetRows};
use crate::error::{CourseplanError, Result};
use calamine::{Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Only columns A and B are consulted.
const COLUMNS: u32 = 2;

/// Checks the file name against `accepted_extensions` (e.g. `[".xlsx"]`),
/// ignoring case.
pub fn check_file_type(path: &Path, accepted_extensions: &[String]) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if accepted_extensions
        .iter()
        .any(|ext| name.ends_with(&ext.to_lowercase()))
    {
        Ok(())
    } else {
        Err(CourseplanError::UnsupportedFileType(
            path.display().to_string(),
        ))
    }
}

/// Reads columns A and B of the first worksheet, one `Vec<Cell>` per row,
/// starting at the first used row.
pub fn read_rows(path: &Path, accepted_extensions: &[String]) -> Result<SheetRows> {
    check_file_type(path, accepted_extensions)?;

    let file = File::open(path).map_err(CourseplanError::FileRead)?;
    let mut workbook: Xlsx<_> = Xlsx::new(BufReader::new(file))
        .map_err(|e| CourseplanError::Spreadsheet(format!("Failed to open workbook: {}", e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CourseplanError::Spreadsheet("Workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| CourseplanError::Spreadsheet(format!("Failed to read sheet: {}", e)))?;

    let sheet = range_to_rows(&range);
    debug!(
        sheet = %sheet_name,
        first_row = sheet.first_row,
        rows = sheet.rows.len(),
        "read worksheet"
    );
    Ok(sheet)
}

fn range_to_rows(range: &Range<Data>) -> SheetRows {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return SheetRows::new(Vec::new());
    };

    let rows = (start.0..=end.0)
        .map(|row| {
            (0..COLUMNS)
                .map(|col| range.get_value((row, col)).map(to_cell).unwrap_or(Cell::Empty))
                .collect()
        })
        .collect();

    SheetRows {
        first_row: start.0 as usize + 1,
        rows,
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::String(s) => Cell::String(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::String(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}
