//! Turns the raw cells of a sheet into validated courses.
//!
//! Row 0 is a header and is ignored. Column A holds the course name and
//! column B the total hours. Rows that fail validation are skipped, not
//! reported as errors; the import only fails when nothing usable is left.

use crate::error::{CourseplanError, Result};
use crate::model::Course;
use chrono::Utc;
use tracing::debug;

/// An untyped spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Cells that count as "no value" when used as a name: empty, zero,
    /// NaN and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            Cell::Empty | Cell::Int(0) | Cell::Bool(false) => true,
            Cell::Float(f) => *f == 0.0 || f.is_nan(),
            Cell::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The cell rendered as plain text, `None` for empty cells.
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::String(s) => Some(s.clone()),
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) => Some(f.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::String(s.to_string())
        }
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    BlankName,
    HoursNotANumber,
    HoursNotPositive(i64),
    HoursTooLarge,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::BlankName => write!(f, "course name is blank"),
            SkipReason::HoursNotANumber => write!(f, "hours is not a number"),
            SkipReason::HoursNotPositive(n) => write!(f, "hours must be positive (got {})", n),
            SkipReason::HoursTooLarge => write!(f, "hours is too large"),
        }
    }
}

/// The used rows of a sheet. `first_row` is the 1-based sheet row that
/// `rows[0]` came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRows {
    pub first_row: usize,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetRows {
    /// Rows that start at the top of the sheet.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { first_row: 1, rows }
    }
}

/// A data row that was left out of the import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based row number as shown by spreadsheet applications.
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub courses: Vec<Course>,
    pub skipped: Vec<SkippedRow>,
}

/// Parses `rows`, stamping ids with the current time.
pub fn parse(rows: &[Vec<Cell>]) -> Result<ParseOutcome> {
    parse_with_batch(rows, Utc::now().timestamp_millis())
}

/// Parses `rows`, building ids as `{batch}-{position}` where `position` is
/// the index of the row among the data rows, before filtering. The header is
/// taken to be sheet row 1.
pub fn parse_with_batch(rows: &[Vec<Cell>], batch: i64) -> Result<ParseOutcome> {
    parse_rows(rows, 1, batch)
}

/// Like [`parse_with_batch`], but skipped rows are numbered from where the
/// sheet's used range actually starts.
pub fn parse_sheet(sheet: &SheetRows, batch: i64) -> Result<ParseOutcome> {
    parse_rows(&sheet.rows, sheet.first_row, batch)
}

fn parse_rows(rows: &[Vec<Cell>], first_row: usize, batch: i64) -> Result<ParseOutcome> {
    if rows.len() < 2 {
        return Err(CourseplanError::EmptyInput);
    }

    let mut outcome = ParseOutcome::default();

    for (position, row) in rows.iter().skip(1).enumerate() {
        match parse_row(row) {
            Ok((name, hours)) => {
                outcome
                    .courses
                    .push(Course::new(format!("{}-{}", batch, position), name, hours));
            }
            Err(reason) => {
                let skipped = SkippedRow {
                    row: first_row + position + 1,
                    reason,
                };
                debug!(row = skipped.row, reason = %skipped.reason, "skipping row");
                outcome.skipped.push(skipped);
            }
        }
    }

    if outcome.courses.is_empty() {
        return Err(CourseplanError::NoValidRows);
    }

    Ok(outcome)
}

fn parse_row(row: &[Cell]) -> std::result::Result<(String, u32), SkipReason> {
    let name = row
        .first()
        .filter(|cell| !cell.is_falsy())
        .and_then(Cell::text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(SkipReason::BlankName)?;

    let text = row
        .get(1)
        .and_then(Cell::text)
        .ok_or(SkipReason::HoursNotANumber)?;
    let hours = leading_integer(&text)?;

    if hours <= 0 {
        return Err(SkipReason::HoursNotPositive(hours));
    }
    let hours = u32::try_from(hours).map_err(|_| SkipReason::HoursTooLarge)?;

    Ok((name, hours))
}

/// Reads the integer at the start of `text`, base 10: leading whitespace is
/// skipped, an optional sign is honoured and parsing stops at the first
/// non-digit. `"12h"` is 12, `"3.9"` is 3, `"h12"` is not a number.
pub fn leading_integer(text: &str) -> std::result::Result<i64, SkipReason> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(SkipReason::HoursNotANumber);
    }

    // Only digits remain, so the sole failure mode is overflow.
    let magnitude: i64 = rest[..end]
        .parse()
        .map_err(|_| SkipReason::HoursTooLarge)?;

    Ok(if negative { -magnitude } else { magnitude })
}
