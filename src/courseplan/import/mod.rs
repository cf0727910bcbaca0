//! Spreadsheet import: [`workbook`] pulls raw cells out of an `.xlsx` file and
//! [`parser`] validates them into courses. The parser is pure and knows
//! nothing about files.

pub mod parser;
pub mod workbook;

pub use parser::{
    parse, parse_sheet, parse_with_batch, Cell, ParseOutcome, SheetRows, SkipReason, SkippedRow,
};
pub use workbook::read_rows;
