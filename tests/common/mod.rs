use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// A cell written into a test workbook.
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Writes `rows` into the first sheet of a new workbook at `dir/name`.
pub fn write_workbook(dir: &Path, name: &str, rows: &[Vec<Value>]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match value {
                Value::Text(s) => {
                    sheet.write_string(r, c, *s).unwrap();
                }
                Value::Number(n) => {
                    sheet.write_number(r, c, *n).unwrap();
                }
                Value::Blank => {}
            }
        }
    }

    workbook.save(&path).unwrap();
    path
}

/// The example from the course sheet template: two valid rows, one blank
/// name and one zero-hour row.
pub fn sample_workbook(dir: &Path) -> PathBuf {
    use Value::*;
    write_workbook(
        dir,
        "courses.xlsx",
        &[
            vec![Text("과목명"), Text("시간")],
            vec![Text("수학"), Text("10")],
            vec![Blank, Number(5.0)],
            vec![Text("영어"), Number(0.0)],
            vec![Text("과학"), Number(3.0)],
        ],
    )
}
