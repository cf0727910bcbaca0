use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::import::{parse_sheet, read_rows, SheetRows};
use chrono::Utc;
use crate::store::{CourseStore, StorageBackend};
use std::path::Path;
use tracing::info;

/// Imports the first sheet of `path`, replacing every stored course.
/// Any failure before the replace leaves the store untouched.
pub fn run<B: StorageBackend>(
    store: &mut CourseStore<B>,
    path: &Path,
    import_exts: &[String],
) -> Result<CmdResult> {
    let sheet = read_rows(path, import_exts)?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    import_rows(store, &sheet, &source)
}

/// Validates already-extracted rows and replaces the stored list with them.
pub fn import_rows<B: StorageBackend>(
    store: &mut CourseStore<B>,
    sheet: &SheetRows,
    source: &str,
) -> Result<CmdResult> {
    let outcome = parse_sheet(sheet, Utc::now().timestamp_millis())?;
    info!(
        source,
        imported = outcome.courses.len(),
        skipped = outcome.skipped.len(),
        "import parsed"
    );

    let mut result = CmdResult::default();
    let notice = store.replace_all(outcome.courses.clone());

    result.add_message(CmdMessage::success(format!(
        "Imported {} course(s) from {}",
        outcome.courses.len(),
        source
    )));
    if !outcome.skipped.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} row(s):",
            outcome.skipped.len()
        )));
        for skipped in &outcome.skipped {
            result.add_message(CmdMessage::info(format!(
                "  - row {}: {}",
                skipped.row, skipped.reason
            )));
        }
    }
    result.add_notice(notice);

    Ok(result.with_affected_courses(outcome.courses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CourseplanError;
    use crate::import::Cell;
    use crate::store::mem_backend::fixtures::{sample_courses, store_with};

    fn rows(data: &[(&str, &str)]) -> SheetRows {
        SheetRows::new(
            data.iter()
                .map(|(a, b)| vec![Cell::from(*a), Cell::from(*b)])
                .collect(),
        )
    }

    #[test]
    fn replaces_existing_courses() {
        let mut store = store_with(sample_courses());
        let input = rows(&[
            ("과목명", "시간"),
            ("수학", "10"),
            ("", "5"),
            ("영어", "0"),
            ("과학", "3"),
        ]);

        let result = import_rows(&mut store, &input, "courses.xlsx").unwrap();

        let names: Vec<_> = store.courses().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["수학", "과학"]);
        assert_eq!(result.affected_courses.len(), 2);
        assert!(result.messages[0].content.contains("Imported 2 course(s)"));
        assert!(result.messages[1].content.contains("Skipped 2 row(s)"));
        assert!(!result.has_warnings());
    }

    #[test]
    fn failed_import_keeps_prior_state() {
        let mut store = store_with(sample_courses());

        let err = import_rows(&mut store, &rows(&[("Name", "Hours")]), "x").unwrap_err();
        assert!(matches!(err, CourseplanError::EmptyInput));

        let err =
            import_rows(&mut store, &rows(&[("Name", "Hours"), ("Bad", "zero")]), "x").unwrap_err();
        assert!(matches!(err, CourseplanError::NoValidRows));

        assert_eq!(store.courses(), sample_courses().as_slice());
    }

    #[test]
    fn unsupported_file_keeps_prior_state() {
        let mut store = store_with(sample_courses());
        let err = run(
            &mut store,
            Path::new("courses.csv"),
            &[".xlsx".to_string()],
        )
        .unwrap_err();

        assert!(matches!(err, CourseplanError::UnsupportedFileType(_)));
        assert_eq!(store.courses().len(), 3);
    }

    #[test]
    fn storage_failure_is_reported_as_warning() {
        let mut store = store_with(sample_courses());
        store.repository().backend().set_simulate_write_error(true);

        let result =
            import_rows(&mut store, &rows(&[("Name", "Hours"), ("Art", "2")]), "x").unwrap();
        assert!(result.has_warnings());
        assert_eq!(store.courses().len(), 1);
    }
}
