use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{find_violations, Violation};
use crate::store::{CourseStore, StorageBackend};

/// Checks the course list invariants and clears broken prerequisite links.
/// Repairs already made while loading are written back to storage.
/// Other violations are reported but left alone; a fresh import fixes them.
pub fn run<B: StorageBackend>(store: &mut CourseStore<B>) -> Result<CmdResult> {
    let violations = find_violations(store.courses());
    let load_repairs = store.has_unsaved_repairs();
    let mut result = CmdResult::default();

    if violations.is_empty() && !load_repairs {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result);
    }

    if !violations.is_empty() {
        result.add_message(CmdMessage::warning("Inconsistencies found:"));
        for violation in &violations {
            result.add_message(CmdMessage::info(format!("  - {}", violation)));
        }
    }

    let (repaired, notice) = store.repair_prerequisites();
    if load_repairs && notice.is_none() {
        result.add_message(CmdMessage::success(
            "Saved the repairs made while loading stored data.",
        ));
    }
    if !repaired.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Cleared {} broken prerequisite link(s).",
            repaired.len()
        )));
    }
    if violations.iter().any(|v| {
        !matches!(
            v,
            Violation::SelfPrerequisite { .. } | Violation::DanglingPrerequisite { .. }
        )
    }) {
        result.add_message(CmdMessage::warning(
            "Some problems need a fresh import to fix.",
        ));
    }
    result.add_notice(notice);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;
    use crate::store::mem_backend::fixtures::{sample_courses, store_with};
    use crate::store::mem_backend::MemBackend;
    use crate::store::repository::DEFAULT_STORAGE_KEY;
    use crate::store::CourseRepository;

    #[test]
    fn clean_list_reports_nothing() {
        let mut store = store_with(sample_courses());
        let result = run(&mut store).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No inconsistencies found.");
    }

    #[test]
    fn repairs_broken_links() {
        let mut courses = sample_courses();
        courses[2].prerequisite_id = Some("missing".to_string());
        let mut store = store_with(courses);

        let result = run(&mut store).unwrap();
        assert!(store.courses()[2].prerequisite_id.is_none());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Cleared 1 broken prerequisite link(s)."));
        assert!(store.repository().load().courses[2].prerequisite_id.is_none());
    }

    #[test]
    fn reports_duplicates_without_fixing() {
        let mut store = store_with(vec![Course::new("a", "Math", 1), Course::new("a", "Art", 2)]);
        let result = run(&mut store).unwrap();

        assert_eq!(store.courses().len(), 2);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("fresh import")));
    }

    #[test]
    fn persists_repairs_made_on_load() {
        let backend = MemBackend::new();
        backend.put_raw(
            DEFAULT_STORAGE_KEY,
            r#"{"version":1,"courses":[{"id":"a","name":"Math","hours":2,"prerequisiteId":"gone"}]}"#,
        );
        let (mut store, _) = CourseStore::open(CourseRepository::new(backend, DEFAULT_STORAGE_KEY));

        let result = run(&mut store).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("repairs made while loading")));
        assert!(!result.has_warnings());

        let outcome = store.repository().load();
        assert!(outcome.notices.is_empty());
        assert!(outcome.courses[0].prerequisite_id.is_none());

        let again = run(&mut store).unwrap();
        assert_eq!(again.messages[0].content, "No inconsistencies found.");
    }
}
