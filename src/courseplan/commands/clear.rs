use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CourseStore, StorageBackend};

/// Deletes every course and the stored slot. Callers are expected to have
/// confirmed with the user already.
pub fn run<B: StorageBackend>(store: &mut CourseStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.courses().is_empty() {
        result.add_message(CmdMessage::info("No courses to clear."));
    }

    let removed = store.courses().to_vec();
    let notice = store.clear_all();

    if !removed.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Cleared {} course(s).",
            removed.len()
        )));
    }
    result.add_notice(notice);

    Ok(result.with_affected_courses(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::{empty_store, sample_courses, store_with};
    use crate::store::repository::DEFAULT_STORAGE_KEY;

    #[test]
    fn clears_everything() {
        let mut store = store_with(sample_courses());
        let result = run(&mut store).unwrap();

        assert_eq!(result.affected_courses.len(), 3);
        assert!(store.courses().is_empty());
        assert!(!store.repository().backend().contains(DEFAULT_STORAGE_KEY));
        assert!(store.repository().load().courses.is_empty());
    }

    #[test]
    fn clearing_empty_store_still_removes_slot() {
        let mut store = empty_store();
        store
            .repository()
            .backend()
            .put_raw(DEFAULT_STORAGE_KEY, "garbage");

        let result = run(&mut store).unwrap();
        assert_eq!(result.messages[0].content, "No courses to clear.");
        assert!(!store.repository().backend().contains(DEFAULT_STORAGE_KEY));
    }
}
