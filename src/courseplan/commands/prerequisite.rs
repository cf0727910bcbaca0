use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CourseStore, StorageBackend};

/// Sets (or, with `None`, clears) the prerequisite of `course_id`.
pub fn run<B: StorageBackend>(
    store: &mut CourseStore<B>,
    course_id: &str,
    prerequisite_id: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(update) = store.set_prerequisite(course_id, prerequisite_id)? else {
        result.add_message(CmdMessage::info(format!(
            "No course with id {}; nothing changed.",
            course_id
        )));
        return Ok(result);
    };

    match prerequisite_id.and_then(|pid| store.get(pid)) {
        Some(prereq) => result.add_message(CmdMessage::success(format!(
            "{} now requires {}",
            update.course.name, prereq.name
        ))),
        None => result.add_message(CmdMessage::success(format!(
            "{} no longer has a prerequisite",
            update.course.name
        ))),
    }
    result.add_notice(update.notice);

    Ok(result.with_affected_courses(vec![update.course]))
}
