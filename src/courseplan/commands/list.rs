use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_courses;
use crate::store::{CourseStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &CourseStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_courses(index_courses(store.courses()));
    result.saved_at = store.saved_at();
    Ok(result)
}
