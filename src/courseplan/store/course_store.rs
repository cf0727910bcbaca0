use super::backend::StorageBackend;
use super::repository::{CourseRepository, StorageNotice};
use crate::error::{CourseplanError, Result};
use crate::model::{clear_broken_prerequisites, Course};
use chrono::{DateTime, Utc};
use tracing::info;

/// Result of a prerequisite change that found its course.
#[derive(Debug)]
pub struct PrerequisiteUpdate {
    pub course: Course,
    pub notice: Option<StorageNotice>,
}

/// In-memory course list kept in sync with a [`CourseRepository`].
///
/// Every mutation persists before returning. A failed write never fails the
/// mutation: the in-memory state moves on and the problem is returned as a
/// [`StorageNotice`].
pub struct CourseStore<B: StorageBackend> {
    courses: Vec<Course>,
    saved_at: Option<DateTime<Utc>>,
    unsaved_repairs: bool,
    repository: CourseRepository<B>,
}

impl<B: StorageBackend> CourseStore<B> {
    /// Loads the persisted list. Problems found while loading are returned
    /// alongside the store.
    pub fn open(repository: CourseRepository<B>) -> (Self, Vec<StorageNotice>) {
        let outcome = repository.load();
        let store = Self {
            courses: outcome.courses,
            saved_at: outcome.saved_at,
            unsaved_repairs: outcome.repaired,
            repository,
        };
        (store, outcome.notices)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    /// True while repairs made during load have not been written back.
    pub fn has_unsaved_repairs(&self) -> bool {
        self.unsaved_repairs
    }

    pub fn repository(&self) -> &CourseRepository<B> {
        &self.repository
    }

    /// Drops the current list and adopts `courses` wholesale.
    pub fn replace_all(&mut self, courses: Vec<Course>) -> Option<StorageNotice> {
        info!(count = courses.len(), "replacing course list");
        self.courses = courses;
        self.persist()
    }

    /// Sets or clears the prerequisite of `course_id`.
    ///
    /// Returns `Ok(None)` without touching anything when `course_id` is not in
    /// the list. A prerequisite equal to the course itself, or one that is not
    /// in the list, is rejected and leaves state unchanged.
    pub fn set_prerequisite(
        &mut self,
        course_id: &str,
        prerequisite_id: Option<&str>,
    ) -> Result<Option<PrerequisiteUpdate>> {
        let Some(pos) = self.courses.iter().position(|c| c.id == course_id) else {
            return Ok(None);
        };

        if let Some(prereq) = prerequisite_id {
            if prereq == course_id {
                return Err(CourseplanError::SelfPrerequisite(course_id.to_string()));
            }
            if self.get(prereq).is_none() {
                return Err(CourseplanError::UnknownPrerequisite(prereq.to_string()));
            }
        }

        self.courses[pos].prerequisite_id = prerequisite_id.map(str::to_string);
        let course = self.courses[pos].clone();
        let notice = self.persist();
        Ok(Some(PrerequisiteUpdate { course, notice }))
    }

    /// Empties the list and deletes the storage slot.
    pub fn clear_all(&mut self) -> Option<StorageNotice> {
        info!(count = self.courses.len(), "clearing all courses");
        self.courses.clear();
        self.saved_at = None;
        self.repository.clear()
    }

    /// Clears prerequisite links that are self-referential or point at a
    /// course no longer in the list. Persists when something changed here or
    /// when load-time repairs are still unsaved.
    pub fn repair_prerequisites(&mut self) -> (Vec<String>, Option<StorageNotice>) {
        let repaired = clear_broken_prerequisites(&mut self.courses);
        if repaired.is_empty() && !self.unsaved_repairs {
            return (repaired, None);
        }
        info!(
            count = repaired.len(),
            load_repairs = self.unsaved_repairs,
            "saving repaired course list"
        );
        let notice = self.persist();
        (repaired, notice)
    }

    fn persist(&mut self) -> Option<StorageNotice> {
        match self.repository.save(&self.courses) {
            Ok(saved_at) => {
                self.saved_at = Some(saved_at);
                self.unsaved_repairs = false;
                None
            }
            Err(notice) => Some(notice),
        }
    }
}
