//! Display indexes: 1-based list positions the CLI shows next to each course.
//!
//! Course ids (`1718000000000-3`) are stable but unwieldy to type, so users
//! may refer to a course either by its index in the current listing or by its
//! id. Indexes are recomputed on every listing and never stored.

use crate::error::{CourseplanError, Result};
use crate::model::Course;
use std::str::FromStr;

/// A user input naming a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseSelector {
    Index(usize),
    Id(String),
}

impl FromStr for CourseSelector {
    type Err = CourseplanError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CourseplanError::Api("Empty course selector".to_string()));
        }
        // "0" and "007" can only be ids.
        if !s.starts_with('0') && s.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = s.parse::<usize>() {
                return Ok(CourseSelector::Index(n));
            }
        }
        Ok(CourseSelector::Id(s.to_string()))
    }
}

impl std::fmt::Display for CourseSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseSelector::Index(i) => write!(f, "{}", i),
            CourseSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCourse {
    pub index: usize,
    pub course: Course,
    /// Name of the prerequisite course, resolved for display.
    pub prerequisite_name: Option<String>,
}

/// Assigns display indexes in list order and resolves prerequisite names.
pub fn index_courses(courses: &[Course]) -> Vec<DisplayCourse> {
    courses
        .iter()
        .enumerate()
        .map(|(i, course)| DisplayCourse {
            index: i + 1,
            course: course.clone(),
            prerequisite_name: course.prerequisite_id.as_ref().and_then(|pid| {
                courses
                    .iter()
                    .find(|c| &c.id == pid)
                    .map(|c| c.name.clone())
            }),
        })
        .collect()
}

/// Resolves a selector to a course id present in `courses`.
///
/// An index past the end of the list is retried as an id, so all-digit ids
/// stay reachable.
pub fn resolve(courses: &[Course], selector: &CourseSelector) -> Result<String> {
    match selector {
        CourseSelector::Index(i) => courses
            .get(i - 1)
            .or_else(|| find_by_id(courses, &i.to_string()))
            .map(|c| c.id.clone())
            .ok_or_else(|| CourseplanError::Api(format!("Index {} not found", i))),
        CourseSelector::Id(id) => find_by_id(courses, id)
            .map(|c| c.id.clone())
            .ok_or_else(|| CourseplanError::Api(format!("Course {} not found", id))),
    }
}

fn find_by_id<'a>(courses: &'a [Course], id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Vec<Course> {
        vec![
            Course::new("9-0", "Math", 10),
            Course::new("9-1", "Physics", 4).with_prerequisite("9-0"),
        ]
    }

    #[test]
    fn parses_selectors() {
        assert_eq!("2".parse::<CourseSelector>().unwrap(), CourseSelector::Index(2));
        assert_eq!(
            "9-1".parse::<CourseSelector>().unwrap(),
            CourseSelector::Id("9-1".to_string())
        );
        assert_eq!(
            "0".parse::<CourseSelector>().unwrap(),
            CourseSelector::Id("0".to_string())
        );
        assert_eq!(
            "007".parse::<CourseSelector>().unwrap(),
            CourseSelector::Id("007".to_string())
        );
        assert!("  ".parse::<CourseSelector>().is_err());
    }

    #[test]
    fn indexes_and_resolves_names() {
        let listed = index_courses(&courses());
        assert_eq!(listed[0].index, 1);
        assert_eq!(listed[0].prerequisite_name, None);
        assert_eq!(listed[1].index, 2);
        assert_eq!(listed[1].prerequisite_name.as_deref(), Some("Math"));
    }

    #[test]
    fn resolves_by_index_and_id() {
        let list = courses();
        assert_eq!(resolve(&list, &CourseSelector::Index(2)).unwrap(), "9-1");
        assert_eq!(
            resolve(&list, &CourseSelector::Id("9-0".into())).unwrap(),
            "9-0"
        );
        assert!(resolve(&list, &CourseSelector::Index(3)).is_err());
        assert!(resolve(&list, &CourseSelector::Id("x".into())).is_err());
    }

    #[test]
    fn digit_ids_resolve_when_index_is_out_of_range() {
        let list = vec![
            Course::new("41", "Legacy", 2),
            Course::new("007", "Padded", 3),
            Course::new("2", "Shadowed", 1),
        ];
        let by = |input: &str| resolve(&list, &input.parse::<CourseSelector>().unwrap());

        assert_eq!(by("41").unwrap(), "41");
        assert_eq!(by("007").unwrap(), "007");
        // In range, the index wins over the id.
        assert_eq!(by("2").unwrap(), "007");
        assert!(by("0").is_err());
        assert!(by("99").is_err());
    }
}
