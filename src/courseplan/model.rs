use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A training course as imported from the spreadsheet.
///
/// The serialized field names match the stored layout
/// (`{id, name, hours, prerequisiteId}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub hours: u32,
    #[serde(default)]
    pub prerequisite_id: Option<String>,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, hours: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hours,
            prerequisite_id: None,
        }
    }

    pub fn with_prerequisite(mut self, prerequisite_id: impl Into<String>) -> Self {
        self.prerequisite_id = Some(prerequisite_id.into());
        self
    }
}

/// A single invariant violation found in a course list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    BlankName { id: String },
    ZeroHours { id: String },
    DuplicateId { id: String },
    SelfPrerequisite { id: String },
    DanglingPrerequisite { id: String, prerequisite_id: String },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::BlankName { id } => write!(f, "course {} has a blank name", id),
            Violation::ZeroHours { id } => write!(f, "course {} has zero hours", id),
            Violation::DuplicateId { id } => write!(f, "id {} is used more than once", id),
            Violation::SelfPrerequisite { id } => {
                write!(f, "course {} lists itself as prerequisite", id)
            }
            Violation::DanglingPrerequisite {
                id,
                prerequisite_id,
            } => write!(
                f,
                "course {} points to missing prerequisite {}",
                id, prerequisite_id
            ),
        }
    }
}

/// Checks every list invariant and returns the violations in list order.
pub fn find_violations(courses: &[Course]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for course in courses {
        if course.name.trim().is_empty() {
            violations.push(Violation::BlankName {
                id: course.id.clone(),
            });
        }
        if course.hours == 0 {
            violations.push(Violation::ZeroHours {
                id: course.id.clone(),
            });
        }
        if !seen.insert(course.id.as_str()) {
            violations.push(Violation::DuplicateId {
                id: course.id.clone(),
            });
        }
    }

    for course in courses {
        if let Some(prereq) = &course.prerequisite_id {
            if prereq == &course.id {
                violations.push(Violation::SelfPrerequisite {
                    id: course.id.clone(),
                });
            } else if !seen.contains(prereq.as_str()) {
                violations.push(Violation::DanglingPrerequisite {
                    id: course.id.clone(),
                    prerequisite_id: prereq.clone(),
                });
            }
        }
    }

    violations
}

/// Clears prerequisite links that point at the course itself or at an id
/// that is not in the list. Returns the ids of the courses that changed.
pub fn clear_broken_prerequisites(courses: &mut [Course]) -> Vec<String> {
    let ids: HashSet<String> = courses.iter().map(|c| c.id.clone()).collect();
    let mut repaired = Vec::new();

    for course in courses.iter_mut() {
        let broken = match &course.prerequisite_id {
            Some(prereq) => prereq == &course.id || !ids.contains(prereq),
            None => false,
        };
        if broken {
            course.prerequisite_id = None;
            repaired.push(course.id.clone());
        }
    }

    repaired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stored_field_names() {
        let course = Course::new("1-0", "수학", 10).with_prerequisite("1-1");
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["prerequisiteId"], "1-1");
        assert_eq!(json["hours"], 10);

        let cleared = Course::new("1-0", "수학", 10);
        let json = serde_json::to_value(&cleared).unwrap();
        assert!(json["prerequisiteId"].is_null());
    }

    #[test]
    fn valid_list_has_no_violations() {
        let courses = vec![
            Course::new("a", "Math", 10),
            Course::new("b", "Physics", 4).with_prerequisite("a"),
        ];
        assert!(find_violations(&courses).is_empty());
    }

    #[test]
    fn reports_each_kind_of_violation() {
        let courses = vec![
            Course::new("a", " ", 0),
            Course::new("a", "Dup", 1),
            Course::new("b", "Self", 1).with_prerequisite("b"),
            Course::new("c", "Dangling", 1).with_prerequisite("zzz"),
        ];
        let violations = find_violations(&courses);
        assert!(violations.contains(&Violation::BlankName { id: "a".into() }));
        assert!(violations.contains(&Violation::ZeroHours { id: "a".into() }));
        assert!(violations.contains(&Violation::DuplicateId { id: "a".into() }));
        assert!(violations.contains(&Violation::SelfPrerequisite { id: "b".into() }));
        assert!(violations.contains(&Violation::DanglingPrerequisite {
            id: "c".into(),
            prerequisite_id: "zzz".into()
        }));
    }

    #[test]
    fn clears_only_broken_links() {
        let mut courses = vec![
            Course::new("a", "Math", 10),
            Course::new("b", "Physics", 4).with_prerequisite("a"),
            Course::new("c", "Chem", 2).with_prerequisite("c"),
            Course::new("d", "Bio", 2).with_prerequisite("gone"),
        ];
        let repaired = clear_broken_prerequisites(&mut courses);
        assert_eq!(repaired, vec!["c".to_string(), "d".to_string()]);
        assert_eq!(courses[1].prerequisite_id.as_deref(), Some("a"));
        assert!(courses[2].prerequisite_id.is_none());
        assert!(courses[3].prerequisite_id.is_none());
    }
}
