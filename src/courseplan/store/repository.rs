//! Persistence adapter for the course list.
//!
//! The list lives in a single slot of a [`StorageBackend`] as a versioned
//! JSON envelope:
//!
//! ```text
//! {"version": 1, "savedAt": "2025-03-01T09:00:00Z", "courses": [ {id, name, hours, prerequisiteId}, ... ]}
//! ```
//!
//! Older data written as a bare array of courses is migrated on load.
//!
//! Nothing in here returns an error to its caller. Failures are logged and
//! handed back as [`StorageNotice`] values so the UI can show them without
//! aborting the operation that triggered them.

use super::backend::StorageBackend;
use crate::error::{CourseplanError, Result};
use crate::model::{clear_broken_prerequisites, Course};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

pub const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_STORAGE_KEY: &str = "navy_timetable_courses";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Load,
    Save,
    Clear,
}

impl std::fmt::Display for StorageOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageOp::Load => write!(f, "load"),
            StorageOp::Save => write!(f, "save"),
            StorageOp::Clear => write!(f, "clear"),
        }
    }
}

/// A non-fatal storage problem that should be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageNotice {
    pub op: StorageOp,
    pub message: String,
}

impl StorageNotice {
    fn new(op: StorageOp, message: impl Into<String>) -> Self {
        Self {
            op,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StorageNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Storage {} problem: {}", self.op, self.message)
    }
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub courses: Vec<Course>,
    pub saved_at: Option<DateTime<Utc>>,
    pub notices: Vec<StorageNotice>,
    /// Entries were dropped or links cleared; the slot still holds the
    /// unrepaired data.
    pub repaired: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    courses: &'a [Course],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    version: u32,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    courses: Vec<Value>,
}

pub struct CourseRepository<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> CourseRepository<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the slot. A missing slot is an empty list; unreadable or
    /// malformed content is discarded with a notice.
    pub fn load(&self) -> LoadOutcome {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored courses");
                return LoadOutcome::default();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored courses");
                return LoadOutcome {
                    notices: vec![StorageNotice::new(StorageOp::Load, e.to_string())],
                    ..LoadOutcome::default()
                };
            }
        };

        match decode(&raw) {
            Ok(outcome) => {
                debug!(key = %self.key, count = outcome.courses.len(), "loaded courses");
                outcome
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable stored courses");
                LoadOutcome {
                    notices: vec![StorageNotice::new(
                        StorageOp::Load,
                        format!("stored data was discarded: {}", e),
                    )],
                    ..LoadOutcome::default()
                }
            }
        }
    }

    /// Overwrites the slot with `courses`. Returns the time stamped into the
    /// envelope on success.
    pub fn save(&self, courses: &[Course]) -> std::result::Result<DateTime<Utc>, StorageNotice> {
        let saved_at = Utc::now();
        let envelope = EnvelopeRef {
            version: SCHEMA_VERSION,
            saved_at,
            courses,
        };

        let result = serde_json::to_string_pretty(&envelope)
            .map_err(CourseplanError::Serialization)
            .and_then(|json| self.backend.write(&self.key, &json));

        match result {
            Ok(()) => {
                debug!(key = %self.key, count = courses.len(), "saved courses");
                Ok(saved_at)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to save courses");
                Err(StorageNotice::new(StorageOp::Save, e.to_string()))
            }
        }
    }

    /// Removes the slot entirely.
    pub fn clear(&self) -> Option<StorageNotice> {
        match self.backend.remove(&self.key) {
            Ok(()) => {
                debug!(key = %self.key, "cleared stored courses");
                None
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to clear stored courses");
                Some(StorageNotice::new(StorageOp::Clear, e.to_string()))
            }
        }
    }
}

fn decode(raw: &str) -> Result<LoadOutcome> {
    let value: Value = serde_json::from_str(raw)?;

    let (entries, saved_at) = match value {
        // Unversioned layout: a bare array of courses.
        Value::Array(entries) => {
            debug!("migrating unversioned course list");
            (entries, None)
        }
        Value::Object(map) => {
            let envelope: Envelope = serde_json::from_value(Value::Object(map))?;
            if envelope.version != SCHEMA_VERSION {
                return Err(CourseplanError::Storage(format!(
                    "unsupported schema version {}",
                    envelope.version
                )));
            }
            (envelope.courses, envelope.saved_at)
        }
        _ => {
            return Err(CourseplanError::Storage(
                "expected a course list".to_string(),
            ))
        }
    };

    let total = entries.len();
    let mut seen = HashSet::new();
    let mut courses = Vec::with_capacity(total);

    for entry in entries {
        let course: Course = match serde_json::from_value(entry) {
            Ok(course) => course,
            Err(e) => {
                warn!(error = %e, "dropping malformed stored course");
                continue;
            }
        };
        if course.name.trim().is_empty() || course.hours == 0 {
            warn!(id = %course.id, "dropping stored course with blank name or zero hours");
            continue;
        }
        if !seen.insert(course.id.clone()) {
            warn!(id = %course.id, "dropping stored course with duplicate id");
            continue;
        }
        courses.push(course);
    }

    let dropped = total - courses.len();
    let repaired = clear_broken_prerequisites(&mut courses);
    for id in &repaired {
        warn!(id = %id, "cleared broken prerequisite on stored course");
    }

    let needed_repair = dropped > 0 || !repaired.is_empty();
    let mut notices = Vec::new();
    if needed_repair {
        notices.push(StorageNotice::new(
            StorageOp::Load,
            format!(
                "stored data was repaired: {} invalid course(s) dropped, {} prerequisite link(s) cleared",
                dropped,
                repaired.len()
            ),
        ));
    }

    Ok(LoadOutcome {
        courses,
        saved_at,
        notices,
        repaired: needed_repair,
    })
}
