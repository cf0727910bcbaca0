use crate::config::CourseplanConfig;
use crate::index::DisplayCourse;
use crate::model::Course;
use crate::store::StorageNotice;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod clear;
pub mod config;
pub mod doctor;
pub mod import;
pub mod init;
pub mod list;
pub mod prerequisite;

#[derive(Debug, Clone)]
pub struct CourseplanPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<StorageNotice> for CmdMessage {
    fn from(notice: StorageNotice) -> Self {
        CmdMessage::warning(notice.to_string())
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_courses: Vec<Course>,
    pub listed_courses: Vec<DisplayCourse>,
    pub saved_at: Option<DateTime<Utc>>,
    pub config: Option<CourseplanConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Adds a warning for a storage problem, if there was one.
    pub fn add_notice(&mut self, notice: Option<StorageNotice>) {
        if let Some(notice) = notice {
            self.messages.push(notice.into());
        }
    }

    pub fn with_affected_courses(mut self, courses: Vec<Course>) -> Self {
        self.affected_courses = courses;
        self
    }

    pub fn with_listed_courses(mut self, courses: Vec<DisplayCourse>) -> Self {
        self.listed_courses = courses;
        self
    }

    pub fn with_config(mut self, config: CourseplanConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
