//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every courseplan operation, whatever the UI.
//!
//! It:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Normalizes inputs**: user selectors (display index or id) become course ids
//! - **Returns structured types** (`Result<CmdResult>`), never strings for display
//!
//! `CourseplanApi<B: StorageBackend>` is generic over the storage backend:
//! `FsBackend` in production, `MemBackend` in tests.

use crate::commands;
use crate::config::CourseplanConfig;
use crate::error::Result;
use crate::import::SheetRows;
use crate::index::{resolve, CourseSelector};
use crate::store::{CourseRepository, CourseStore, StorageBackend};
use std::path::Path;

/// The main API facade for courseplan operations.
pub struct CourseplanApi<B: StorageBackend> {
    store: CourseStore<B>,
    paths: commands::CourseplanPaths,
    config: CourseplanConfig,
}

impl<B: StorageBackend> CourseplanApi<B> {
    /// Opens the course list stored in `backend` under the configured key.
    /// Problems met while loading come back as warnings.
    pub fn open(
        backend: B,
        paths: commands::CourseplanPaths,
        config: CourseplanConfig,
    ) -> (Self, Vec<commands::CmdMessage>) {
        let repository = CourseRepository::new(backend, config.storage_key.clone());
        let (store, notices) = CourseStore::open(repository);
        let messages = notices.into_iter().map(Into::into).collect();
        (
            Self {
                store,
                paths,
                config,
            },
            messages,
        )
    }

    pub fn list_courses(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path, &self.config.import_extensions)
    }

    pub fn import_rows(&mut self, sheet: &SheetRows, source: &str) -> Result<commands::CmdResult> {
        commands::import::import_rows(&mut self.store, sheet, source)
    }

    /// Sets the prerequisite of `course` to `prerequisite`, or clears it when
    /// `prerequisite` is `None`. Both are display indexes or course ids.
    pub fn set_prerequisite(
        &mut self,
        course: &str,
        prerequisite: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let course_id = self.resolve_selector(course)?;
        let prerequisite_id = prerequisite
            .map(|p| self.resolve_selector(p))
            .transpose()?;
        commands::prerequisite::run(&mut self.store, &course_id, prerequisite_id.as_deref())
    }

    pub fn clear_all(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::CourseplanPaths {
        &self.paths
    }

    pub fn store(&self) -> &CourseStore<B> {
        &self.store
    }

    fn resolve_selector(&self, input: &str) -> Result<String> {
        let selector: CourseSelector = input.parse()?;
        resolve(self.store.courses(), &selector)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, CourseplanPaths, MessageLevel};
