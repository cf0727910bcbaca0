//! # Storage Layer
//!
//! Storage is split in three so each piece can be swapped or tested alone:
//!
//! - [`backend::StorageBackend`]: raw key/value slots.
//!   - [`fs_backend::FsBackend`]: production, one `<key>.json` file per slot
//!   - [`mem_backend::MemBackend`]: in-memory, for tests
//! - [`repository::CourseRepository`]: the persistence adapter. Owns the
//!   versioned JSON layout, migration of older data and best-effort error
//!   handling.
//! - [`course_store::CourseStore`]: the in-memory course list and its
//!   mutations, each one followed by a save.
//!
//! The backend is always handed in by the caller; nothing in this module
//! reaches for a global location.
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── navy_timetable_courses.json   # Versioned course list
//! └── config.json                   # Configuration
//! ```

pub mod backend;
pub mod course_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod repository;

pub use backend::StorageBackend;
pub use course_store::{CourseStore, PrerequisiteUpdate};
pub use repository::{CourseRepository, StorageNotice, StorageOp};
