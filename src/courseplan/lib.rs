//! # Courseplan Architecture
//!
//! Courseplan registers training courses (name, required hours, prerequisite)
//! from a spreadsheet and keeps them in a local store. It is a library that
//! happens to have a CLI client, not the other way round.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes / ids → course ids)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Import (import/)           │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CourseStore: in-memory list, synced on every mutation    │
//! │  - CourseRepository: versioned JSON, best-effort I/O        │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data flow
//!
//! `.xlsx` → [`import::workbook`] → raw cells → [`import::parser`] → courses →
//! [`store::CourseStore::replace_all`] → [`store::CourseRepository::save`].
//!
//! Prerequisite edits go through [`store::CourseStore::set_prerequisite`],
//! which refuses self references and ids that are not in the list.
//!
//! ## Failure policy
//!
//! Import errors abort the import and leave the stored list as it was.
//! Storage errors never abort anything: they are logged and come back as
//! warnings in the command result.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`import`]: Workbook reading and row validation
//! - [`store`]: Storage abstraction, persistence and the course store
//! - [`model`]: `Course` and list invariants
//! - [`index`]: Display indexes and selectors
//! - [`config`]: Configuration management
//! - [`logger`]: tracing subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod import;
pub mod index;
pub mod logger;
pub mod model;
pub mod store;
