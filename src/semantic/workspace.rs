//! # Workspace
//!
//! File session manager: tracks open files, schedules debounced reparses and
//! keeps the dependency graph consistent as files open, change and close.
//!
//! Time is passed in explicitly (`change(.., now)`, `poll(now)`), so the host
//! owns the clock and the event loop.

mod accessors;
mod core;
mod file;
mod file_manager;
mod population;

pub use self::core::Workspace;
pub use file::{FileRecord, ResolvedInclusion};
