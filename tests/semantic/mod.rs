//! Workspace tests
//!
//! Tests for:
//! - Cross-file symbol visibility through includes
//! - Dependency reference counting and sweeping
//! - Debounced reparsing

pub mod tests_cross_file;
pub mod tests_workspace_lifecycle;
