//! # Semantic Analysis
//!
//! Cross-file layer: the dependency graph of included files, the merged
//! symbol view over it, and the workspace that keeps both current while files
//! are opened, edited and closed.

pub mod graphs;
pub mod symbol_table;
pub mod workspace;

pub use graphs::{DependencyGraph, DependencyNode};
pub use symbol_table::{FileSymbols, MergedSymbols, merged_symbols};
pub use workspace::{FileRecord, ResolvedInclusion, Workspace};
