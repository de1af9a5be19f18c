//! # pawnls-base
//!
//! Core library for analyzing Pawn sources: symbol extraction, include
//! resolution, the cross-file dependency graph and editor features.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (goto-def, references, hover, completion)
//!   ↓
//! semantic  → Workspace, dependency graph, merged symbols
//!   ↓
//! project   → Configuration, file loading, include-path resolution
//!   ↓
//! hir       → Line-oriented symbol extraction, diagnostics
//!   ↓
//! parser    → Logos lexer, comment stripping, brace depths
//!   ↓
//! base      → Primitives (FileId, path interning, Span/Position)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → project → semantic → ide)
// ============================================================================

/// Foundation types: FileId, path interning, Span/Position
pub mod base;

/// Parser: Logos lexer and line-level helpers
pub mod parser;

/// Symbol extraction and diagnostics
pub mod hir;

/// Project management: configuration, include resolution
pub mod project;

/// Workspace: open files, dependency graph, merged symbols
pub mod semantic;

/// IDE features: goto-definition, find-references, hover, completion
pub mod ide;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{FileId, Position, Span};
pub use hir::{Callable, Diagnostic, InclusionDirective, ParseResult, Severity, Value, extract};
pub use ide::Analysis;
pub use project::{AnalyzerConfig, LoadError};
pub use semantic::Workspace;
