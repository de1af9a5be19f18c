//! Foundation types for the pawnls toolchain.
//!
//! This module provides fundamental types used throughout the analyzer:
//! - [`FileId`] - Interned file identifiers
//! - [`FileInterner`] - Path ↔ FileId mapping
//! - [`Position`], [`Span`] - Zero-based line/character positions
//!
//! This module has NO dependencies on other pawnls modules.

mod file_id;
mod intern;
mod position;

pub use file_id::FileId;
pub use intern::FileInterner;
pub use position::{Position, Span, char_column};
