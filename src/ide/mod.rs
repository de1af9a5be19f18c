//! IDE features: high-level APIs for editor requests.
//!
//! This module sits between the workspace (open files, merged symbols) and
//! whatever protocol layer talks to the editor. Each function corresponds to
//! one editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take the workspace in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the boundary
//! 3. **Textual resolution**: Identifiers are found in the raw buffer and
//!    resolved against the merged symbols of the file
//!
//! ## Usage
//!
//! ```ignore
//! use pawnls::ide::Analysis;
//!
//! let analysis = workspace.analysis();
//! let target = analysis.goto_definition(file, Position::new(10, 4));
//! ```

mod analysis;
mod completion;
mod document_links;
mod goto;
mod hover;
mod local_scope;
mod references;
mod signature;
mod symbols;
pub mod text_utils;

pub use analysis::Analysis;
pub use completion::{CompletionItem, CompletionKind, completions};
pub use document_links::{DocumentLink, document_links};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use local_scope::{LocalDeclaration, find_local_declaration};
pub use references::{Reference, ReferenceResult, find_occurrences, find_references};
pub use signature::{SignatureHelp, signature_help};
pub use symbols::{SymbolInfo, document_symbols, workspace_symbols};
pub use text_utils::{IdentifierAt, identifier_at, identifier_at_position};
