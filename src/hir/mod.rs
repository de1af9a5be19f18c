//! High-level IR (HIR): the symbol model of one file.
//!
//! ## Key Types
//!
//! - [`ParseResult`]: everything one scan produces for a file
//! - [`Callable`]: functions, natives, forwards and macros
//! - [`Value`]: variables, constants, enum members and enum names
//! - [`InclusionDirective`]: `#include`/`#tryinclude` lines
//! - [`Diagnostic`]: syntax-shape and resolution problems
//!
//! ## Flow
//!
//! ```text
//! text                       ← INPUT: raw source text
//!     │
//!     ▼
//! extract(file, text, suppress_local)
//!     │
//!     ▼
//! ParseResult { inclusions, callables, values, diagnostics }
//! ```

mod diagnostics;
mod symbols;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use symbols::{Callable, InclusionDirective, ParseResult, SymbolKind, Value, extract};

pub(crate) use symbols::{is_name, parse_prototype, skip_tag};
