//! Symbol extraction from source text: pure functions that return symbols.
//!
//! The scanner walks a file once, line by line, keeping only brace depth,
//! enum state, an open declaration list and the pending documentation comment
//! between lines.
//!
//! # Module structure
//!
//! - [`types`]: public symbol types (Callable, Value, InclusionDirective, ParseResult)
//! - [`context`]: ScanContext carried through one pass
//! - [`helpers`]: token-level helpers shared by the extractors
//! - [`extract`]: entry point and per-line dispatch
//! - [`extract_preprocessor`]: `#include`/`#tryinclude`/`#define`
//! - [`extract_enum`]: enum headers and members
//! - [`extract_callable`]: function prototypes
//! - [`extract_declaration`]: global variable/constant lists

mod context;
mod extract;
mod extract_callable;
mod extract_declaration;
mod extract_enum;
mod extract_preprocessor;
mod helpers;
mod types;


pub use types::{Callable, InclusionDirective, ParseResult, SymbolKind, Value};

pub use extract::extract;

pub(crate) use extract_callable::parse_prototype;
pub(crate) use helpers::{is_name, skip_tag};
