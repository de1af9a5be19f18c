//! Symbol types produced by extraction.

use std::sync::Arc;

use crate::base::{FileId, Span};
use crate::hir::Diagnostic;

// ============================================================================
// PUBLIC TYPES
// ============================================================================

/// An `#include`/`#tryinclude` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InclusionDirective {
    /// Filename as written between the delimiters.
    pub filename: Arc<str>,
    /// `"file"` form (searched relative to the including file first).
    pub is_local: bool,
    /// `#tryinclude`: a missing target is not an error.
    pub is_silent: bool,
    /// Span of the filename including its delimiters.
    pub span: Span,
}

/// A function, stock, native, forward, or macro.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Callable {
    /// Full prototype text, e.g. `stock Float:Lerp(Float:a, Float:b, Float:t)`.
    pub label: Arc<str>,
    pub name: Arc<str>,
    pub is_macro: bool,
    pub file: FileId,
    /// Span of the identifier token.
    pub span: Span,
    /// Parameter labels in declaration order; types are optional in Pawn.
    pub params: Vec<Arc<str>>,
    pub doc: Option<Arc<str>>,
}

/// A variable, constant, enum member, enum name, or parameter-less macro.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Value {
    pub name: Arc<str>,
    /// Declaration text up to the initializer, e.g. `new const MAX_ITEMS`.
    pub label: Arc<str>,
    pub is_const: bool,
    pub is_enum_member: bool,
    pub is_enum_type: bool,
    /// Enum the member belongs to (None for anonymous enums).
    pub enum_group: Option<Arc<str>>,
    /// Assigned literal, only when it is a simple constant.
    pub literal: Option<Arc<str>>,
    pub inline_comment: Option<Arc<str>>,
    pub file: FileId,
    /// Span of the identifier token.
    pub span: Span,
    pub doc: Option<Arc<str>>,
}

/// Coarse classification used by completion and document symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Macro,
    Constant,
    Variable,
    EnumMember,
    Enum,
}

impl SymbolKind {
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Macro => "macro",
            SymbolKind::Constant => "constant",
            SymbolKind::Variable => "variable",
            SymbolKind::EnumMember => "enum member",
            SymbolKind::Enum => "enum",
        }
    }
}

impl Callable {
    pub fn kind(&self) -> SymbolKind {
        if self.is_macro {
            SymbolKind::Macro
        } else {
            SymbolKind::Function
        }
    }
}

impl Value {
    pub fn kind(&self) -> SymbolKind {
        if self.is_enum_type {
            SymbolKind::Enum
        } else if self.is_enum_member {
            SymbolKind::EnumMember
        } else if self.is_const {
            SymbolKind::Constant
        } else {
            SymbolKind::Variable
        }
    }
}

/// Output of one scan over one file's text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub inclusions: Vec<InclusionDirective>,
    pub callables: Vec<Callable>,
    pub values: Vec<Value>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn callable(&self, name: &str) -> Option<&Callable> {
        self.callables.iter().find(|c| c.name.as_ref() == name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.name.as_ref() == name)
    }
}
