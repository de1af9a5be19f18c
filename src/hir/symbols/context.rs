//! Scan context: all mutable state of one extraction pass.
//!
//! Nothing here outlives a call to [`extract`](super::extract); the pending
//! documentation buffer in particular starts empty for every file.

use std::sync::Arc;

use crate::base::{FileId, Span, char_column};
use crate::hir::DiagnosticCollector;
use crate::parser::Token;

use super::extract_declaration::DeclarationList;
use super::types::{Callable, InclusionDirective, ParseResult, Value};

/// Where the scanner is relative to an `enum` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum EnumState {
    NotInEnum,
    /// Saw `enum` without `{`; waiting for the line that opens the body.
    AwaitingBrace { group: Option<Arc<str>> },
    /// Inside the body; members live at `depth`.
    InEnum {
        group: Option<Arc<str>>,
        depth: i32,
    },
}

/// One line as seen by the construct extractors.
pub(super) struct LineInput<'a> {
    pub index: usize,
    pub code: &'a str,
    pub trailing: Option<&'a str>,
    pub tokens: &'a [Token<'a>],
}

impl LineInput<'_> {
    /// Span of a byte range of this line's code.
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::on_line(
            self.index,
            char_column(self.code, start),
            char_column(self.code, end),
        )
    }

    pub fn token_span(&self, token: &Token<'_>) -> Span {
        self.span(token.span.start, token.span.end)
    }

    pub fn trailing_comment(&self) -> Option<Arc<str>> {
        self.trailing.map(Arc::from)
    }
}

/// Extraction state passed through all extraction functions.
pub(super) struct ScanContext {
    pub file: FileId,
    pub suppress_local: bool,
    /// Brace depth at the start of the line being scanned.
    pub depth: i32,
    pub enum_state: EnumState,
    /// Open multi-line global declaration list.
    pub declaration: Option<DeclarationList>,
    /// Previous directive line ended with `\`.
    pub directive_continues: bool,
    pending_doc: Option<Arc<str>>,
    pub diagnostics: DiagnosticCollector,
    pub inclusions: Vec<InclusionDirective>,
    pub callables: Vec<Callable>,
    pub values: Vec<Value>,
}

impl ScanContext {
    pub fn new(file: FileId, suppress_local: bool) -> Self {
        Self {
            file,
            suppress_local,
            depth: 0,
            enum_state: EnumState::NotInEnum,
            declaration: None,
            directive_continues: false,
            pending_doc: None,
            diagnostics: DiagnosticCollector::new(file),
            inclusions: Vec::new(),
            callables: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn set_doc(&mut self, doc: &str) {
        self.pending_doc = Some(Arc::from(doc));
    }

    /// Consume the pending documentation comment.
    pub fn take_doc(&mut self) -> Option<Arc<str>> {
        self.pending_doc.take()
    }

    pub fn clear_doc(&mut self) {
        self.pending_doc = None;
    }

    /// Apply the braces of a line to the running depth.
    ///
    /// A `}` that would take the depth below zero is reported at its exact
    /// column and ignored.
    pub fn apply_braces(&mut self, line: usize, code: &str) {
        for brace in crate::parser::braces(code) {
            if brace.open {
                self.depth += 1;
            } else if self.depth == 0 {
                self.diagnostics.unmatched_brace(line, brace.column);
            } else {
                self.depth -= 1;
            }
        }
    }

    pub fn finish(self) -> ParseResult {
        ParseResult {
            inclusions: self.inclusions,
            callables: self.callables,
            values: self.values,
            diagnostics: self.diagnostics.into_diagnostics(),
        }
    }
}
