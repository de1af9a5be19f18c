//! Syntax-shape and resolution error reporting.
//!
//! The scanner never fails; every problem it notices becomes a [`Diagnostic`]
//! attached to a precise span, and scanning continues with the next line.

use std::sync::Arc;

use crate::base::{FileId, Span};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: FileId,
    pub span: Span,
    pub severity: Severity,
    /// Diagnostic code (e.g., "P0001").
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(file: FileId, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            file,
            span,
            severity: Severity::Error,
            code: None,
            message: message.into(),
        }
    }

    /// Create a new informational diagnostic.
    pub fn info(file: FileId, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Info,
            ..Self::error(file, span, message)
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
///
/// ## Code Ranges
///
/// - **P0001-P0099**: Syntax-shape problems found by the scanner
/// - **P0101-P0199**: Include resolution problems
pub mod codes {
    /// `}` without a matching `{`.
    pub const UNMATCHED_BRACE: &str = "P0001";
    /// `#include` without a valid `"…"`/`<…>` filename.
    pub const MALFORMED_INCLUDE: &str = "P0002";
    /// Characters after the closing delimiter of an include filename.
    pub const INCLUDE_TRAILING: &str = "P0003";
    /// Storage specifiers combined in an invalid order or multiplicity.
    pub const INVALID_SPECIFIERS: &str = "P0004";
    /// A storage specifier not followed by an identifier.
    pub const EXPECTED_IDENTIFIER: &str = "P0005";
    /// Include target not found on the include path.
    pub const INCLUDE_NOT_FOUND: &str = "P0101";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a scan of one file.
#[derive(Clone, Debug)]
pub struct DiagnosticCollector {
    file: FileId,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new(file: FileId) -> Self {
        Self {
            file,
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn unmatched_brace(&mut self, line: usize, col: usize) {
        self.add(
            Diagnostic::error(
                self.file,
                Span::on_line(line, col, col + 1),
                "unmatched closing brace '}'",
            )
            .with_code(codes::UNMATCHED_BRACE),
        );
    }

    pub fn malformed_include(&mut self, span: Span, directive: &str) {
        self.add(
            Diagnostic::error(
                self.file,
                span,
                format!("malformed #{}: expected \"filename\" or <filename>", directive),
            )
            .with_code(codes::MALFORMED_INCLUDE),
        );
    }

    pub fn include_trailing(&mut self, span: Span, directive: &str) {
        self.add(
            Diagnostic::error(
                self.file,
                span,
                format!("unexpected characters after #{} filename", directive),
            )
            .with_code(codes::INCLUDE_TRAILING),
        );
    }

    pub fn invalid_specifiers(&mut self, span: Span, specifier: &str) {
        self.add(
            Diagnostic::error(
                self.file,
                span,
                format!("invalid combination of storage specifiers at '{}'", specifier),
            )
            .with_code(codes::INVALID_SPECIFIERS),
        );
    }

    pub fn expected_identifier(&mut self, span: Span, found: &str) {
        self.add(
            Diagnostic::error(
                self.file,
                span,
                format!("expected an identifier, found '{}'", found),
            )
            .with_code(codes::EXPECTED_IDENTIFIER),
        );
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
