//! Go-to-definition and the identifier resolution shared with hover and references.

use std::sync::Arc;

use crate::base::{FileId, Position, Span};
use crate::hir::{Callable, SymbolKind, Value};
use crate::ide::local_scope::{LocalDeclaration, find_local_declaration};
use crate::ide::text_utils::{IdentifierAt, identifier_at_position};
use crate::semantic::{ResolvedInclusion, Workspace};

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The file containing the target.
    pub file: FileId,
    pub span: Span,
    /// None for include targets and block locals.
    pub kind: Option<SymbolKind>,
    pub name: Arc<str>,
}

// ============================================================================
// SHARED RESOLUTION
// ============================================================================

/// What an identifier (or include filename) under the caret refers to.
#[derive(Clone, Debug)]
pub(crate) enum Definition {
    Inclusion(ResolvedInclusion),
    Local(LocalDeclaration),
    Callable(Callable),
    Value(Value),
}

/// A resolved caret position.
#[derive(Clone, Debug)]
pub(crate) struct Resolved {
    /// None when the caret is on an include filename.
    pub ident: Option<IdentifierAt>,
    pub definition: Definition,
}

impl Definition {
    pub fn target(&self, current: FileId) -> GotoTarget {
        match self {
            Definition::Inclusion(inclusion) => GotoTarget {
                file: inclusion.target,
                span: Span::default(),
                kind: None,
                name: inclusion.directive.filename.clone(),
            },
            Definition::Local(local) => GotoTarget {
                file: current,
                span: local.span,
                kind: None,
                name: local.name.clone(),
            },
            Definition::Callable(callable) => GotoTarget {
                file: callable.file,
                span: callable.span,
                kind: Some(callable.kind()),
                name: callable.name.clone(),
            },
            Definition::Value(value) => GotoTarget {
                file: value.file,
                span: value.span,
                kind: Some(value.kind()),
                name: value.name.clone(),
            },
        }
    }
}

/// Resolve the caret in an open file.
///
/// Precedence: include filename, identifier inside a string literal (callables
/// only), block-local declaration, then the merged symbols of the file.
pub(crate) fn resolve_at(workspace: &Workspace, file: FileId, position: Position) -> Option<Resolved> {
    let Some(record) = workspace.record(file) else {
        debug_assert!(false, "resolution requested for a file that is not open: {file}");
        return None;
    };

    if let Some(inclusion) = record
        .inclusions()
        .iter()
        .find(|inclusion| inclusion.directive.span.contains(position))
    {
        return Some(Resolved {
            ident: None,
            definition: Definition::Inclusion(inclusion.clone()),
        });
    }

    let ident = identifier_at_position(record.text(), position)?;
    let merged = workspace.merged_symbols(file);

    let definition = if ident.in_string {
        Definition::Callable(merged.callable(&ident.name)?.clone())
    } else if let Some(local) = find_local_declaration(record.text(), position, &ident.name) {
        Definition::Local(local)
    } else if let Some(callable) = merged.callable(&ident.name) {
        // A constant macro is also a value; the value carries the literal.
        match merged
            .values
            .iter()
            .find(|v| callable.is_macro && v.file == callable.file && v.span == callable.span)
        {
            Some(value) => Definition::Value(value.clone()),
            None => Definition::Callable(callable.clone()),
        }
    } else {
        Definition::Value(merged.value(&ident.name)?.clone())
    };

    Some(Resolved {
        ident: Some(ident),
        definition,
    })
}

// ============================================================================
// GOTO
// ============================================================================

/// Find the definition of the symbol at the given position.
///
/// Include filenames jump to the start of the included file.
pub fn goto_definition(workspace: &Workspace, file: FileId, position: Position) -> GotoResult {
    match resolve_at(workspace, file, position) {
        Some(resolved) => GotoResult::single(resolved.definition.target(file)),
        None => GotoResult::empty(),
    }
}
