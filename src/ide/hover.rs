//! Hover information implementation.

use crate::base::{FileId, Position, Span};
use crate::hir::{Callable, Value};
use crate::ide::goto::{Definition, resolve_at};
use crate::semantic::Workspace;

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Range of the hovered identifier or include filename.
    pub span: Span,
}

/// Get hover information for the symbol at the given position.
pub fn hover(workspace: &Workspace, file: FileId, position: Position) -> Option<HoverResult> {
    let resolved = resolve_at(workspace, file, position)?;

    let (contents, span) = match &resolved.definition {
        Definition::Inclusion(inclusion) => (
            format!("`{}`", inclusion.path.display()),
            inclusion.directive.span,
        ),
        Definition::Local(local) => (code_block(&local.label), resolved.ident.as_ref()?.span),
        Definition::Callable(callable) => (callable_contents(callable), resolved.ident.as_ref()?.span),
        Definition::Value(value) => (value_contents(value), resolved.ident.as_ref()?.span),
    };

    Some(HoverResult { contents, span })
}

fn code_block(label: &str) -> String {
    format!("```pawn\n{label}\n```")
}

fn callable_contents(callable: &Callable) -> String {
    let mut contents = code_block(&callable.label);
    if let Some(doc) = &callable.doc {
        contents.push_str("\n\n");
        contents.push_str(doc);
    }
    contents
}

fn value_contents(value: &Value) -> String {
    let label = match &value.literal {
        Some(literal) if value.label.starts_with('#') => format!("{} {}", value.label, literal),
        Some(literal) => format!("{} = {}", value.label, literal),
        None => value.label.to_string(),
    };
    let mut contents = code_block(&label);
    for extra in [&value.inline_comment, &value.doc].into_iter().flatten() {
        contents.push_str("\n\n");
        contents.push_str(extra);
    }
    contents
}
