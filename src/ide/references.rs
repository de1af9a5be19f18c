//! Find references implementation.
//!
//! References are textual: every file reachable from the query file is
//! scanned for whole-word occurrences of the name and for the name written
//! as a string literal (callback names passed to timers and the like).

use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::base::{FileId, Position, Span, char_column};
use crate::ide::goto::{Definition, resolve_at};
use crate::ide::text_utils::is_word_char;
use crate::parser::{LineStripper, normalize_line_endings};
use crate::project::load_file;
use crate::semantic::Workspace;

/// Result of a find-references request.
#[derive(Clone, Debug, Default)]
pub struct ReferenceResult {
    /// All references found, sorted by file then position.
    pub references: Vec<Reference>,
    /// Include the definition in the results.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// A reference to a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// The file containing the reference.
    pub file: FileId,
    pub span: Span,
    /// Whether this is the definition (vs a reference).
    pub is_definition: bool,
}

/// Find all references to the symbol at the given position.
///
/// Block locals are searched in the query file only. Files that cannot be
/// read are skipped.
pub fn find_references(
    workspace: &Workspace,
    file: FileId,
    position: Position,
    include_declaration: bool,
) -> ReferenceResult {
    let Some(resolved) = resolve_at(workspace, file, position) else {
        return ReferenceResult::empty();
    };
    let Some(ident) = resolved.ident else {
        return ReferenceResult::empty();
    };
    let name: Arc<str> = Arc::from(ident.name);

    let (files, declaration) = match &resolved.definition {
        Definition::Local(local) => (vec![file], (file, local.span)),
        Definition::Callable(callable) => (workspace.dependency_closure(file), (callable.file, callable.span)),
        Definition::Value(value) => (workspace.dependency_closure(file), (value.file, value.span)),
        Definition::Inclusion(_) => return ReferenceResult::empty(),
    };

    let sources: Vec<(FileId, Option<Arc<str>>, Option<PathBuf>)> = files
        .iter()
        .map(|&f| (f, workspace.open_text(f), workspace.path(f).map(PathBuf::from)))
        .collect();

    let mut references: Vec<Reference> = sources
        .into_par_iter()
        .flat_map_iter(|(f, open, path)| {
            let text = match (open, path) {
                (Some(text), _) => Some(text),
                (None, Some(path)) => match load_file(&path) {
                    Ok(text) => Some(Arc::from(text)),
                    Err(err) => {
                        debug!("skipping {} in reference search: {err}", path.display());
                        None
                    }
                },
                (None, None) => None,
            };
            let spans = text.map(|text| find_occurrences(&text, &name)).unwrap_or_default();
            spans.into_iter().map(move |span| Reference {
                file: f,
                span,
                is_definition: (f, span) == declaration,
            })
        })
        .collect();

    if include_declaration && !references.iter().any(|r| r.is_definition) {
        references.push(Reference {
            file: declaration.0,
            span: declaration.1,
            is_definition: true,
        });
    }
    references.retain(|r| include_declaration || !r.is_definition);
    references.sort_by_key(|r| (r.file, r.span));
    references.dedup_by_key(|r| (r.file, r.span));

    ReferenceResult {
        references,
        include_declaration,
    }
}

/// Whole-word and quoted occurrences of `name`, comments excluded.
pub fn find_occurrences(text: &str, name: &str) -> Vec<Span> {
    if name.is_empty() {
        return Vec::new();
    }
    let text = normalize_line_endings(text);
    let quoted = format!("\"{name}\"");
    let mut stripper = LineStripper::new();
    let mut spans = Vec::new();

    for (index, raw) in text.split('\n').enumerate() {
        let code = stripper.strip(raw).code;
        for (offset, _) in code.match_indices(name) {
            let end = offset + name.len();
            let before = code[..offset].chars().next_back();
            let after = code[end..].chars().next();
            if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
                continue;
            }
            spans.push(Span::on_line(index, char_column(&code, offset), char_column(&code, end)));
        }
        for (offset, _) in code.match_indices(&quoted) {
            let start = offset + 1;
            let end = start + name.len();
            spans.push(Span::on_line(index, char_column(&code, start), char_column(&code, end)));
        }
    }
    spans.sort();
    spans.dedup();
    spans
}
