//! Symbol listing for workspace and document views.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{FileId, Span};
use crate::hir::{Callable, SymbolKind, Value};
use crate::semantic::Workspace;

/// A symbol for the workspace symbol list or document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: Arc<str>,
    pub kind: SymbolKind,
    /// File containing the symbol.
    pub file: FileId,
    pub span: Span,
    /// Declaration text.
    pub detail: Arc<str>,
    /// Enum an enum member belongs to.
    pub container: Option<Arc<str>>,
}

impl SymbolInfo {
    pub fn from_callable(callable: &Callable) -> Self {
        Self {
            name: callable.name.clone(),
            kind: callable.kind(),
            file: callable.file,
            span: callable.span,
            detail: callable.label.clone(),
            container: None,
        }
    }

    pub fn from_value(value: &Value) -> Self {
        Self {
            name: value.name.clone(),
            kind: value.kind(),
            file: value.file,
            span: value.span,
            detail: value.label.clone(),
            container: value.enum_group.clone(),
        }
    }
}

/// Callables then values, with a constant macro listed once as a macro.
fn collect<'a>(callables: &'a [Callable], values: &'a [Value]) -> impl Iterator<Item = SymbolInfo> + 'a {
    let macro_spans: Vec<(FileId, Span)> = callables
        .iter()
        .filter(|c| c.is_macro)
        .map(|c| (c.file, c.span))
        .collect();
    callables.iter().map(SymbolInfo::from_callable).chain(
        values
            .iter()
            .filter(move |v| !macro_spans.contains(&(v.file, v.span)))
            .map(SymbolInfo::from_value),
    )
}

/// Get all symbols in the workspace, optionally filtered by a query.
///
/// Covers open files and every file they include, including `static`
/// declarations of open files. The query is a case-insensitive substring.
pub fn workspace_symbols(workspace: &Workspace, query: Option<&str>) -> Vec<SymbolInfo> {
    let query_lower = query.map(|q| q.to_lowercase());
    let mut unique: IndexMap<(FileId, Span, Arc<str>), SymbolInfo> = IndexMap::new();

    let open = workspace
        .records()
        .map(|record| (&record.parse().callables, &record.parse().values));
    let included = workspace
        .graph()
        .iter()
        .map(|node| (&node.symbols().callables, &node.symbols().values));

    for (callables, values) in open.chain(included) {
        for info in collect(callables, values) {
            let matches = query_lower
                .as_deref()
                .is_none_or(|q| info.name.to_lowercase().contains(q));
            if matches {
                unique
                    .entry((info.file, info.span, info.name.clone()))
                    .or_insert(info);
            }
        }
    }

    let mut results: Vec<SymbolInfo> = unique.into_values().collect();
    results.sort_by(|a, b| a.name.cmp(&b.name).then(a.file.cmp(&b.file)));
    results
}

/// Get all symbols declared in an open file, in source order.
pub fn document_symbols(workspace: &Workspace, file: FileId) -> Vec<SymbolInfo> {
    let Some(record) = workspace.record(file) else {
        debug_assert!(false, "document symbols requested for a file that is not open: {file}");
        return Vec::new();
    };
    let parse = record.parse();
    let mut results: Vec<SymbolInfo> = collect(&parse.callables, &parse.values).collect();
    results.sort_by_key(|s| s.span);
    results
}
