//! Completion suggestions implementation.

use std::sync::Arc;

use crate::base::{FileId, Position};
use crate::hir::SymbolKind;
use crate::ide::text_utils::{line_at, prefix_at};
use crate::semantic::Workspace;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Function,
    /// `#define` macro. LSP has no macro kind, so it is reported as a function.
    Macro,
    Constant,
    Variable,
    EnumMember,
    Enum,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Function | CompletionKind::Macro => 3,
            CompletionKind::Constant => 21,
            CompletionKind::Variable => 6,
            CompletionKind::EnumMember => 20,
            CompletionKind::Enum => 13,
        }
    }
}

impl From<SymbolKind> for CompletionKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Function => CompletionKind::Function,
            SymbolKind::Macro => CompletionKind::Macro,
            SymbolKind::Constant => CompletionKind::Constant,
            SymbolKind::Variable => CompletionKind::Variable,
            SymbolKind::EnumMember => CompletionKind::EnumMember,
            SymbolKind::Enum => CompletionKind::Enum,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Declaration text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: Option<Arc<str>>) -> Self {
        self.documentation = doc;
        self
    }
}

/// Get completion suggestions at a position.
///
/// Every visible callable and value whose name starts with the identifier
/// prefix before the caret. A macro that is also a constant is offered once,
/// as a macro.
pub fn completions(workspace: &Workspace, file: FileId, position: Position) -> Vec<CompletionItem> {
    let Some(record) = workspace.record(file) else {
        debug_assert!(false, "completion requested for a file that is not open: {file}");
        return Vec::new();
    };
    let prefix = line_at(record.text(), position.line)
        .map(|line| prefix_at(line, position.column))
        .unwrap_or_default();

    let merged = workspace.merged_symbols(file);
    let mut items: Vec<CompletionItem> = Vec::new();

    for callable in merged.callables.iter().filter(|c| c.name.starts_with(prefix.as_str())) {
        items.push(
            CompletionItem::new(callable.name.clone(), callable.kind().into())
                .with_detail(callable.label.clone())
                .with_documentation(callable.doc.clone()),
        );
    }
    for value in merged.values.iter().filter(|v| v.name.starts_with(prefix.as_str())) {
        let shadowed_macro = merged
            .callables
            .iter()
            .any(|c| c.is_macro && c.file == value.file && c.span == value.span);
        if shadowed_macro {
            continue;
        }
        items.push(
            CompletionItem::new(value.name.clone(), value.kind().into())
                .with_detail(value.label.clone())
                .with_documentation(value.doc.clone()),
        );
    }
    items
}
