//! Analysis: read-only snapshot for IDE queries.
//!
//! The [`Workspace`] owns all mutable state (open buffers, the dependency
//! graph, pending reparses). Queries go through an `Analysis` borrowed from
//! it, so every answer is computed against one consistent state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut workspace = Workspace::new(AnalyzerConfig::new());
//! let file = workspace.open("gamemode.pwn", text);
//!
//! let analysis = workspace.analysis();
//! let hover = analysis.hover(file, Position::new(3, 8));
//! let symbols = analysis.document_symbols(file);
//! ```

use std::path::Path;

use crate::base::{FileId, Position};
use crate::hir::Diagnostic;
use crate::semantic::Workspace;

use super::{
    CompletionItem, DocumentLink, GotoResult, HoverResult, ReferenceResult, SignatureHelp,
    SymbolInfo,
};

impl Workspace {
    /// Get a consistent snapshot for querying.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis { workspace: self }
    }
}

/// An immutable snapshot of the analysis state.
#[derive(Clone, Copy)]
pub struct Analysis<'a> {
    workspace: &'a Workspace,
}

impl<'a> Analysis<'a> {
    // ==================== Cursor features ====================

    /// Get hover information at a position.
    pub fn hover(&self, file: FileId, position: Position) -> Option<HoverResult> {
        super::hover(self.workspace, file, position)
    }

    /// Go to definition at a position.
    pub fn goto_definition(&self, file: FileId, position: Position) -> GotoResult {
        super::goto_definition(self.workspace, file, position)
    }

    /// Find all references to a symbol at a position.
    pub fn find_references(
        &self,
        file: FileId,
        position: Position,
        include_declaration: bool,
    ) -> ReferenceResult {
        super::find_references(self.workspace, file, position, include_declaration)
    }

    pub fn signature_help(&self, file: FileId, position: Position) -> Option<SignatureHelp> {
        super::signature_help(self.workspace, file, position)
    }

    /// Get completions at a position.
    pub fn completions(&self, file: FileId, position: Position) -> Vec<CompletionItem> {
        super::completions(self.workspace, file, position)
    }

    // ==================== File features ====================

    /// Get all symbols in a document.
    pub fn document_symbols(&self, file: FileId) -> Vec<SymbolInfo> {
        super::document_symbols(self.workspace, file)
    }

    /// Search for symbols across open files and their includes.
    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        super::workspace_symbols(self.workspace, query)
    }

    /// Get document links (include filenames).
    pub fn document_links(&self, file: FileId) -> Vec<DocumentLink> {
        super::document_links(self.workspace, file)
    }

    pub fn diagnostics(&self, path: impl AsRef<Path>) -> Vec<Diagnostic> {
        self.workspace.diagnostics(path)
    }

    // ==================== Accessors ====================

    pub fn file_id(&self, path: impl AsRef<Path>) -> Option<FileId> {
        self.workspace.file_id(path)
    }

    pub fn workspace(&self) -> &'a Workspace {
        self.workspace
    }
}
