//! Open-file record

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::base::FileId;
use crate::hir::{Diagnostic, InclusionDirective, ParseResult};
use crate::semantic::symbol_table::FileSymbols;

/// An inclusion directive located on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedInclusion {
    pub directive: InclusionDirective,
    pub target: FileId,
    pub path: PathBuf,
}

/// State of one file open in the editor.
///
/// Everything derived from the text is overwritten wholesale on each reparse.
#[derive(Debug)]
pub struct FileRecord {
    file: FileId,
    path: PathBuf,
    text: Arc<str>,
    pub(super) parse: ParseResult,
    pub(super) inclusions: Vec<ResolvedInclusion>,
    pub(super) include_diagnostics: Vec<Diagnostic>,
    pub(super) symbols: FileSymbols,
    /// Deadline of the pending debounced reparse.
    pub(super) pending: Option<Instant>,
    generation: u64,
}

impl FileRecord {
    pub(super) fn new(file: FileId, path: PathBuf, text: Arc<str>) -> Self {
        Self {
            file,
            path,
            text,
            parse: ParseResult::default(),
            inclusions: Vec::new(),
            include_diagnostics: Vec::new(),
            symbols: FileSymbols::empty(file),
            pending: None,
            generation: 0,
        }
    }

    pub fn file(&self) -> FileId {
        self.file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Latest buffer contents, possibly newer than the last parse.
    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn parse(&self) -> &ParseResult {
        &self.parse
    }

    pub fn inclusions(&self) -> &[ResolvedInclusion] {
        &self.inclusions
    }

    pub fn symbols(&self) -> &FileSymbols {
        &self.symbols
    }

    pub fn dependencies(&self) -> &[FileId] {
        &self.symbols.dependencies
    }

    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Number of completed parses.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn set_text(&mut self, text: Arc<str>) {
        self.text = text;
    }

    pub(super) fn bump_generation(&mut self) {
        self.generation += 1;
    }
}
