use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::base::FileId;
use crate::hir::Diagnostic;
use crate::project::normalize_path;
use crate::semantic::graphs::DependencyGraph;
use crate::semantic::symbol_table::{MergedSymbols, merged_symbols};
use crate::semantic::workspace::{FileRecord, Workspace};

impl Workspace {
    /// Returns the id of an interned path without creating one
    pub fn file_id(&self, path: impl AsRef<Path>) -> Option<FileId> {
        self.interner.get(&normalize_path(path.as_ref()))
    }

    pub fn path(&self, file: FileId) -> Option<&Path> {
        self.interner.path(file)
    }

    pub fn is_open(&self, path: impl AsRef<Path>) -> bool {
        self.file_id(path)
            .is_some_and(|file| self.files.contains_key(&file))
    }

    pub fn record(&self, file: FileId) -> Option<&FileRecord> {
        self.files.get(&file)
    }

    /// Returns an iterator over all open files
    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    /// Returns the number of open files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Open buffer contents of a file, if it is open.
    pub fn open_text(&self, file: FileId) -> Option<Arc<str>> {
        self.files.get(&file).map(|record| record.text().clone())
    }

    /// Scanner and include-resolution diagnostics of an open file.
    pub fn diagnostics(&self, path: impl AsRef<Path>) -> Vec<Diagnostic> {
        let Some(record) = self
            .open_file_id(path.as_ref())
            .and_then(|file| self.files.get(&file))
        else {
            return Vec::new();
        };
        record
            .parse
            .diagnostics
            .iter()
            .chain(&record.include_diagnostics)
            .cloned()
            .collect()
    }

    /// Symbols visible from an open file: its own plus everything it includes.
    pub fn merged_symbols(&self, file: FileId) -> MergedSymbols {
        let Some(record) = self.files.get(&file) else {
            debug_assert!(false, "merged symbols requested for a file that is not open: {file}");
            return MergedSymbols::default();
        };
        merged_symbols(record.symbols(), &self.graph)
    }

    /// `file` followed by every file it includes, directly or transitively.
    pub fn dependency_closure(&self, file: FileId) -> Vec<FileId> {
        let mut visited: FxHashSet<FileId> = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack = vec![file];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current);
            let deps = match self.files.get(&current) {
                Some(record) if current == file => record.dependencies(),
                _ => match self.graph.get_node(current) {
                    Some(node) => node.symbols().dependencies.as_slice(),
                    None => &[],
                },
            };
            stack.extend(deps.iter().rev().copied());
        }
        order
    }
}
