use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::base::FileId;
use crate::hir;
use crate::project::normalize_path;
use crate::semantic::symbol_table::FileSymbols;
use crate::semantic::workspace::{FileRecord, Workspace};

impl Workspace {
    /// Opens a file, or replaces an open file's text, and parses it immediately.
    pub fn open(&mut self, path: impl AsRef<Path>, text: impl Into<Arc<str>>) -> FileId {
        let path = normalize_path(path.as_ref());
        let file = self.interner.intern(&path);
        let text = text.into();
        match self.files.get_mut(&file) {
            Some(record) => record.set_text(text),
            None => {
                self.files
                    .insert(file, FileRecord::new(file, path.clone(), text));
            }
        }
        debug!(%file, path = %path.display(), "opened file");
        self.reparse(file);
        file
    }

    /// Updates an open file's text and schedules a debounced reparse.
    ///
    /// The reparse is due `reparse_delay` after the first edit since the last
    /// parse. Later edits before that deadline do not move it.
    pub fn change(
        &mut self,
        path: impl AsRef<Path>,
        text: impl Into<Arc<str>>,
        now: Instant,
    ) -> bool {
        let delay = self.config.reparse_delay;
        let Some(file) = self.open_file_id(path.as_ref()) else {
            return false;
        };
        let Some(record) = self.files.get_mut(&file) else {
            return false;
        };
        record.set_text(text.into());
        if record.pending.is_none() {
            record.pending = Some(now + delay);
        }
        true
    }

    /// Runs every reparse whose deadline is at or before `now`.
    ///
    /// Returns the reparsed files in id order.
    pub fn poll(&mut self, now: Instant) -> Vec<FileId> {
        let mut due: Vec<FileId> = self
            .files
            .values()
            .filter(|record| record.pending.is_some_and(|deadline| deadline <= now))
            .map(FileRecord::file)
            .collect();
        due.sort();
        for file in &due {
            self.reparse(*file);
        }
        due
    }

    /// Earliest pending reparse deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.files.values().filter_map(|record| record.pending).min()
    }

    /// Reparses an open file now, cancelling its pending deadline.
    pub fn flush(&mut self, path: impl AsRef<Path>) -> bool {
        let Some(file) = self.open_file_id(path.as_ref()) else {
            return false;
        };
        self.reparse(file);
        true
    }

    /// Closes a file, releasing its dependency references.
    pub fn close(&mut self, path: impl AsRef<Path>) -> bool {
        let Some(file) = self.open_file_id(path.as_ref()) else {
            return false;
        };
        let Some(record) = self.files.remove(&file) else {
            return false;
        };
        self.graph.release(record.dependencies());
        self.sweep();
        debug!(%file, path = %record.path().display(), nodes = self.graph.len(), "closed file");
        true
    }

    /// Id of an open file; asserts in debug builds that it is open.
    pub(super) fn open_file_id(&self, path: &Path) -> Option<FileId> {
        let file = self
            .interner
            .get(&normalize_path(path))
            .filter(|file| self.files.contains_key(file));
        debug_assert!(file.is_some(), "file is not open: {}", path.display());
        file
    }

    /// Scans an open file and installs the results.
    ///
    /// New dependency references are added before the old ones are released,
    /// and the sweep runs last.
    pub(super) fn reparse(&mut self, file: FileId) {
        let Some((path, text)) = self
            .files
            .get(&file)
            .map(|record| (record.path().to_path_buf(), record.text().clone()))
        else {
            return;
        };

        let parse = hir::extract(file, &text, false);
        let (inclusions, include_diagnostics) =
            self.resolve_inclusions(file, &path, &parse.inclusions);
        let targets = inclusions.iter().map(|inclusion| inclusion.target).collect();
        let symbols = FileSymbols::from_parse(file, &parse, targets);
        let created = self.add_references(&symbols.dependencies);

        let Some(record) = self.files.get_mut(&file) else {
            return;
        };
        let released = std::mem::replace(&mut record.symbols, symbols).dependencies;
        record.parse = parse;
        record.inclusions = inclusions;
        record.include_diagnostics = include_diagnostics;
        record.pending = None;
        record.bump_generation();
        let generation = record.generation();

        self.populate(created);
        if self.graph.contains(file) {
            self.refresh_node(file, &path, &text);
        }
        self.graph.release(&released);
        self.sweep();
        debug!(%file, generation, nodes = self.graph.len(), "reparsed file");
    }
}
