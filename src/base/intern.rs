//! Path interner handing out stable [`FileId`]s.
//!
//! Every file the analyzer touches, open in the editor or reached through an
//! `#include`, is interned once. The dependency arena and all symbol records
//! refer to files by id only.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::FileId;

/// Bidirectional map between normalized paths and file ids.
#[derive(Debug, Default, Clone)]
pub struct FileInterner {
    ids: FxHashMap<PathBuf, FileId>,
    paths: Vec<PathBuf>,
}

impl FileInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a path, returning the existing id when it was seen before.
    pub fn intern(&mut self, path: &Path) -> FileId {
        if let Some(&id) = self.ids.get(path) {
            return id;
        }
        let id = FileId::new(self.paths.len() as u32);
        self.paths.push(path.to_path_buf());
        self.ids.insert(path.to_path_buf(), id);
        id
    }

    /// Get the id of a path if it was interned, without creating it.
    pub fn get(&self, path: &Path) -> Option<FileId> {
        self.ids.get(path).copied()
    }

    /// Path of an interned file.
    pub fn path(&self, id: FileId) -> Option<&Path> {
        self.paths.get(id.index()).map(PathBuf::as_path)
    }

    /// Number of unique paths interned.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no paths have been interned.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
