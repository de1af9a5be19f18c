//! Temporary-directory workspaces for cross-file tests.

use std::fs;
use std::path::PathBuf;

use pawnls::base::{FileId, Position};
use pawnls::project::AnalyzerConfig;
use pawnls::semantic::Workspace;
use tempfile::TempDir;

/// A scratch directory that doubles as the only include path.
pub struct WorkspaceFixture {
    dir: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `text` to `name` (relative to the fixture root) and return its path.
    pub fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, text).expect("write fixture file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new().with_include_path(self.dir.path())
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(self.config())
    }

    /// Workspace with `main.pwn` open; returns the workspace and its id.
    pub fn open_main(&self, text: &str) -> (Workspace, FileId) {
        let mut workspace = self.workspace();
        let file = workspace.open(self.path("main.pwn"), text);
        (workspace, file)
    }
}

/// Position of the `n`th occurrence (0-based) of `needle` in `text`,
/// moved right by `delta` characters.
pub fn position_of(text: &str, needle: &str, n: usize, delta: usize) -> Position {
    let mut remaining = n;
    for (line_index, line) in text.split('\n').enumerate() {
        for (byte, _) in line.match_indices(needle) {
            if remaining == 0 {
                return Position::new(line_index, line[..byte].chars().count() + delta);
            }
            remaining -= 1;
        }
    }
    panic!("{needle:?} occurrence {n} not found");
}
