//! Include-path resolution.
//!
//! A filename is tried against each search directory in order: the including
//! file's own directory first for `"quoted"` includes, then every configured
//! include path. In each directory the exact name is tried, then the name with
//! each configured extension appended. The first existing file wins.

use std::path::{Component, Path, PathBuf};

use crate::hir::InclusionDirective;

use super::config::AnalyzerConfig;
use super::file_loader::is_file;

/// Resolves inclusion directives to files on disk.
#[derive(Clone, Debug, Default)]
pub struct IncludeResolver {
    include_paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl IncludeResolver {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            include_paths: config.include_paths.iter().map(|p| normalize_path(p)).collect(),
            extensions: config.include_extensions.clone(),
        }
    }

    /// Locate the target of `directive` included from `from`.
    pub fn resolve(&self, directive: &InclusionDirective, from: &Path) -> Option<PathBuf> {
        self.resolve_name(&directive.filename, directive.is_local, from)
    }

    /// Locate `filename` as included from `from`.
    pub fn resolve_name(&self, filename: &str, is_local: bool, from: &Path) -> Option<PathBuf> {
        let local_dir = is_local.then(|| from.parent()).flatten();
        let found = local_dir
            .into_iter()
            .chain(self.include_paths.iter().map(PathBuf::as_path))
            .find_map(|dir| self.try_dir(dir, filename));

        match &found {
            Some(path) => tracing::trace!(filename, resolved = %path.display(), "resolved include"),
            None => tracing::trace!(filename, from = %from.display(), "include not found"),
        }
        found
    }

    fn try_dir(&self, dir: &Path, filename: &str) -> Option<PathBuf> {
        let exact = normalize_path(&dir.join(filename));
        if is_file(&exact) {
            return Some(exact);
        }
        self.extensions.iter().find_map(|ext| {
            let candidate = normalize_path(&dir.join(format!("{filename}.{ext}")));
            is_file(&candidate).then_some(candidate)
        })
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
