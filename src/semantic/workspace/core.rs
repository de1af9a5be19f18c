use rustc_hash::FxHashMap;

use crate::base::{FileId, FileInterner};
use crate::project::{AnalyzerConfig, IncludeResolver};
use crate::semantic::graphs::DependencyGraph;
use crate::semantic::workspace::FileRecord;

/// Session manager for open files and the files they include.
pub struct Workspace {
    pub(super) config: AnalyzerConfig,
    pub(super) resolver: IncludeResolver,
    pub(super) interner: FileInterner,
    pub(super) files: FxHashMap<FileId, FileRecord>,
    pub(super) graph: DependencyGraph,
}

impl Workspace {
    /// Creates a new empty workspace
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            resolver: IncludeResolver::new(&config),
            config,
            interner: FileInterner::new(),
            files: FxHashMap::default(),
            graph: DependencyGraph::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
