//! Reference-counted registry of files reached through `#include`.
//!
//! Nodes live in an arena keyed by [`FileId`]. A node's count is the number of
//! symbol sets (open files or other nodes) listing it as a direct dependency.
//! Edges may form cycles and diamonds, so every traversal keeps a visited set.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::base::FileId;
use crate::semantic::symbol_table::FileSymbols;

/// One included file with its cached symbols.
#[derive(Clone, Debug)]
pub struct DependencyNode {
    file: FileId,
    ref_count: usize,
    symbols: FileSymbols,
    loaded: bool,
}

impl DependencyNode {
    fn new(file: FileId) -> Self {
        Self {
            file,
            ref_count: 0,
            symbols: FileSymbols::empty(file),
            loaded: false,
        }
    }

    pub fn file(&self) -> FileId {
        self.file
    }

    pub fn ref_count(&self) -> usize {
        self.ref_count
    }

    pub fn symbols(&self) -> &FileSymbols {
        &self.symbols
    }

    /// Whether the file has been scanned since the node was created.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Arena of dependency nodes.
#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    nodes: FxHashMap<FileId, DependencyNode>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup without creating.
    pub fn get_node(&self, file: FileId) -> Option<&DependencyNode> {
        self.nodes.get(&file)
    }

    /// Create the node with count 1, or increment an existing node's count.
    pub fn add_reference(&mut self, file: FileId) -> &DependencyNode {
        let node = self.nodes.entry(file).or_insert_with(|| {
            debug!(%file, "created dependency node");
            DependencyNode::new(file)
        });
        node.ref_count += 1;
        trace!(%file, count = node.ref_count, "added dependency reference");
        node
    }

    /// Decrement each node's count. Nodes at zero stay until the next sweep.
    pub fn release(&mut self, files: &[FileId]) {
        for file in files {
            let Some(node) = self.nodes.get_mut(file) else {
                continue;
            };
            debug_assert!(node.ref_count > 0, "released {file} with no references");
            node.ref_count = node.ref_count.saturating_sub(1);
            trace!(%file, count = node.ref_count, "released dependency reference");
        }
    }

    /// Install freshly scanned symbols, returning the previous dependency list.
    ///
    /// Reference counts of the dependencies are left to the caller.
    pub fn set_symbols(&mut self, symbols: FileSymbols) -> Vec<FileId> {
        match self.nodes.get_mut(&symbols.file) {
            Some(node) => {
                node.loaded = true;
                std::mem::replace(&mut node.symbols, symbols).dependencies
            }
            None => Vec::new(),
        }
    }

    /// Delete every node not reachable from `roots`, whatever its count.
    ///
    /// `roots` are the direct dependencies of the open files. Dependencies of
    /// deleted nodes that survive lose that node's reference. Returns the
    /// deleted files.
    pub fn sweep_unreachable(&mut self, roots: impl IntoIterator<Item = FileId>) -> Vec<FileId> {
        let mut reachable: FxHashSet<FileId> = FxHashSet::default();
        let mut stack: Vec<FileId> = roots.into_iter().collect();
        while let Some(file) = stack.pop() {
            if !reachable.insert(file) {
                continue;
            }
            if let Some(node) = self.nodes.get(&file) {
                stack.extend(node.symbols.dependencies.iter().copied());
            }
        }

        let mut removed: Vec<FileId> = self
            .nodes
            .keys()
            .filter(|file| !reachable.contains(file))
            .copied()
            .collect();
        removed.sort();

        let mut released = Vec::new();
        for file in &removed {
            if let Some(node) = self.nodes.remove(file) {
                released.extend(node.symbols.dependencies);
            }
        }
        released.retain(|dep| self.nodes.contains_key(dep));
        self.release(&released);

        if !removed.is_empty() {
            debug!(removed = removed.len(), remaining = self.nodes.len(), "swept dependency graph");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, file: FileId) -> bool {
        self.nodes.contains_key(&file)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyNode> {
        self.nodes.values()
    }
}
