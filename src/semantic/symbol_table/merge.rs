//! Merged symbol view: a file's own symbols plus everything it includes.

use std::collections::VecDeque;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::base::{FileId, Span};
use crate::hir::{Callable, Value};
use crate::semantic::graphs::DependencyGraph;

use super::FileSymbols;

/// Callables and values visible from one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedSymbols {
    pub callables: Vec<Callable>,
    pub values: Vec<Value>,
}

impl MergedSymbols {
    pub fn callable(&self, name: &str) -> Option<&Callable> {
        self.callables.iter().find(|c| c.name.as_ref() == name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.name.as_ref() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.callables.is_empty() && self.values.is_empty()
    }
}

type SymbolKey = (FileId, Arc<str>, Span);

/// Union of `root` with every dependency reachable from it.
///
/// Own symbols come first, then dependencies breadth-first in directive
/// order. Each file is expanded at most once; entries with the same file,
/// name and span are kept once.
pub fn merged_symbols(root: &FileSymbols, graph: &DependencyGraph) -> MergedSymbols {
    let mut callables: IndexMap<SymbolKey, Callable> = IndexMap::new();
    let mut values: IndexMap<SymbolKey, Value> = IndexMap::new();
    let mut visited: FxHashSet<FileId> = FxHashSet::default();
    let mut queue: VecDeque<&FileSymbols> = VecDeque::new();

    visited.insert(root.file);
    queue.push_back(root);

    while let Some(symbols) = queue.pop_front() {
        for callable in &symbols.callables {
            callables
                .entry((callable.file, callable.name.clone(), callable.span))
                .or_insert_with(|| callable.clone());
        }
        for value in &symbols.values {
            values
                .entry((value.file, value.name.clone(), value.span))
                .or_insert_with(|| value.clone());
        }
        for dep in &symbols.dependencies {
            if !visited.insert(*dep) {
                continue;
            }
            if let Some(node) = graph.get_node(*dep) {
                queue.push_back(node.symbols());
            }
        }
    }

    MergedSymbols {
        callables: callables.into_values().collect(),
        values: values.into_values().collect(),
    }
}
