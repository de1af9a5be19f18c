//! Graphs over files.
mod dependency_graph;

pub use dependency_graph::{DependencyGraph, DependencyNode};
