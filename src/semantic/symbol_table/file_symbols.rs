use crate::base::FileId;
use crate::hir::{Callable, ParseResult, Value};

/// The global symbols of one file and the files it directly includes.
///
/// Held by open files and, separately, cached on dependency nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSymbols {
    pub file: FileId,
    pub callables: Vec<Callable>,
    pub values: Vec<Value>,
    /// Resolved direct dependencies, de-duplicated, in directive order.
    pub dependencies: Vec<FileId>,
}

impl FileSymbols {
    pub fn empty(file: FileId) -> Self {
        Self {
            file,
            callables: Vec::new(),
            values: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Take the symbols of a scan, paired with already resolved dependencies.
    pub fn from_parse(file: FileId, parse: &ParseResult, dependencies: Vec<FileId>) -> Self {
        let mut deduped: Vec<FileId> = Vec::with_capacity(dependencies.len());
        for dep in dependencies {
            if !deduped.contains(&dep) {
                deduped.push(dep);
            }
        }
        Self {
            file,
            callables: parse.callables.clone(),
            values: parse.values.clone(),
            dependencies: deduped,
        }
    }
}
