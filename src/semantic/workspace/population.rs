//! Dependency graph population from resolved includes.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::base::FileId;
use crate::hir::{self, Diagnostic, InclusionDirective, codes};
use crate::project::load_file;
use crate::semantic::graphs::DependencyNode;
use crate::semantic::symbol_table::FileSymbols;
use crate::semantic::workspace::{ResolvedInclusion, Workspace};

impl Workspace {
    /// Resolve directives found in `path`, reporting the ones not found.
    pub(super) fn resolve_inclusions(
        &mut self,
        file: FileId,
        path: &Path,
        directives: &[InclusionDirective],
    ) -> (Vec<ResolvedInclusion>, Vec<Diagnostic>) {
        let mut resolved = Vec::new();
        let mut diagnostics = Vec::new();
        for directive in directives {
            match self.resolver.resolve(directive, path) {
                Some(target_path) => {
                    let target = self.interner.intern(&target_path);
                    resolved.push(ResolvedInclusion {
                        directive: directive.clone(),
                        target,
                        path: target_path,
                    });
                }
                None => diagnostics.push(include_not_found(file, directive)),
            }
        }
        (resolved, diagnostics)
    }

    /// Add one reference per dependency, returning the nodes still to be scanned.
    pub(super) fn add_references(&mut self, dependencies: &[FileId]) -> Vec<FileId> {
        dependencies
            .iter()
            .copied()
            .filter(|dep| !self.graph.add_reference(*dep).is_loaded())
            .collect()
    }

    /// Scan every unloaded node in `pending` and whatever they include.
    ///
    /// An unreadable file gets an empty symbol set; its own includes are not
    /// discovered.
    pub(super) fn populate(&mut self, mut pending: Vec<FileId>) {
        while let Some(file) = pending.pop() {
            if self.graph.get_node(file).is_none_or(DependencyNode::is_loaded) {
                continue;
            }
            let Some(path) = self.interner.path(file).map(Path::to_path_buf) else {
                continue;
            };

            let text: Option<Arc<str>> = match self.files.get(&file) {
                Some(record) => Some(record.text().clone()),
                None => match load_file(&path) {
                    Ok(text) => Some(Arc::from(text)),
                    Err(err) => {
                        warn!(%file, %err, "cannot read dependency");
                        None
                    }
                },
            };
            let symbols = match text {
                Some(text) => self.scan_dependency(file, &path, &text),
                None => FileSymbols::empty(file),
            };
            pending.extend(self.add_references(&symbols.dependencies));
            self.graph.set_symbols(symbols);
        }
    }

    /// Rescan a node whose file is open so its cache follows the buffer.
    pub(super) fn refresh_node(&mut self, file: FileId, path: &Path, text: &str) {
        let symbols = self.scan_dependency(file, path, text);
        let created = self.add_references(&symbols.dependencies);
        let released = self.graph.set_symbols(symbols);
        self.populate(created);
        self.graph.release(&released);
    }

    /// Drop every node no open file reaches.
    pub(super) fn sweep(&mut self) {
        let roots: Vec<FileId> = self
            .files
            .values()
            .flat_map(|record| record.dependencies().iter().copied())
            .collect();
        self.graph.sweep_unreachable(roots);
    }

    fn scan_dependency(&mut self, file: FileId, path: &Path, text: &str) -> FileSymbols {
        let parse = hir::extract(file, text, true);
        let mut targets = Vec::with_capacity(parse.inclusions.len());
        for directive in &parse.inclusions {
            if let Some(target_path) = self.resolver.resolve(directive, path) {
                targets.push(self.interner.intern(&target_path));
            }
        }
        FileSymbols::from_parse(file, &parse, targets)
    }
}

fn include_not_found(file: FileId, directive: &InclusionDirective) -> Diagnostic {
    let message = format!("cannot find include file '{}'", directive.filename);
    let diagnostic = if directive.is_silent {
        Diagnostic::info(file, directive.span, message)
    } else {
        Diagnostic::error(file, directive.span, message)
    };
    diagnostic.with_code(codes::INCLUDE_NOT_FOUND)
}
