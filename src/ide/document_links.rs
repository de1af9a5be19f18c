//! Document links: clickable include filenames.

use std::path::PathBuf;

use crate::base::{FileId, Span};
use crate::semantic::Workspace;

/// A link from an include filename to the file it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    /// Filename span, delimiters included.
    pub span: Span,
    pub target_file: FileId,
    pub target: PathBuf,
    /// Tooltip text for the link.
    pub tooltip: String,
}

/// Get document links for an open file.
///
/// Unresolved includes produce no link.
pub fn document_links(workspace: &Workspace, file: FileId) -> Vec<DocumentLink> {
    let Some(record) = workspace.record(file) else {
        debug_assert!(false, "document links requested for a file that is not open: {file}");
        return Vec::new();
    };
    record
        .inclusions()
        .iter()
        .map(|inclusion| DocumentLink {
            span: inclusion.directive.span,
            target_file: inclusion.target,
            target: inclusion.path.clone(),
            tooltip: format!("Open {}", inclusion.path.display()),
        })
        .collect()
}
