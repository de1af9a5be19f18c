//! Signature help for the call surrounding the caret.

use std::sync::Arc;

use crate::base::{FileId, Position};
use crate::ide::text_utils::{is_word_char, line_at};
use crate::parser::{LineStripper, split_top_level};
use crate::semantic::Workspace;

/// Signature of the callable being called at the caret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHelp {
    pub label: Arc<str>,
    pub parameters: Vec<Arc<str>>,
    /// Zero-based index of the argument the caret is in.
    pub active_parameter: usize,
    pub doc: Option<Arc<str>>,
}

/// Signature help at `position` in an open file.
pub fn signature_help(workspace: &Workspace, file: FileId, position: Position) -> Option<SignatureHelp> {
    let Some(record) = workspace.record(file) else {
        debug_assert!(false, "signature help requested for a file that is not open: {file}");
        return None;
    };
    let line = line_at(record.text(), position.line)?;
    let code = LineStripper::new().strip(line).code;
    let (name, active_parameter) = call_context(&code, position.column)?;

    let merged = workspace.merged_symbols(file);
    let callable = merged.callable(&name)?;
    Some(SignatureHelp {
        label: callable.label.clone(),
        parameters: callable.params.clone(),
        active_parameter,
        doc: callable.doc.clone(),
    })
}

/// Callee name and argument index for the innermost unclosed `(` before `column`.
fn call_context(code: &str, column: usize) -> Option<(String, usize)> {
    let chars: Vec<char> = code.chars().take(column).collect();
    let mut opens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            quote @ ('"' | '\'') => {
                i += 1;
                while i < chars.len() && chars[i] != quote {
                    i += if chars[i] == '\\' { 2 } else { 1 };
                }
            }
            '(' => opens.push(i),
            ')' => {
                opens.pop();
            }
            _ => {}
        }
        i += 1;
    }
    let open = *opens.last()?;

    let mut end = open;
    while end > 0 && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    if start == end {
        return None;
    }

    let args: String = chars[open + 1..].iter().collect();
    let active = split_top_level(&args, ',').len() - 1;
    Some((chars[start..end].iter().collect(), active))
}
