//! Extraction entry point and per-line dispatch.

use crate::base::FileId;
use crate::parser::{LineStripper, is_directive, normalize_line_endings, tokenize};

use super::context::{EnumState, LineInput, ScanContext};
use super::extract_callable::extract_callable;
use super::extract_declaration::{continue_declaration, extract_declaration, finish_declaration};
use super::extract_enum::{continue_enum, start_enum, update_enum_exit};
use super::extract_preprocessor::handle_directive;
use super::types::ParseResult;

/// Scan one file's text into symbols, inclusion directives and diagnostics.
///
/// Never fails: problems become diagnostics and scanning resumes on the next
/// line. With `suppress_local`, `static` declarations are skipped (used for
/// files only reached through includes).
pub fn extract(file: FileId, text: &str, suppress_local: bool) -> ParseResult {
    let text = normalize_line_endings(text);
    let mut ctx = ScanContext::new(file, suppress_local);
    let mut stripper = LineStripper::new();

    for (index, raw) in text.split('\n').enumerate() {
        let stripped = stripper.strip(raw);
        if let Some(doc) = &stripped.doc {
            ctx.set_doc(doc);
        }
        let code = stripped.code.as_str();
        let tokens = tokenize(code);
        let line = LineInput {
            index,
            code,
            trailing: stripped.trailing.as_deref(),
            tokens: &tokens,
        };

        if ctx.directive_continues || is_directive(code) {
            handle_directive(&mut ctx, &line);
        } else {
            scan_code_line(&mut ctx, &line);
            ctx.apply_braces(index, code);
            update_enum_exit(&mut ctx);
        }

        if !code.trim().is_empty() {
            ctx.clear_doc();
        }
    }

    finish_declaration(&mut ctx);
    let result = ctx.finish();
    tracing::trace!(
        file = %file,
        callables = result.callables.len(),
        values = result.values.len(),
        inclusions = result.inclusions.len(),
        diagnostics = result.diagnostics.len(),
        "scanned file"
    );
    result
}

/// Dispatch a non-directive line to the construct extractors.
fn scan_code_line(ctx: &mut ScanContext, line: &LineInput<'_>) {
    if ctx.declaration.is_some() {
        continue_declaration(ctx, line);
        return;
    }
    if ctx.enum_state != EnumState::NotInEnum {
        continue_enum(ctx, line);
        return;
    }
    // Function bodies and other blocks hold no global symbols.
    if ctx.depth != 0 {
        return;
    }
    let Some(first) = line.tokens.first() else {
        return;
    };
    if start_enum(ctx, line) {
        return;
    }

    let has_parens = line.code.contains('(') && line.code.contains(')');
    if has_parens
        && !first.is_ident("new")
        && !first.is_ident("const")
        && extract_callable(ctx, line)
    {
        return;
    }
    extract_declaration(ctx, line);
}
