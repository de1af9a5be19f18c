//! Preprocessor lines: `#include`, `#tryinclude` and `#define`.
//!
//! Other directives are skipped. A directive ending in `\` continues on the
//! next line; continuation lines carry no declarations.

use std::sync::Arc;

use crate::parser::keywords::{DEFINE_DIRECTIVE, INCLUDE_DIRECTIVES};
use crate::parser::{continues, split_top_level};

use super::context::{LineInput, ScanContext};
use super::helpers::simple_literal;
use super::types::{Callable, InclusionDirective, Value};

fn is_macro_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '@'
}

/// Length in bytes of the leading run of `text` matching `pred`.
fn run_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.find(|c: char| !pred(c)).unwrap_or(text.len())
}

/// Process a directive line (or the continuation of one).
pub(super) fn handle_directive(ctx: &mut ScanContext, line: &LineInput<'_>) {
    let code = line.code;
    let continued = ctx.directive_continues;
    ctx.directive_continues = continues(code);
    if continued {
        return;
    }
    let Some(hash) = code.find('#') else {
        return;
    };

    let after_hash = hash + 1;
    let word_start = after_hash + run_len(&code[after_hash..], char::is_whitespace);
    let word_end = word_start + run_len(&code[word_start..], |c| c.is_ascii_alphanumeric() || c == '_');
    let word = &code[word_start..word_end];

    if INCLUDE_DIRECTIVES.contains(&word) {
        extract_include(ctx, line, word, word_start..word_end);
    } else if word == DEFINE_DIRECTIVE {
        extract_define(ctx, line, word_end);
    }
}

fn extract_include(
    ctx: &mut ScanContext,
    line: &LineInput<'_>,
    directive: &str,
    word: std::ops::Range<usize>,
) {
    let code = line.code;
    let code_end = code.trim_end().len();
    let open = word.end + run_len(&code[word.end..], char::is_whitespace);

    let terminator = match code[open..].chars().next() {
        Some('"') => '"',
        Some('<') => '>',
        _ => {
            let span = if open < code_end {
                line.span(open, code_end)
            } else {
                line.span(word.start, word.end)
            };
            ctx.diagnostics.malformed_include(span, directive);
            return;
        }
    };

    let name_start = open + 1;
    let close = match code[name_start..].find(terminator) {
        Some(rel) if !code[name_start..name_start + rel].trim().is_empty() => name_start + rel,
        _ => {
            ctx.diagnostics
                .malformed_include(line.span(open, code_end), directive);
            return;
        }
    };

    let after = close + 1;
    if after < code_end {
        let trailing_start = after + run_len(&code[after..], char::is_whitespace);
        ctx.diagnostics
            .include_trailing(line.span(trailing_start, code_end), directive);
    }

    ctx.inclusions.push(InclusionDirective {
        filename: Arc::from(code[name_start..close].trim()),
        is_local: terminator == '"',
        is_silent: directive == "tryinclude",
        span: line.span(open, after),
    });
}

/// `#define NAME(params) body` or `#define NAME [value]`.
fn extract_define(ctx: &mut ScanContext, line: &LineInput<'_>, body_start: usize) {
    let code = line.code;
    let name_start = body_start + run_len(&code[body_start..], char::is_whitespace);
    let name_end = name_start + run_len(&code[name_start..], is_macro_char);
    if name_end == name_start {
        return;
    }
    let name = &code[name_start..name_end];
    let span = line.span(name_start, name_end);
    let doc = ctx.take_doc();

    if code[name_end..].starts_with('(') {
        if let Some(rel) = code[name_end..].find(')') {
            let close = name_end + rel;
            let params = split_top_level(&code[name_end + 1..close], ',')
                .into_iter()
                .map(|(_, p)| p.trim())
                .filter(|p| !p.is_empty())
                .map(Arc::from)
                .collect();
            ctx.callables.push(Callable {
                label: Arc::from(format!("#define {}", &code[name_start..=close])),
                name: Arc::from(name),
                is_macro: true,
                file: ctx.file,
                span,
                params,
                doc,
            });
            return;
        }
    }

    let label: Arc<str> = Arc::from(format!("#define {}", name));
    let value = code[name_end..].trim().trim_end_matches('\\').trim_end();
    if let Some(literal) = simple_literal(value) {
        ctx.values.push(Value {
            name: Arc::from(name),
            label: label.clone(),
            is_const: true,
            is_enum_member: false,
            is_enum_type: false,
            enum_group: None,
            literal: Some(Arc::from(literal)),
            inline_comment: line.trailing_comment(),
            file: ctx.file,
            span,
            doc: doc.clone(),
        });
    }
    ctx.callables.push(Callable {
        label,
        name: Arc::from(name),
        is_macro: true,
        file: ctx.file,
        span,
        params: Vec::new(),
        doc,
    });
}
