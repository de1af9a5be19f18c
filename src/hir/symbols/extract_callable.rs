//! Function prototype extraction.
//!
//! Shape: `specifier* [tag:] name ( params )`, anchored at the first token of
//! the line. The name may be an operator such as `operator*`. Anything else on a line with parentheses is not a callable.

use std::ops::Range;
use std::sync::Arc;

use crate::parser::keywords::is_callable_specifier;
use crate::parser::{Token, TokenKind, split_top_level};

use super::context::{LineInput, ScanContext};
use super::helpers::{is_name, matching_close, operator_symbol_end, skip_tag};
use super::types::Callable;

/// A matched function prototype on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prototype<'a> {
    pub specifiers: Vec<&'a str>,
    pub name: &'a str,
    /// Byte range of the name within the line.
    pub name_range: Range<usize>,
    /// Byte range from the first token through the closing `)`.
    pub label_range: Range<usize>,
    /// Parameter texts with their byte offsets, trimmed, empties dropped.
    pub params: Vec<(usize, &'a str)>,
}

impl Prototype<'_> {
    pub fn is_static(&self) -> bool {
        self.specifiers.contains(&"static")
    }
}

/// Match the prototype shape against a line's tokens.
pub(crate) fn parse_prototype<'a>(code: &'a str, tokens: &[Token<'a>]) -> Option<Prototype<'a>> {
    let first = tokens.first()?;
    let mut i = 0;
    let mut specifiers = Vec::new();
    while let Some(tok) = tokens.get(i) {
        if tok.kind == TokenKind::Ident && is_callable_specifier(tok.text) {
            specifiers.push(tok.text);
            i += 1;
        } else {
            break;
        }
    }

    i = skip_tag(tokens, i);
    let name_start = tokens.get(i)?.span.start;
    let open_index = match operator_symbol_end(tokens, i) {
        Some(after) => after,
        None if is_name(&tokens[i]) => i + 1,
        None => return None,
    };
    let open = tokens.get(open_index)?;
    if open.kind != TokenKind::LParen {
        return None;
    }
    let name_range = name_start..tokens[open_index - 1].span.end;
    let close = &tokens[matching_close(tokens, open_index)?];
    if close.kind != TokenKind::RParen {
        return None;
    }

    let inner_start = open.span.end;
    let params = split_top_level(&code[inner_start..close.span.start], ',')
        .into_iter()
        .filter_map(|(offset, text)| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            let lead = text.len() - text.trim_start().len();
            Some((inner_start + offset + lead, trimmed))
        })
        .collect();

    Some(Prototype {
        specifiers,
        name: &code[name_range.clone()],
        name_range,
        label_range: first.span.start..close.span.end,
        params,
    })
}

/// Try to extract a callable from a global-scope line.
///
/// Returns true when the line matched the prototype shape, even if the
/// declaration was suppressed as local.
pub(super) fn extract_callable(ctx: &mut ScanContext, line: &LineInput<'_>) -> bool {
    let Some(proto) = parse_prototype(line.code, line.tokens) else {
        return false;
    };
    if ctx.suppress_local && proto.is_static() {
        ctx.clear_doc();
        return true;
    }

    let callable = Callable {
        label: Arc::from(line.code[proto.label_range.clone()].trim()),
        name: Arc::from(proto.name),
        is_macro: false,
        file: ctx.file,
        span: line.span(proto.name_range.start, proto.name_range.end),
        params: proto.params.iter().map(|(_, p)| Arc::from(*p)).collect(),
        doc: ctx.take_doc(),
    };
    ctx.callables.push(callable);
    true
}
