//! Enum extraction.
//!
//! `NotInEnum → AwaitingBrace → InEnum → NotInEnum`. Members are found by
//! splitting the body on commas at the enum's own depth; the body ends at the
//! `}` that takes the depth below it.

use std::sync::Arc;

use crate::parser::keywords::ENUM_KEYWORD;
use crate::parser::{TokenKind, tokenize};

use super::context::{EnumState, LineInput, ScanContext};
use super::helpers::{is_name, matching_close, simple_literal, skip_tag};
use super::types::Value;

/// Handle a global-scope line starting with `enum`.
///
/// Returns false when the line does not start an enum.
pub(super) fn start_enum(ctx: &mut ScanContext, line: &LineInput<'_>) -> bool {
    let tokens = line.tokens;
    if !tokens.first().is_some_and(|t| t.is_ident(ENUM_KEYWORD)) {
        return false;
    }

    // enum [tag:] [Name] [(increment)] [{ ... }]
    let mut i = 1;
    let mut name_tok = None;
    if let Some(tok) = tokens.get(i) {
        let after_tag = skip_tag(tokens, i);
        let candidate = if after_tag != i && tokens.get(after_tag).is_some_and(is_name) {
            after_tag
        } else {
            i
        };
        if let Some(tok) = tokens.get(candidate).filter(|t| is_name(t)) {
            name_tok = Some(tok);
            i = candidate + 1;
            // `enum Name:` is a tagged enum.
            if tokens.get(i).is_some_and(|t| t.kind == TokenKind::Colon) {
                i += 1;
            }
        } else if tok.kind != TokenKind::LParen && tok.kind != TokenKind::LBrace {
            i = after_tag;
        }
    }
    if tokens.get(i).is_some_and(|t| t.kind == TokenKind::LParen) {
        i = matching_close(tokens, i).map_or(tokens.len(), |close| close + 1);
    }

    let group: Option<Arc<str>> = name_tok.map(|t| Arc::from(t.text));
    let doc = ctx.take_doc();
    if let Some(tok) = name_tok {
        ctx.values.push(Value {
            name: Arc::from(tok.text),
            label: Arc::from(format!("enum {}", tok.text)),
            is_const: false,
            is_enum_member: false,
            is_enum_type: true,
            enum_group: None,
            literal: None,
            inline_comment: line.trailing_comment(),
            file: ctx.file,
            span: line.token_span(tok),
            doc,
        });
    }

    match tokens.get(i) {
        Some(brace) if brace.kind == TokenKind::LBrace => {
            let depth = ctx.depth + 1;
            ctx.enum_state = EnumState::InEnum {
                group: group.clone(),
                depth,
            };
            scan_body(ctx, line, brace.span.end, depth, depth, group);
        }
        _ => ctx.enum_state = EnumState::AwaitingBrace { group },
    }
    true
}

/// Handle a line while an enum is pending or open.
pub(super) fn continue_enum(ctx: &mut ScanContext, line: &LineInput<'_>) {
    match ctx.enum_state.clone() {
        EnumState::NotInEnum => {}
        EnumState::AwaitingBrace { group } => {
            match line.tokens.iter().find(|t| t.kind == TokenKind::LBrace) {
                Some(brace) => {
                    let depth = ctx.depth + 1;
                    ctx.enum_state = EnumState::InEnum {
                        group: group.clone(),
                        depth,
                    };
                    scan_body(ctx, line, brace.span.end, depth, depth, group);
                }
                None if line.tokens.iter().any(|t| t.kind == TokenKind::Semicolon) => {
                    ctx.enum_state = EnumState::NotInEnum;
                }
                None => {}
            }
        }
        EnumState::InEnum { group, depth } => {
            scan_body(ctx, line, 0, ctx.depth, depth, group);
        }
    }
}

/// Leave the enum once the depth dropped below the body's depth.
pub(super) fn update_enum_exit(ctx: &mut ScanContext) {
    if let EnumState::InEnum { depth, .. } = ctx.enum_state {
        if ctx.depth < depth {
            ctx.enum_state = EnumState::NotInEnum;
        }
    }
}

/// Split the body text of one line into members.
fn scan_body(
    ctx: &mut ScanContext,
    line: &LineInput<'_>,
    from: usize,
    start_depth: i32,
    enum_depth: i32,
    group: Option<Arc<str>>,
) {
    let code = line.code;
    let mut depth = start_depth;
    let mut nest = 0usize;
    let mut seg_start = from;
    let mut segments = Vec::new();
    let mut iter = code[from..].char_indices().peekable();

    while let Some((rel, c)) = iter.next() {
        let idx = from + rel;
        match c {
            '"' | '\'' => {
                while let Some((_, inner)) = iter.next() {
                    if inner == '\\' {
                        iter.next();
                    } else if inner == c {
                        break;
                    }
                }
            }
            '{' => depth += 1,
            '}' if depth <= enum_depth => {
                segments.push((seg_start, idx));
                seg_start = code.len();
                break;
            }
            '}' => depth -= 1,
            '(' | '[' => nest += 1,
            ')' | ']' => nest = nest.saturating_sub(1),
            ',' if depth == enum_depth && nest == 0 => {
                segments.push((seg_start, idx));
                seg_start = idx + 1;
            }
            _ => {}
        }
    }
    if seg_start < code.len() {
        segments.push((seg_start, code.len()));
    }

    for (start, end) in segments {
        extract_member(ctx, line, start, end, group.clone());
    }
}

/// `[tag:] Name [dims] [= value]`
fn extract_member(
    ctx: &mut ScanContext,
    line: &LineInput<'_>,
    start: usize,
    end: usize,
    group: Option<Arc<str>>,
) {
    let segment = &line.code[start..end];
    let tokens = tokenize(segment);
    let i = skip_tag(&tokens, 0);
    let Some(name) = tokens.get(i).filter(|t| is_name(t)) else {
        return;
    };

    let eq = tokens.iter().position(|t| t.kind == TokenKind::Eq);
    let label_end = match eq {
        Some(eq) => tokens[eq].span.start,
        None => segment.len(),
    };
    let literal = eq
        .and_then(|eq| simple_literal(&segment[tokens[eq].span.end..]))
        .map(Arc::from);
    let label_start = tokens[0].span.start;
    let doc = ctx.take_doc();

    ctx.values.push(Value {
        name: Arc::from(name.text),
        label: Arc::from(segment[label_start..label_end].trim()),
        is_const: true,
        is_enum_member: true,
        is_enum_type: false,
        enum_group: group,
        literal,
        inline_comment: line.trailing_comment(),
        file: ctx.file,
        span: line.span(start + name.span.start, start + name.span.end),
        doc,
    });
}
