//! Local-scope search for declarations the global scanner skips.
//!
//! Starting at the caret's brace depth and walking outward, each enclosing
//! block is isolated from the per-line depth table and searched for function
//! parameters and `new`/`static`/`const` declarations of the queried name.

use std::sync::Arc;

use crate::base::{Position, Span, char_column};
use crate::hir::{is_name, parse_prototype, skip_tag};
use crate::parser::{
    LineDepth, LineStripper, Token, TokenKind, line_depths, normalize_line_endings, tokenize,
};

/// A block-local variable or function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalDeclaration {
    pub name: Arc<str>,
    pub span: Span,
    /// Declaration text, e.g. `new Float:x` or `const name[]`.
    pub label: Arc<str>,
    pub is_parameter: bool,
}

struct Candidate {
    span: Span,
    label: String,
    is_parameter: bool,
}

/// Find the innermost local declaration of `name` visible at `position`.
pub fn find_local_declaration(text: &str, position: Position, name: &str) -> Option<LocalDeclaration> {
    let text = normalize_line_endings(text);
    let depths = line_depths(&text);
    let caret = position.line;
    let depth = depths.get(caret)?.max();
    if depth == 0 {
        return None;
    }

    let mut stripper = LineStripper::new();
    let codes: Vec<String> = text.split('\n').map(|raw| stripper.strip(raw).code).collect();

    for target in (1..=depth).rev() {
        let (first, last) = block_bounds(&depths, caret, target);
        let mut found = Vec::new();

        // The opener line, and the header above a `{` on its own line.
        let mut headers = vec![first];
        if codes[first].trim_start().starts_with('{') {
            if let Some(prev) = (0..first).rev().find(|&i| !codes[i].trim().is_empty()) {
                headers.insert(0, prev);
            }
        }
        for &index in &headers {
            collect_parameters(&codes[index], index, name, &mut found);
        }

        let lines = (first..=last).filter(|&i| i == first || depths[i].start == target);
        collect_declarations(&codes, lines, name, &mut found);

        if let Some(best) = pick(found, position) {
            return Some(LocalDeclaration {
                name: Arc::from(name),
                span: best.span,
                label: Arc::from(best.label),
                is_parameter: best.is_parameter,
            });
        }
    }
    None
}

/// Lines of the block at `target` depth containing `caret`, opener and closer included.
fn block_bounds(depths: &[LineDepth], caret: usize, target: i32) -> (usize, usize) {
    let mut first = caret;
    while first > 0 && depths[first].start >= target {
        first -= 1;
    }
    let mut last = caret;
    while last + 1 < depths.len() && depths[last].end >= target {
        last += 1;
    }
    (first, last)
}

/// The last candidate at or before the caret, else the first one.
fn pick(mut found: Vec<Candidate>, position: Position) -> Option<Candidate> {
    found.sort_by_key(|c| c.span);
    match found.iter().rposition(|c| c.span.start <= position) {
        Some(index) => Some(found.swap_remove(index)),
        None => found.into_iter().next(),
    }
}

fn collect_parameters(code: &str, line: usize, name: &str, found: &mut Vec<Candidate>) {
    let tokens = tokenize(code);
    let Some(proto) = parse_prototype(code, &tokens) else {
        return;
    };
    for (offset, param) in &proto.params {
        let param_tokens = tokenize(param);
        let mut i = 0;
        while param_tokens
            .get(i)
            .is_some_and(|t| t.is_ident("const") || t.kind == TokenKind::Amp)
        {
            i += 1;
        }
        i = skip_tag(&param_tokens, i);
        let Some(tok) = param_tokens.get(i).filter(|t| is_name(t)) else {
            continue;
        };
        if tok.text != name {
            continue;
        }
        let start = offset + tok.span.start;
        let end = offset + tok.span.end;
        let label_end = param.find('=').unwrap_or(param.len());
        found.push(Candidate {
            span: Span::on_line(line, char_column(code, start), char_column(code, end)),
            label: param[..label_end].trim().to_string(),
            is_parameter: true,
        });
    }
}

/// Scan `new`/`static`/`const` statements on `lines`, following lists across lines.
fn collect_declarations(
    codes: &[String],
    lines: impl Iterator<Item = usize>,
    name: &str,
    found: &mut Vec<Candidate>,
) {
    let mut stream: Vec<(usize, Token<'_>)> = Vec::new();
    for index in lines {
        stream.extend(tokenize(&codes[index]).into_iter().map(|t| (index, t)));
    }

    let mut i = 0;
    while i < stream.len() {
        let (line, tok) = &stream[i];
        let at_statement_start = i == 0
            || matches!(
                stream[i - 1].1.kind,
                TokenKind::Semicolon | TokenKind::LBrace | TokenKind::RBrace | TokenKind::LParen
            )
            || stream[i - 1].0 != *line;
        let opens_list = tok.is_ident("new")
            || (at_statement_start && (tok.is_ident("static") || tok.is_ident("const")));
        if !opens_list {
            i += 1;
            continue;
        }

        let mut prefix = vec![tok.text];
        i += 1;
        while let Some((_, t)) = stream.get(i) {
            if t.is_ident("const") || t.is_ident("static") || t.is_ident("new") {
                prefix.push(t.text);
                i += 1;
            } else {
                break;
            }
        }
        i = scan_list(codes, &stream, i, &prefix.join(" "), name, found);
    }
}

/// Read one declaration list starting at `i`; returns the index after it.
fn scan_list(
    codes: &[String],
    stream: &[(usize, Token<'_>)],
    mut i: usize,
    prefix: &str,
    name: &str,
    found: &mut Vec<Candidate>,
) -> usize {
    let mut expect_item = true;
    let mut nest = 0usize;
    while let Some((line, tok)) = stream.get(i) {
        if expect_item {
            expect_item = false;
            let tag_start = tok.span.start;
            let mut j = i;
            if stream.get(j + 1).is_some_and(|(l, t)| l == line && t.kind == TokenKind::Colon)
                && tok.kind == TokenKind::Ident
            {
                j += 2;
            }
            if let Some((name_line, name_tok)) = stream.get(j) {
                if name_line == line && is_name(name_tok) && name_tok.text == name {
                    let code = &codes[*line];
                    found.push(Candidate {
                        span: Span::on_line(
                            *line,
                            char_column(code, name_tok.span.start),
                            char_column(code, name_tok.span.end),
                        ),
                        label: format!("{} {}", prefix, &code[tag_start..name_tok.span.end]),
                        is_parameter: false,
                    });
                }
            }
        }
        match tok.kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => nest += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace if nest == 0 => {
                return i + 1;
            }
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => nest -= 1,
            TokenKind::Comma if nest == 0 => expect_item = true,
            TokenKind::Semicolon if nest == 0 => return i + 1,
            _ => {}
        }
        i += 1;
    }
    i
}
