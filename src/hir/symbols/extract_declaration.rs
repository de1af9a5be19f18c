//! Global variable/constant declarations.
//!
//! `new/static/public/stock/const [tag:]name[dims] [= init], ...;` may span
//! several lines; the `;` may be omitted at the end of a line. The list is a small state machine fed one line of tokens at
//! a time; nesting is tracked across lines so initializers like
//! `{ 1, 2 }` never produce members.

use std::sync::Arc;

use crate::base::Span;
use crate::parser::keywords::is_declaration_specifier;
use crate::parser::{Token, TokenKind};

use super::context::{LineInput, ScanContext};
use super::helpers::{is_name, operator_symbol_end, simple_literal, skip_tag};
use super::types::Value;

/// Validated storage specifiers of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Specifiers {
    pub words: Vec<String>,
    /// Number of tokens consumed.
    pub len: usize,
}

impl Specifiers {
    pub fn is_const(&self) -> bool {
        self.words.iter().any(|w| w == "const")
    }

    pub fn is_static(&self) -> bool {
        self.words.iter().any(|w| w == "static")
    }
}

/// Read leading storage specifiers.
///
/// On an invalid combination, returns the index of the first offending token.
pub(crate) fn parse_specifiers(tokens: &[Token<'_>]) -> Result<Specifiers, usize> {
    let mut words: Vec<String> = Vec::new();
    for (idx, tok) in tokens.iter().enumerate() {
        if tok.kind != TokenKind::Ident || !is_declaration_specifier(tok.text) {
            break;
        }
        let word = tok.text;
        let seen = |w: &str| words.iter().any(|s| s == w);
        let invalid = seen(word)
            || seen("const")
            || (word == "new" && !words.is_empty())
            || (seen("new") && word != "const")
            || ((word == "static" || word == "public") && (seen("static") || seen("public")));
        if invalid {
            return Err(idx);
        }
        words.push(word.to_string());
    }
    let len = words.len();
    Ok(Specifiers { words, len })
}

#[derive(Clone, Debug)]
struct PendingValue {
    name: String,
    span: Span,
    line: usize,
    /// Byte range of `[tag:]name[dims]` on `line`.
    label_start: usize,
    label_end: usize,
    label_text: String,
    inline_comment: Option<Arc<str>>,
    /// Initializer start byte on `line`; None when there is no initializer.
    init_start: Option<usize>,
    init_literal: Option<String>,
}

impl PendingValue {
    /// Capture the label while the declaring line is current.
    fn finish_label(&mut self, line: &LineInput<'_>) {
        if self.line == line.index {
            self.label_text = line.code[self.label_start..self.label_end].to_string();
        }
    }

    /// Capture a single-line initializer ending at byte `end`.
    fn capture_literal(&mut self, line: &LineInput<'_>, end: usize) {
        if let Some(start) = self.init_start {
            if self.line == line.index {
                self.init_literal = simple_literal(&line.code[start..end]).map(str::to_string);
            }
        }
    }
}

#[derive(Clone, Debug)]
enum ItemState {
    ExpectItem { tag_start: Option<usize> },
    AfterName(PendingValue),
    Initializer(PendingValue),
    /// Recovering from a bad item until the next `,` or `;`.
    Skip,
}

/// An open declaration list, possibly continuing across lines.
#[derive(Clone, Debug)]
pub(super) struct DeclarationList {
    prefix: String,
    is_const: bool,
    suppressed: bool,
    nest: usize,
    state: ItemState,
}

/// Whether a line's last token leaves the statement open.
fn continues_statement(tokens: &[Token<'_>]) -> bool {
    tokens.last().is_none_or(|t| {
        matches!(
            t.kind,
            TokenKind::Comma | TokenKind::Eq | TokenKind::Operator | TokenKind::Backslash
        )
    })
}

impl DeclarationList {
    fn new(specifiers: &Specifiers, suppressed: bool) -> Self {
        Self {
            prefix: specifiers.words.join(" "),
            is_const: specifiers.is_const(),
            suppressed,
            nest: 0,
            state: ItemState::ExpectItem { tag_start: None },
        }
    }

    /// Feed the tokens of one line. Returns true once the list is closed.
    ///
    /// The list closes at `;`, or at the end of a line that leaves nothing
    /// open: no pending bracket and no trailing `,`, `=` or operator.
    fn feed(&mut self, ctx: &mut ScanContext, line: &LineInput<'_>, tokens: &[Token<'_>]) -> bool {
        let mut i = 0;
        while i < tokens.len() {
            let tok = &tokens[i];
            let state = std::mem::replace(&mut self.state, ItemState::Skip);
            self.state = match state {
                ItemState::ExpectItem { tag_start } if self.nest == 0 => {
                    let next = tokens.get(i + 1);
                    if tok.kind == TokenKind::Ident
                        && next.is_some_and(|n| n.kind == TokenKind::Colon)
                        && tag_start.is_none()
                    {
                        i += 1;
                        ItemState::ExpectItem {
                            tag_start: Some(tok.span.start),
                        }
                    } else if is_name(tok) {
                        let label_start = tag_start.unwrap_or(tok.span.start);
                        ItemState::AfterName(PendingValue {
                            name: tok.text.to_string(),
                            span: line.token_span(tok),
                            line: line.index,
                            label_start,
                            label_end: tok.span.end,
                            label_text: String::new(),
                            inline_comment: line.trailing_comment(),
                            init_start: None,
                            init_literal: None,
                        })
                    } else {
                        ctx.diagnostics
                            .expected_identifier(line.token_span(tok), tok.text);
                        if tok.kind == TokenKind::Semicolon {
                            return true;
                        }
                        if tok.kind == TokenKind::Comma {
                            ItemState::ExpectItem { tag_start: None }
                        } else {
                            self.track_nesting(tok);
                            ItemState::Skip
                        }
                    }
                }
                ItemState::AfterName(mut pending) => match tok.kind {
                    TokenKind::Comma | TokenKind::Semicolon if self.nest == 0 => {
                        pending.finish_label(line);
                        self.emit(ctx, pending);
                        if tok.kind == TokenKind::Semicolon {
                            return true;
                        }
                        ItemState::ExpectItem { tag_start: None }
                    }
                    TokenKind::Eq if self.nest == 0 => {
                        pending.init_start =
                            (pending.line == line.index).then_some(tok.span.end);
                        ItemState::Initializer(pending)
                    }
                    _ => {
                        self.track_nesting(tok);
                        if pending.line == line.index {
                            pending.label_end = tok.span.end;
                        }
                        ItemState::AfterName(pending)
                    }
                },
                ItemState::Initializer(mut pending) => match tok.kind {
                    TokenKind::Comma | TokenKind::Semicolon if self.nest == 0 => {
                        pending.capture_literal(line, tok.span.start);
                        pending.finish_label(line);
                        self.emit(ctx, pending);
                        if tok.kind == TokenKind::Semicolon {
                            return true;
                        }
                        ItemState::ExpectItem { tag_start: None }
                    }
                    _ => {
                        self.track_nesting(tok);
                        ItemState::Initializer(pending)
                    }
                },
                ItemState::Skip if self.nest == 0 && tok.kind == TokenKind::Semicolon => {
                    return true;
                }
                ItemState::Skip if self.nest == 0 && tok.kind == TokenKind::Comma => {
                    ItemState::ExpectItem { tag_start: None }
                }
                other => {
                    self.track_nesting(tok);
                    other
                }
            };
            i += 1;
        }

        // The label of a pending name never spans lines.
        if let ItemState::AfterName(pending) | ItemState::Initializer(pending) = &mut self.state {
            pending.finish_label(line);
        }
        if self.nest > 0 || continues_statement(tokens) {
            return false;
        }

        // `;` is optional in Pawn: a complete line ends the statement.
        match std::mem::replace(&mut self.state, ItemState::Skip) {
            ItemState::AfterName(pending) => self.emit(ctx, pending),
            ItemState::Initializer(mut pending) => {
                pending.capture_literal(line, line.code.trim_end().len());
                self.emit(ctx, pending);
            }
            ItemState::Skip => {}
            expecting @ ItemState::ExpectItem { .. } => {
                self.state = expecting;
                return false;
            }
        }
        true
    }

    /// Emit the item left pending when the text ends inside the list.
    fn finish(mut self, ctx: &mut ScanContext) {
        match std::mem::replace(&mut self.state, ItemState::Skip) {
            ItemState::AfterName(pending) | ItemState::Initializer(pending) => {
                self.emit(ctx, pending);
            }
            ItemState::ExpectItem { .. } | ItemState::Skip => {}
        }
    }

    fn track_nesting(&mut self, tok: &Token<'_>) {
        if tok.kind.is_open() {
            self.nest += 1;
        } else if tok.kind.is_close() {
            self.nest = self.nest.saturating_sub(1);
        }
    }

    fn emit(&self, ctx: &mut ScanContext, pending: PendingValue) {
        if self.suppressed {
            ctx.clear_doc();
            return;
        }
        let literal = if self.is_const {
            pending.init_literal.map(Arc::from)
        } else {
            None
        };
        let doc = ctx.take_doc();
        ctx.values.push(Value {
            name: Arc::from(pending.name),
            label: Arc::from(format!("{} {}", self.prefix, pending.label_text.trim())),
            is_const: self.is_const,
            is_enum_member: false,
            is_enum_type: false,
            enum_group: None,
            literal,
            inline_comment: pending.inline_comment,
            file: ctx.file,
            span: pending.span,
            doc,
        });
    }
}

/// Start a declaration on a global-scope line beginning with a specifier.
///
/// Returns false when the line does not start with a storage specifier.
pub(super) fn extract_declaration(ctx: &mut ScanContext, line: &LineInput<'_>) -> bool {
    let starts_with_specifier = line
        .tokens
        .first()
        .is_some_and(|t| t.kind == TokenKind::Ident && is_declaration_specifier(t.text));
    if !starts_with_specifier {
        return false;
    }

    let specifiers = match parse_specifiers(line.tokens) {
        Ok(specifiers) => specifiers,
        Err(idx) => {
            let tok = &line.tokens[idx];
            ctx.diagnostics
                .invalid_specifiers(line.token_span(tok), tok.text);
            ctx.clear_doc();
            return true;
        }
    };

    // `stock Foo(a,` with the parameter list continuing on the next line.
    let rest = &line.tokens[specifiers.len..];
    let name = skip_tag(rest, 0);
    let after_name = operator_symbol_end(rest, name)
        .or_else(|| rest.get(name).is_some_and(is_name).then_some(name + 1));
    if after_name.is_some_and(|i| rest.get(i).is_some_and(|t| t.kind == TokenKind::LParen)) {
        ctx.clear_doc();
        return true;
    }

    let suppressed = ctx.suppress_local && specifiers.is_static();
    let mut list = DeclarationList::new(&specifiers, suppressed);
    if !list.feed(ctx, line, rest) {
        ctx.declaration = Some(list);
    }
    true
}

/// Flush a list still open when the text ends.
pub(super) fn finish_declaration(ctx: &mut ScanContext) {
    if let Some(list) = ctx.declaration.take() {
        list.finish(ctx);
    }
}

/// Feed a continuation line to the open declaration list.
pub(super) fn continue_declaration(ctx: &mut ScanContext, line: &LineInput<'_>) {
    if let Some(mut list) = ctx.declaration.take() {
        if !list.feed(ctx, line, line.tokens) {
            ctx.declaration = Some(list);
        }
    }
}
