//! Small token-level helpers shared by the extractors.

use crate::parser::keywords::{ENUM_KEYWORD, is_control_keyword, is_declaration_specifier};
use crate::parser::{Token, TokenKind, tokenize};

/// Return the trimmed literal if `text` is a simple constant.
///
/// Simple means a single integer/hex/binary/float literal (optionally
/// negated), `true`/`false`, a string, or a character literal.
pub(crate) fn simple_literal(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let tokens = tokenize(trimmed);
    let simple = match tokens.as_slice() {
        [tok] => tok.kind.is_literal() || tok.is_ident("true") || tok.is_ident("false"),
        [minus, tok] => {
            minus.kind == TokenKind::Operator
                && minus.text == "-"
                && matches!(
                    tok.kind,
                    TokenKind::Number | TokenKind::HexNumber | TokenKind::BinNumber
                )
        }
        _ => false,
    };
    simple.then_some(trimmed)
}

/// Whether a token can name a declaration.
pub(crate) fn is_name(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Ident
        && !is_declaration_specifier(token.text)
        && !is_control_keyword(token.text)
        && token.text != ENUM_KEYWORD
        && token.text != "operator"
}

/// `tag:` prefix starting at `index`, returning the index after the colon.
pub(crate) fn skip_tag(tokens: &[Token<'_>], index: usize) -> usize {
    match (tokens.get(index), tokens.get(index + 1)) {
        (Some(tag), Some(colon)) if tag.kind == TokenKind::Ident && colon.kind == TokenKind::Colon => {
            index + 2
        }
        _ => index,
    }
}

/// `operator` followed by its symbol, as in `operator-` or `operator>=`.
///
/// Returns the index of the first token after the symbol. Symbol characters
/// after the first must be adjacent.
pub(crate) fn operator_symbol_end(tokens: &[Token<'_>], index: usize) -> Option<usize> {
    tokens.get(index).filter(|t| t.is_ident("operator"))?;
    let mut i = index + 1;
    let mut end: Option<usize> = None;
    while let Some(tok) = tokens.get(i) {
        let symbol = matches!(tok.kind, TokenKind::Operator | TokenKind::Eq);
        if !symbol || end.is_some_and(|end| tok.span.start != end) {
            break;
        }
        end = Some(tok.span.end);
        i += 1;
    }
    end.map(|_| i)
}

/// Index of the token closing the bracket opened at `open`.
pub(crate) fn matching_close(tokens: &[Token<'_>], open: usize) -> Option<usize> {
    let mut nest = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        if token.kind.is_open() {
            nest += 1;
        } else if token.kind.is_close() {
            nest = nest.saturating_sub(1);
            if nest == 0 {
                return Some(idx);
            }
        }
    }
    None
}
