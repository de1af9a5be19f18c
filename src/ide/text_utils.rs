//! Text utilities for cursor-based IDE features.

use crate::base::{Position, Span};

/// Whether `c` can appear in an identifier.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c == '@' || unicode_ident::is_xid_continue(c)
}

/// Line `index` of `text`, without its line terminator.
pub fn line_at(text: &str, index: usize) -> Option<&str> {
    text.split('\n')
        .nth(index)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// An identifier found at a cursor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierAt {
    pub name: String,
    pub span: Span,
    /// Found inside a string literal, e.g. a callback name passed to a timer.
    pub in_string: bool,
}

/// Character range `[start, end)` of the string literal containing `column`,
/// excluding the quotes.
fn enclosing_string(chars: &[char], column: usize) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '/' if chars.get(i + 1) == Some(&'/') => return None,
            '\'' => {
                i += 1;
                while i < chars.len() && chars[i] != '\'' {
                    i += if chars[i] == '\\' { 2 } else { 1 };
                }
                i += 1;
            }
            '"' => {
                let open = i;
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    i += if chars[i] == '\\' { 2 } else { 1 };
                }
                let close = i.min(chars.len());
                if column > open && column <= close {
                    return Some((open + 1, close));
                }
                i += 1;
            }
            _ => i += 1,
        }
        if i > column {
            return None;
        }
    }
    None
}

/// The identifier under or immediately before `column` on `line`.
///
/// Leading digits are dropped. Inside a string literal only the literal's
/// contents are considered.
pub fn identifier_at(line: &str, line_index: usize, column: usize) -> Option<IdentifierAt> {
    let chars: Vec<char> = line.chars().collect();
    let column = column.min(chars.len());
    let string = enclosing_string(&chars, column);
    let (lo, hi) = string.unwrap_or((0, chars.len()));

    let mut start = column;
    while start > lo && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = column;
    while end < hi && is_word_char(chars[end]) {
        end += 1;
    }
    while start < end && chars[start].is_ascii_digit() {
        start += 1;
    }
    if start == end {
        return None;
    }

    Some(IdentifierAt {
        name: chars[start..end].iter().collect(),
        span: Span::on_line(line_index, start, end),
        in_string: string.is_some(),
    })
}

/// Identifier at a position of a whole text.
pub fn identifier_at_position(text: &str, position: Position) -> Option<IdentifierAt> {
    identifier_at(line_at(text, position.line)?, position.line, position.column)
}

/// The identifier prefix ending at `column`, for completion.
pub fn prefix_at(line: &str, column: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let column = column.min(chars.len());
    let mut start = column;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    chars[start..column].iter().collect()
}
