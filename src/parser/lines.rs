//! Line-oriented helpers shared by the scanner and the cursor resolver.
//!
//! Pawn sources are processed one line at a time. [`LineStripper`] blanks out
//! comments while tracking block comments across lines, and the brace helpers
//! count `{`/`}` outside of string and character literals.

use std::borrow::Cow;

/// Normalize `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// A line with its comments blanked out.
///
/// `code` has exactly as many characters as the raw line; comment characters
/// are replaced by spaces so character columns stay valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrippedLine {
    pub code: String,
    /// Text of a block comment that closed on this line and began before any code.
    pub doc: Option<String>,
    /// Comment following code on this line.
    pub trailing: Option<String>,
}

#[derive(Debug)]
struct BlockComment {
    text: String,
    leading: bool,
    same_line: bool,
}

/// Removes comments line by line, carrying open block comments forward.
#[derive(Debug, Default)]
pub struct LineStripper {
    block: Option<BlockComment>,
}

impl LineStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the previous line ended inside a block comment.
    pub fn in_block_comment(&self) -> bool {
        self.block.is_some()
    }

    pub fn strip(&mut self, raw: &str) -> StrippedLine {
        let chars: Vec<char> = raw.chars().collect();
        let mut out = StrippedLine {
            code: String::with_capacity(raw.len()),
            ..StrippedLine::default()
        };
        let mut seen_code = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            if self.block.is_some() {
                if c == '*' && next == Some('/') {
                    if let Some(block) = self.block.take() {
                        finish_block(block, &mut out);
                    }
                    out.code.push_str("  ");
                    i += 2;
                } else {
                    if let Some(block) = self.block.as_mut() {
                        block.text.push(c);
                    }
                    out.code.push(' ');
                    i += 1;
                }
                continue;
            }

            match (c, next) {
                ('/', Some('/')) => {
                    let text: String = chars[i + 2..].iter().collect();
                    let text = text.trim_start_matches('/').trim();
                    if seen_code && !text.is_empty() {
                        out.trailing = Some(text.to_string());
                    }
                    out.code.extend(std::iter::repeat_n(' ', chars.len() - i));
                    break;
                }
                ('/', Some('*')) => {
                    self.block = Some(BlockComment {
                        text: String::new(),
                        leading: !seen_code,
                        same_line: true,
                    });
                    out.code.push_str("  ");
                    i += 2;
                }
                ('"', _) | ('\'', _) => {
                    let end = skip_literal(&chars, i);
                    out.code.extend(&chars[i..end]);
                    seen_code = true;
                    i = end;
                }
                _ => {
                    if !c.is_whitespace() {
                        seen_code = true;
                    }
                    out.code.push(c);
                    i += 1;
                }
            }
        }

        if let Some(block) = self.block.as_mut() {
            block.text.push('\n');
            block.same_line = false;
        }
        out
    }
}

fn finish_block(block: BlockComment, out: &mut StrippedLine) {
    let text = clean_doc(&block.text);
    if text.is_empty() {
        return;
    }
    if block.leading {
        out.doc = Some(text);
    } else if block.same_line {
        out.trailing = Some(text);
    }
}

/// Strip comment decorations (`*` gutters, blank edges) from block comment text.
fn clean_doc(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .collect();
    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Index just past the string or character literal starting at `start`.
///
/// Unterminated literals run to the end of the line.
pub(crate) fn skip_literal(chars: &[char], start: usize) -> usize {
    let quote = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

/// A brace found in stripped code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brace {
    /// Character column.
    pub column: usize,
    pub open: bool,
}

/// Braces of a comment-free line, ignoring those inside literals.
pub fn braces(code: &str) -> Vec<Brace> {
    let chars: Vec<char> = code.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '"' | '\'' => i = skip_literal(&chars, i),
            '{' => {
                found.push(Brace { column: i, open: true });
                i += 1;
            }
            '}' => {
                found.push(Brace { column: i, open: false });
                i += 1;
            }
            _ => i += 1,
        }
    }
    found
}

/// Whether stripped code is a preprocessor directive line.
pub fn is_directive(code: &str) -> bool {
    code.trim_start().starts_with('#')
}

/// Whether stripped code ends with a `\` line continuation.
pub fn continues(code: &str) -> bool {
    code.trim_end().ends_with('\\')
}

/// Brace depth before and after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineDepth {
    pub start: i32,
    pub end: i32,
}

impl LineDepth {
    /// The deeper of the two ends; a line opening or closing a block belongs to it.
    pub fn max(self) -> i32 {
        self.start.max(self.end)
    }
}

/// Per-line brace depths for a whole (normalized) text.
///
/// Comments, literals and preprocessor lines are ignored; a stray `}` clamps
/// the depth at zero.
pub fn line_depths(text: &str) -> Vec<LineDepth> {
    let mut stripper = LineStripper::new();
    let mut depth = 0i32;
    let mut in_directive = false;
    let mut depths = Vec::new();

    for raw in text.split('\n') {
        let line = stripper.strip(raw);
        let start = depth;
        let directive = in_directive || is_directive(&line.code);
        if directive {
            in_directive = continues(&line.code);
        } else {
            for brace in braces(&line.code) {
                depth = if brace.open { depth + 1 } else { (depth - 1).max(0) };
            }
        }
        depths.push(LineDepth { start, end: depth });
    }
    depths
}

/// Split `text` on `sep` occurring outside nested brackets and literals.
///
/// Returns each segment with its byte offset in `text`. Closing brackets
/// without an opener are treated as plain characters.
pub fn split_top_level(text: &str, sep: char) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    let mut nest = 0usize;
    let mut seg_start = 0usize;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, c)) = iter.next() {
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
            '(' | '[' | '{' => nest += 1,
            ')' | ']' | '}' => nest = nest.saturating_sub(1),
            _ if c == sep && nest == 0 => {
                segments.push((seg_start, &text[seg_start..idx]));
                seg_start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    segments.push((seg_start, &text[seg_start..]));
    segments
}
