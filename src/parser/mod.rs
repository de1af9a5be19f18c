//! Line-level lexing for Pawn sources
//!
//! There is no CST here: the scanner walks the text line by line, and each
//! line goes through two stages:
//!
//! ```text
//! Raw line
//!     ↓
//! LineStripper → comment-free code (columns preserved) + doc/trailing comments
//!     ↓
//! Lexer (logos) → Tokens with byte spans
//!     ↓
//! HIR extraction → small per-construct state machines
//! ```

pub mod keywords;
mod lexer;
mod lines;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use lines::{
    Brace, LineDepth, LineStripper, StrippedLine, braces, continues, is_directive, line_depths,
    normalize_line_endings, split_top_level,
};
