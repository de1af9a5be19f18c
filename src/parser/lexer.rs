//! Logos-based lexer for a single line of Pawn code
//!
//! The lexer only ever sees code with comments already blanked out (see
//! [`LineStripper`](super::LineStripper)), so there are no comment tokens.

use std::ops::Range;

use logos::Logos;

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Number,
    HexNumber,
    BinNumber,
    String,
    Char,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,
    Eq,
    Amp,
    Hash,
    Ellipsis,
    Backslash,
    Operator,
    Error,
}

impl TokenKind {
    /// Opening delimiters raise the nesting level of comma-separated lists.
    pub fn is_open(self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace)
    }

    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace)
    }

    /// Literal tokens that can stand alone as a constant value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::HexNumber
                | TokenKind::BinNumber
                | TokenKind::String
                | TokenKind::Char
        )
    }
}

/// A token with its kind, text, and byte range within the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

impl Token<'_> {
    pub fn is_ident(&self, text: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == text
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };
        Some(Token {
            kind,
            text: self.inner.slice(),
            span: self.inner.span(),
        })
    }
}

/// Tokenize an entire line into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\f\r\n]+")]
enum LogosToken {
    #[regex(r"[A-Za-z_@][A-Za-z0-9_@]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*(\.[0-9]+([eE][+-]?[0-9]+)?)?")]
    Number,

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    HexNumber,

    #[regex(r"0[bB][01_]+")]
    BinNumber,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\]|\\.)*'")]
    Char,

    #[token("...")]
    Ellipsis,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("=")]
    Eq,

    #[token("&")]
    Amp,

    #[token("#")]
    Hash,

    #[token("\\")]
    Backslash,

    #[regex(r"[-+*/%<>!~^|?.]")]
    Operator,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Number => TokenKind::Number,
            LogosToken::HexNumber => TokenKind::HexNumber,
            LogosToken::BinNumber => TokenKind::BinNumber,
            LogosToken::String => TokenKind::String,
            LogosToken::Char => TokenKind::Char,
            LogosToken::Ellipsis => TokenKind::Ellipsis,
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::LBracket => TokenKind::LBracket,
            LogosToken::RBracket => TokenKind::RBracket,
            LogosToken::LBrace => TokenKind::LBrace,
            LogosToken::RBrace => TokenKind::RBrace,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Semicolon => TokenKind::Semicolon,
            LogosToken::Colon => TokenKind::Colon,
            LogosToken::Eq => TokenKind::Eq,
            LogosToken::Amp => TokenKind::Amp,
            LogosToken::Hash => TokenKind::Hash,
            LogosToken::Backslash => TokenKind::Backslash,
            LogosToken::Operator => TokenKind::Operator,
        }
    }
}
