//! Pawn keywords the scanner cares about.

/// Storage specifiers that may start a global variable declaration.
pub const DECLARATION_SPECIFIERS: &[&str] = &["new", "static", "public", "stock", "const"];

/// Specifiers that may precede a function prototype.
pub const CALLABLE_SPECIFIERS: &[&str] = &["static", "public", "stock", "forward", "native"];

/// Preprocessor directives that pull in another file.
pub const INCLUDE_DIRECTIVES: &[&str] = &["include", "tryinclude"];

pub const DEFINE_DIRECTIVE: &str = "define";

pub const ENUM_KEYWORD: &str = "enum";

/// Statement keywords that look like `name(...)` but never declare anything.
pub const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "return", "sizeof", "tagof",
    "defined", "goto", "break", "continue", "state", "sleep", "exit", "assert",
];

pub fn is_declaration_specifier(word: &str) -> bool {
    DECLARATION_SPECIFIERS.contains(&word)
}

pub fn is_callable_specifier(word: &str) -> bool {
    CALLABLE_SPECIFIERS.contains(&word)
}

pub fn is_control_keyword(word: &str) -> bool {
    CONTROL_KEYWORDS.contains(&word)
}
