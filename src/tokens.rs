//! Token model for the Cinder parser.
//!
//! Tokens arrive pre-classified from an external lexer: each carries a
//! [`TokenKind`] tag and the raw lexeme text. The parser never inspects source
//! characters and never reads past the terminating [`TokenKind::Eof`] token.
//!
//! ## Notes
//! - Grammar-significant operators (`*`, `++`, `--`, `=`) have dedicated kinds
//!   because declaration lookahead and the postfix/init-declarator productions
//!   dispatch on them. Every other operator spelling shares the
//!   [`TokenKind::Operator`] kind and is identified by its text via
//!   [`crate::operators`].

/// Kind tag of a token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Literals ==========
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,
    BoolLiteral,

    // ========== Names ==========
    Identifier,
    /// A type keyword (`int`, `float`, `char`, `bool`, `void`).
    Type,

    // ========== Keywords ==========
    If,
    Elif,
    Else,
    While,
    For,
    Repeat,
    Return,
    Break,
    Continue,

    // ========== Punctuation ==========
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,

    // ========== Operators ==========
    /// `*`, used for both multiplication and pointer declarators.
    Star,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `=`
    Assign,
    /// Any other operator spelling; the spelling lives in [`Token::text`].
    Operator,

    // ========== Special ==========
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Return `true` if this kind's lexeme participates in the operator tables
    /// ([`crate::operators`]).
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Operator
                | TokenKind::Star
                | TokenKind::Assign
                | TokenKind::Increment
                | TokenKind::Decrement
        )
    }
}

/// A token with its kind and raw lexeme text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
