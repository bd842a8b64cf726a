//! Diagnostics for the Cinder parser.
//!
//! The parser raises a single error type, [`SyntaxError`]. The first grammar
//! violation aborts the parse and propagates to the caller unchanged; there is
//! no recovery, no multi-error collection, and no partial tree. Rendering and
//! exit-code mapping are the caller's responsibility.

use miette::Diagnostic;
use thiserror::Error;

/// What a [`SyntaxError`] is complaining about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The current token fits no alternative of the active production.
    UnexpectedToken,
    /// A parameter list's separator was neither `,` nor `)`.
    MissingClosingParen,
    /// The construct is recognized but its grammar is not implemented.
    Unsupported,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            SyntaxErrorKind::MissingClosingParen => write!(f, "missing closing parenthesis"),
            SyntaxErrorKind::Unsupported => write!(f, "unsupported syntax"),
        }
    }
}

/// A syntax error, carrying the offending token's text and its offset in the
/// token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}: `{token}` at token {offset}")]
#[diagnostic(code(cinder_syntax::syntax_error))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub token: String,
    pub offset: usize,
}

impl SyntaxError {
    pub fn unexpected_token(token: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: SyntaxErrorKind::UnexpectedToken,
            token: token.into(),
            offset,
        }
    }

    pub fn missing_closing_paren(token: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: SyntaxErrorKind::MissingClosingParen,
            token: token.into(),
            offset,
        }
    }

    pub fn unsupported(token: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: SyntaxErrorKind::Unsupported,
            token: token.into(),
            offset,
        }
    }
}
