//! Syntax frontend for the Cinder language: token model, parser, AST, diagnostics.
//!
//! Cinder is a small C-like teaching language. This crate is intentionally
//! "syntax-only": lexing happens upstream (tokens arrive pre-classified from an
//! external lexer), and name resolution, type checking, and code generation happen
//! downstream. The parser is a hand-written recursive-descent pass with precedence
//! climbing for binary operators, bounded lookahead, and no backtracking.
//!
//! ## Notes
//! - Parsing is all-or-nothing: the first grammar violation aborts the parse with a
//!   [`diagnostics::SyntaxError`]. There is no resynchronization and no partial tree.
//! - Two parses over two token streams share nothing but the `const` operator tables
//!   in [`operators`], so independent parses can run in parallel without
//!   synchronization.
//!
//! ## Examples
//! ```rust
//! use cinder_syntax::parser;
//! use cinder_syntax::tokens::{Token, TokenKind};
//!
//! let tokens = vec![
//!     Token::new(TokenKind::Type, "int"),
//!     Token::new(TokenKind::Identifier, "main"),
//!     Token::new(TokenKind::LParen, "("),
//!     Token::new(TokenKind::RParen, ")"),
//!     Token::new(TokenKind::Semicolon, ";"),
//!     Token::new(TokenKind::Eof, ""),
//! ];
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.declarations.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod operators;
pub mod parser;
pub mod tokens;
