//! Parser for the Cinder language
//!
//! Converts a pre-classified token stream into an AST. The grammar is LL(k)
//! with a small bounded k: declaration disambiguation needs at most four
//! tokens of lookahead, and every other choice point is resolved by the
//! current token's kind alone, so no backtracking or token pushback exists
//! anywhere.
//!
//! ## Examples
//!
//! ```rust
//! use cinder_syntax::parser;
//! use cinder_syntax::tokens::{Token, TokenKind};
//!
//! let tokens = vec![
//!     Token::new(TokenKind::Type, "int"),
//!     Token::new(TokenKind::Identifier, "answer"),
//!     Token::new(TokenKind::Semicolon, ";"),
//!     Token::new(TokenKind::Eof, ""),
//! ];
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.declarations.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::operators;
use crate::tokens::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all
// parser methods in the same Rust module (preserving privacy + call patterns)
// while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
