//! Operator vocabulary.
//!
//! This module defines the canonical operator set for Cinder expressions: the
//! binary precedence table and the prefix operator set. Both are process-wide
//! constants, initialized before any parse begins and never mutated, so they are
//! safe to share across concurrent parses.
//!
//! ## Notes
//! - Lookup is by operator **spelling** (the token's lexeme text).
//! - Higher precedence binds tighter.
//!
//! ## Examples
//! ```rust
//! use cinder_syntax::operators;
//!
//! assert_eq!(operators::binary_precedence("+"), Some(5));
//! assert!(operators::binary_precedence("=") < operators::binary_precedence("||"));
//! assert!(operators::is_prefix_operator("!"));
//! ```

/// Metadata for a binary operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub spelling: &'static str,
    /// Precedence level; higher binds tighter.
    pub precedence: u8,
}

/// Registry of all binary operators, grouped by precedence level.
pub const BINARY_OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op("=", 0),
    op("+=", 0),
    op("-=", 0),
    op("*=", 0),
    op("/=", 0),
    op("%=", 0),
    op("**=", 0),
    // Logical
    op("||", 1),
    op("&&", 2),
    // Equality
    op("==", 3),
    op("!=", 3),
    // Relational
    op("<", 4),
    op("<=", 4),
    op(">", 4),
    op(">=", 4),
    // Additive
    op("+", 5),
    op("-", 5),
    // Multiplicative
    op("*", 6),
    op("/", 6),
    op("%", 6),
    // Exponentiation
    op("^", 7),
];

/// Prefix (unary) operator spellings.
pub const PREFIX_OPERATORS: &[&str] = &["+", "-", "&", "*", "!", "++", "--"];

/// Resolve a binary operator spelling to its precedence level.
///
/// ## Returns
/// - `Some(level)` if the spelling exists in [`BINARY_OPERATORS`].
/// - `None` otherwise.
pub fn binary_precedence(spelling: &str) -> Option<u8> {
    BINARY_OPERATORS
        .iter()
        .find(|o| o.spelling == spelling)
        .map(|o| o.precedence)
}

/// Return `true` if the spelling is a prefix operator.
pub fn is_prefix_operator(spelling: &str) -> bool {
    PREFIX_OPERATORS.contains(&spelling)
}

// --- helpers -----------------------------------------------------------------

const fn op(spelling: &'static str, precedence: u8) -> OperatorInfo {
    OperatorInfo {
        spelling,
        precedence,
    }
}
