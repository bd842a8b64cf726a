/// Recursive-descent parser state: the token stream and the cursor offset.
///
/// ## Notes
/// - The parser is single-pass with bounded lookahead and no backtracking; the
///   cursor offset only ever moves forward, and the first grammar violation
///   aborts the parse.
/// - Grammar productions are implemented on `Parser` but split across the
///   `parser/` chunk files, which are `include!`'d into this module.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by an external lexer. Must be
    ///   terminated by a [`TokenKind::Eof`] token; the parser never reads past
    ///   it.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof),
            "token stream must be terminated by TokenKind::Eof"
        );
        Self { tokens, pos: 0 }
    }

    /// Parse the entire token stream into a [`TranslationUnit`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered. The cursor is left at the
    /// failing check; no partial tree is produced.
    pub fn parse(mut self) -> Result<TranslationUnit, SyntaxError> {
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            declarations.push(self.declaration()?);
        }
        Ok(TranslationUnit { declarations })
    }
}
