/// Token-stream helpers: the cursor and lookahead engine.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching and expecting token kinds (`check`, `match_token`, `expect`)
/// - Fixed-pattern lookahead for production disambiguation (`check_sequence`)
/// - The error constructors every grammar violation is funneled through
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len() || matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Return `true` if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Return `true` if the current token has one of the given kinds.
    fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    /// Without consuming, check that the tokens at the current offset match the
    /// given kinds in order. Bounds-safe: a pattern running past the end of the
    /// stream does not match.
    fn check_sequence(&self, kinds: &[TokenKind]) -> bool {
        kinds
            .iter()
            .enumerate()
            .all(|(i, kind)| self.tokens.get(self.pos + i).is_some_and(|t| t.kind == *kind))
    }

    /// If the current token has the given kind, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind and return its lexeme text, or fail
    /// with an unexpected-token error. This is the sole error-raising primitive
    /// for expected-kind checks; dead grammar branches use the explicit
    /// constructors below.
    fn expect(&mut self, kind: TokenKind) -> Result<String, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance().text.clone())
        } else {
            Err(self.unexpected_token())
        }
    }

    fn unexpected_token(&self) -> SyntaxError {
        SyntaxError::unexpected_token(self.peek().text.clone(), self.pos)
    }

    fn missing_closing_paren(&self) -> SyntaxError {
        SyntaxError::missing_closing_paren(self.peek().text.clone(), self.pos)
    }

    fn unsupported_syntax(&self) -> SyntaxError {
        SyntaxError::unsupported(self.peek().text.clone(), self.pos)
    }
}
