/// Parse a token stream into a [`TranslationUnit`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Pre-classified token stream produced by an external lexer,
///   terminated by a [`TokenKind::Eof`] token.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered. There is no recovery and no
/// partial tree; any failure means "no usable AST produced".
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<TranslationUnit, SyntaxError> {
    Parser::new(tokens).parse()
}
