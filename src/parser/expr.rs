/// Expression parsing methods.
///
/// This chunk implements the expression grammar with precedence climbing:
/// binary → unary → postfix → primary.
///
/// ## Notes
/// - Binary and prefix operators are identified by their lexeme text through
///   the [`crate::operators`] tables, gated on the operator token kinds.
/// - The climb recurses into the right-hand side at the matched operator's
///   *own* precedence level, not one above it. Every operator therefore nests
///   to the right, including `-`, `/`, `%`, and the comparisons.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_expression(0)
    }

    fn binary_expression(&mut self, min_precedence: u8) -> Result<Expr, SyntaxError> {
        let mut left = self.unary_expression()?;
        while let Some(precedence) = self.peek_binary_precedence() {
            if precedence < min_precedence {
                break;
            }
            let op = self.advance().text.clone();
            let right = self.binary_expression(precedence)?;
            left = Expr::Binary(Box::new(left), op, Box::new(right));
        }
        Ok(left)
    }

    /// Precedence of the current token if it is a binary operator, `None`
    /// otherwise. Does not consume.
    fn peek_binary_precedence(&self) -> Option<u8> {
        let token = self.peek();
        if !token.kind.is_operator() {
            return None;
        }
        operators::binary_precedence(&token.text)
    }

    /// Prefix operators stack: `--x` is a prefix decrement of a further unary
    /// expression.
    fn unary_expression(&mut self) -> Result<Expr, SyntaxError> {
        if self.peek().kind.is_operator() && operators::is_prefix_operator(&self.peek().text) {
            let op = self.advance().text.clone();
            let operand = self.unary_expression()?;
            Ok(Expr::Prefix(op, Box::new(operand)))
        } else {
            self.postfix_expression()
        }
    }

    /// Greedily apply trailing `++`/`--`, calls, and subscripts in the order
    /// encountered; chains freely (`a[0](x)++`).
    fn postfix_expression(&mut self) -> Result<Expr, SyntaxError> {
        let mut base = self.primary_expression()?;
        loop {
            if self.match_token(TokenKind::Increment) {
                base = Expr::PostfixIncrement(Box::new(base));
            } else if self.match_token(TokenKind::Decrement) {
                base = Expr::PostfixDecrement(Box::new(base));
            } else if self.match_token(TokenKind::LParen) {
                base = Expr::Call(Box::new(base), self.call_arguments()?);
            } else if self.match_token(TokenKind::LBracket) {
                let index = self.expression()?;
                self.expect(TokenKind::RBracket)?;
                base = Expr::Subscript(Box::new(base), Box::new(index));
            } else {
                break;
            }
        }
        Ok(base)
    }

    /// Comma-separated argument list; the caller has consumed the opening `(`.
    fn call_arguments(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    fn primary_expression(&mut self) -> Result<Expr, SyntaxError> {
        if let Some(literal) = self.try_literal() {
            return Ok(literal);
        }
        if self.check(TokenKind::Identifier) {
            return Ok(Expr::Ident(self.expect(TokenKind::Identifier)?));
        }
        if self.match_token(TokenKind::LParen) {
            let inner = self.expression()?;
            self.expect(TokenKind::RParen)?;
            return Ok(Expr::Paren(Box::new(inner)));
        }
        Err(self.unexpected_token())
    }

    /// Literals wrap their raw lexeme; conversion is a later phase's job.
    fn try_literal(&mut self) -> Option<Expr> {
        match self.peek().kind {
            TokenKind::IntLiteral => Some(Expr::IntLiteral(self.advance().text.clone())),
            TokenKind::FloatLiteral => Some(Expr::FloatLiteral(self.advance().text.clone())),
            TokenKind::CharLiteral => Some(Expr::CharLiteral(self.advance().text.clone())),
            TokenKind::StringLiteral => Some(Expr::StringLiteral(self.advance().text.clone())),
            TokenKind::BoolLiteral => Some(Expr::BoolLiteral(self.advance().text.clone())),
            _ => None,
        }
    }
}
