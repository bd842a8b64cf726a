/// Statement parsing methods.
///
/// This chunk parses statement forms: compound blocks, conditionals, loops,
/// jumps, declaration statements, and expression statements.
///
/// ## Notes
/// - `statement` dispatches purely on the current token's kind; nothing here
///   needs more than one token of lookahead.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Statement, SyntaxError> {
        if self.match_token(TokenKind::LBrace) {
            Ok(Statement::Compound(self.compound_statement()?))
        } else if self.match_token(TokenKind::If) {
            Ok(Statement::Conditional(self.conditional_statement()?))
        } else if self.check_any(&[TokenKind::While, TokenKind::For, TokenKind::Repeat]) {
            Ok(Statement::Loop(self.loop_statement()?))
        } else if self.check_any(&[TokenKind::Return, TokenKind::Break, TokenKind::Continue]) {
            Ok(Statement::Jump(self.jump_statement()?))
        } else if self.check(TokenKind::Type) {
            Ok(Statement::Declaration(self.var_declaration()?))
        } else {
            self.expression_statement()
        }
    }

    /// `'{' statement* '}'`; the caller has consumed the opening `{`.
    ///
    /// Unterminated input fails at end-of-input through `statement`'s fallback
    /// rather than looping forever.
    fn compound_statement(&mut self) -> Result<CompoundStmt, SyntaxError> {
        let mut statements = Vec::new();
        while !self.match_token(TokenKind::RBrace) {
            statements.push(self.statement()?);
        }
        Ok(CompoundStmt { statements })
    }

    /// `'(' expr ')' statement ('elif' '(' expr ')' statement)* ['else' statement]`;
    /// the caller has consumed the leading `if`.
    fn conditional_statement(&mut self) -> Result<IfStmt, SyntaxError> {
        let if_branch = self.cond_branch()?;
        let mut elif_branches = Vec::new();
        while self.match_token(TokenKind::Elif) {
            elif_branches.push(self.cond_branch()?);
        }
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(IfStmt {
            if_branch,
            elif_branches,
            else_branch,
        })
    }

    fn cond_branch(&mut self) -> Result<CondBranch, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let condition = self.expression()?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.statement()?);
        Ok(CondBranch { condition, body })
    }

    fn loop_statement(&mut self) -> Result<LoopStmt, SyntaxError> {
        if self.match_token(TokenKind::While) {
            Ok(LoopStmt::While(self.while_statement()?))
        } else if self.check(TokenKind::For) {
            // TODO: implement the `for` grammar (init/condition/step header plus
            // body); until then the keyword is rejected outright.
            Err(self.unsupported_syntax())
        } else {
            self.expect(TokenKind::Repeat)?;
            Ok(LoopStmt::Repeat(RepeatStmt {
                body: Box::new(self.statement()?),
            }))
        }
    }

    fn while_statement(&mut self) -> Result<WhileStmt, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let condition = self.expression()?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.statement()?);
        Ok(WhileStmt { condition, body })
    }

    /// `break ';'`, `continue ';'`, or `return expr ';'`; the return
    /// expression is mandatory.
    fn jump_statement(&mut self) -> Result<JumpStmt, SyntaxError> {
        if self.match_token(TokenKind::Break) {
            self.expect(TokenKind::Semicolon)?;
            Ok(JumpStmt::Break)
        } else if self.match_token(TokenKind::Continue) {
            self.expect(TokenKind::Semicolon)?;
            Ok(JumpStmt::Continue)
        } else {
            self.expect(TokenKind::Return)?;
            let expr = self.expression()?;
            self.expect(TokenKind::Semicolon)?;
            Ok(JumpStmt::Return(expr))
        }
    }

    fn expression_statement(&mut self) -> Result<Statement, SyntaxError> {
        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::Expr(expr))
    }
}
