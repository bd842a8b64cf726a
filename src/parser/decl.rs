/// Declaration parsing methods.
///
/// This chunk parses top-level and block-scoped declarations: functions
/// (definitions and prototypes), variables, parameters, and declarators.
///
/// ## Notes
/// - Function and variable declarations share a `type [*] identifier` prefix
///   and diverge only at the following `(`, so `declaration` disambiguates
///   with a 3–4 token lookahead before committing.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<Declaration, SyntaxError> {
        if self.check_sequence(&[TokenKind::Type, TokenKind::Identifier, TokenKind::LParen])
            || self.check_sequence(&[
                TokenKind::Type,
                TokenKind::Star,
                TokenKind::Identifier,
                TokenKind::LParen,
            ])
        {
            Ok(Declaration::Function(self.function_declaration()?))
        } else if self.check_sequence(&[TokenKind::Type, TokenKind::Identifier])
            || self.check_sequence(&[TokenKind::Type, TokenKind::Star, TokenKind::Identifier])
        {
            Ok(Declaration::Var(self.var_declaration()?))
        } else {
            Err(self.unexpected_token())
        }
    }

    /// `type declarator '(' [param (',' param)*] ')' (compound-statement | ';')`
    ///
    /// A trailing `;` denotes a prototype: the body is absent.
    fn function_declaration(&mut self) -> Result<FunctionDecl, SyntaxError> {
        let ty = self.expect(TokenKind::Type)?;
        let declarator = self.declarator()?;
        self.expect(TokenKind::LParen)?;

        let mut params = Vec::new();
        if !self.match_token(TokenKind::RParen) {
            loop {
                params.push(self.param_declaration()?);
                if self.match_token(TokenKind::Comma) {
                    continue;
                } else if self.match_token(TokenKind::RParen) {
                    break;
                } else {
                    return Err(self.missing_closing_paren());
                }
            }
        }

        let body = if self.match_token(TokenKind::LBrace) {
            Some(self.compound_statement()?)
        } else if self.match_token(TokenKind::Semicolon) {
            None
        } else {
            return Err(self.unexpected_token());
        };

        Ok(FunctionDecl {
            ty,
            declarator,
            params,
            body,
        })
    }

    /// Parameters reuse the init-declarator production, so default values are
    /// accepted at the grammar level.
    fn param_declaration(&mut self) -> Result<ParamDecl, SyntaxError> {
        Ok(ParamDecl {
            ty: self.expect(TokenKind::Type)?,
            declarator: self.init_declarator()?,
        })
    }

    /// `type init-declarator (',' init-declarator)* ';'`
    fn var_declaration(&mut self) -> Result<VarDecl, SyntaxError> {
        let ty = self.expect(TokenKind::Type)?;
        let mut declarators = Vec::new();
        loop {
            declarators.push(self.init_declarator()?);
            if self.match_token(TokenKind::Comma) {
                continue;
            } else if self.match_token(TokenKind::Semicolon) {
                break;
            } else {
                return Err(self.unexpected_token());
            }
        }
        Ok(VarDecl { ty, declarators })
    }

    fn init_declarator(&mut self) -> Result<InitDeclarator, SyntaxError> {
        let declarator = self.declarator()?;
        let init = if self.match_token(TokenKind::Assign) {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(InitDeclarator { declarator, init })
    }

    /// `'*' identifier` or bare `identifier`. No multi-level pointers.
    fn declarator(&mut self) -> Result<Declarator, SyntaxError> {
        if self.check_sequence(&[TokenKind::Star, TokenKind::Identifier]) {
            self.advance();
            Ok(Declarator::Pointer(self.expect(TokenKind::Identifier)?))
        } else if self.check(TokenKind::Identifier) {
            Ok(Declarator::Direct(self.expect(TokenKind::Identifier)?))
        } else {
            Err(self.unexpected_token())
        }
    }
}
