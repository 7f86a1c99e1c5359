use crate::{
    ast::{DeclType, Expr, FunctionDecl, Identifier, Parameter, Statement},
    error::ParseError,
    interpreter::{
        parser::{core::Parser, expression::Precedence},
        token::TokenKind,
    },
};

/// Lower-case spellings of block keywords and the keyword they were meant to
/// be.
const MISCAPITALISED: [(&str, &str); 6] = [("if", "If"),
                                           ("else", "Else"),
                                           ("repeat", "Repeat"),
                                           ("until", "Until"),
                                           ("begin", "Begin"),
                                           ("end", "End")];

impl Parser<'_> {
    /// Parses the statement that starts at the current token.
    ///
    /// Dispatches on the current token:
    /// - a type keyword starts a declaration,
    /// - `FRG_Print`, `FRG_Input`, `FRG_Use` and `FRG_Fn` start their statements,
    /// - `If`, `Repeat`, `Begin`, `Break` and `Continue` start control flow,
    /// - an identifier starts an assignment or an expression statement.
    ///
    /// Anything else is reported as an unexpected token.
    ///
    /// # Returns
    /// The statement, or `None` when a diagnostic was recorded instead.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::FrgInt | TokenKind::FrgReal | TokenKind::FrgStrg => {
                self.parse_declaration()
            },
            TokenKind::FrgPrint => self.parse_print(),
            TokenKind::FrgInput => self.parse_input(),
            TokenKind::If => self.parse_if(),
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::Begin => {
                let position = self.current.position;
                let statements = self.parse_block_body();
                Some(Statement::Block { statements,
                                        position })
            },
            TokenKind::Break => {
                let position = self.current.position;
                self.expect_peek(TokenKind::Hash)
                    .then_some(Statement::Break { position })
            },
            TokenKind::Continue => {
                let position = self.current.position;
                self.expect_peek(TokenKind::Hash)
                    .then_some(Statement::Continue { position })
            },
            TokenKind::FrgUse => self.parse_use(),
            TokenKind::FrgFn => self.parse_function_declaration(),
            TokenKind::Identifier => self.parse_identifier_statement(),
            _ => {
                let position = self.current.position;
                self.errors.push(ParseError::NotAStatement { literal: self.current.literal.clone(),
                                                             line:    position.line,
                                                             column:  position.column, });
                None
            },
        }
    }

    /// `TYPE ['[' ']'] IDENT (',' IDENT)* #`
    fn parse_declaration(&mut self) -> Option<Statement> {
        let position = self.current.position;
        let ty = DeclType::from_token(self.current.kind)?;

        let mut is_array = false;
        if self.peek_is(TokenKind::LBracket) {
            self.next_token();
            if !self.expect_peek(TokenKind::RBracket) {
                return None;
            }
            is_array = true;
        }

        let names = self.parse_identifier_list()?;

        if !self.expect_peek(TokenKind::Hash) {
            return None;
        }

        Some(Statement::Declaration { ty,
                                      is_array,
                                      names,
                                      position })
    }

    /// `FRG_Print EXPR (',' EXPR)* #`
    fn parse_print(&mut self) -> Option<Statement> {
        let position = self.current.position;
        self.next_token();

        let mut values = vec![self.parse_expression(Precedence::Lowest)?];
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            values.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::Hash) {
            return None;
        }

        Some(Statement::Print { values, position })
    }

    /// `FRG_Input IDENT (',' IDENT)* #`
    fn parse_input(&mut self) -> Option<Statement> {
        let position = self.current.position;
        let targets = self.parse_identifier_list()?;

        if !self.expect_peek(TokenKind::Hash) {
            return None;
        }

        Some(Statement::Input { targets, position })
    }

    /// Reads `IDENT (',' IDENT)*` starting at the lookahead token.
    fn parse_identifier_list(&mut self) -> Option<Vec<Identifier>> {
        let mut names = Vec::new();
        loop {
            if !self.expect_peek(TokenKind::Identifier) {
                return None;
            }
            names.push(Identifier::new(self.current.literal.clone(), self.current.position));

            if !self.peek_is(TokenKind::Comma) {
                return Some(names);
            }
            self.next_token();
        }
    }

    /// `If '[' EXPR ']' STMT ['Else' STMT]`
    fn parse_if(&mut self) -> Option<Statement> {
        let position = self.current.position;

        if !self.expect_peek(TokenKind::LBracket) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        if !self.statement_follows() {
            return None;
        }
        self.next_token();
        let consequence = Box::new(self.parse_statement()?);

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.statement_follows() {
                return None;
            }
            self.next_token();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Some(Statement::If { condition,
                             consequence,
                             alternative,
                             position })
    }

    /// Checks that the lookahead can start a branch of an `If`.
    ///
    /// `FRG_End` and the end of input are reported without being consumed,
    /// so the program loop still sees them.
    fn statement_follows(&mut self) -> bool {
        if !self.peek_is(TokenKind::FrgEnd) && !self.peek_is(TokenKind::Eof) {
            return true;
        }
        let position = self.peek.position;
        self.errors.push(ParseError::NotAStatement { literal: self.peek.literal.clone(),
                                                     line:    position.line,
                                                     column:  position.column, });
        false
    }

    /// `Repeat STMT* Until '[' EXPR ']'`
    fn parse_repeat(&mut self) -> Option<Statement> {
        let position = self.current.position;
        self.next_token();

        let mut body = Vec::new();
        while !self.current_is(TokenKind::Until) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                body.push(statement);
            }
            self.next_token();
        }

        if !self.current_is(TokenKind::Until) {
            self.errors.push(ParseError::UnexpectedToken { expected: TokenKind::Until,
                                                           found:    self.current.kind,
                                                           position: self.current.position, });
            return None;
        }

        if !self.expect_peek(TokenKind::LBracket) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Statement::RepeatUntil { body,
                                      condition,
                                      position })
    }

    /// Parses the statements of a block whose `Begin` is the current token,
    /// leaving the closing `End` current.
    ///
    /// A block that reaches the end of input is reported but its statements
    /// are still returned.
    fn parse_block_body(&mut self) -> Vec<Statement> {
        self.next_token();

        let mut statements = Vec::new();
        while !self.current_is(TokenKind::End) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        if !self.current_is(TokenKind::End) {
            self.errors.push(ParseError::UnterminatedBlock { found:    self.current.kind,
                                                             position: self.current.position, });
        }

        statements
    }

    /// `FRG_Fn IDENT '(' (TYPE IDENT (',' TYPE IDENT)*)? ')' ':' TYPE Block`
    fn parse_function_declaration(&mut self) -> Option<Statement> {
        let position = self.current.position;

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let name = Identifier::new(self.current.literal.clone(), self.current.position);

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let mut params = Vec::new();
        if !self.peek_is(TokenKind::RParen) {
            self.next_token();
            loop {
                let Some(ty) = DeclType::from_token(self.current.kind) else {
                    self.errors.push(ParseError::ExpectedParameterType {
                        literal:  self.current.literal.clone(),
                        position: self.current.position,
                    });
                    return None;
                };
                if !self.expect_peek(TokenKind::Identifier) {
                    return None;
                }
                params.push(Parameter { ty,
                                        name: Identifier::new(self.current.literal.clone(),
                                                              self.current.position) });

                if self.peek_is(TokenKind::RParen) {
                    break;
                }
                if !self.expect_peek(TokenKind::Comma) {
                    return None;
                }
                self.next_token();
            }
        }

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::Colon) {
            return None;
        }

        self.next_token();
        let Some(return_type) = DeclType::from_token(self.current.kind) else {
            self.errors.push(ParseError::ExpectedReturnType { literal:  self.current
                                                                            .literal
                                                                            .clone(),
                                                              position: self.current.position, });
            return None;
        };

        if !self.expect_peek(TokenKind::Begin) {
            return None;
        }
        let body = self.parse_block_body();

        Some(Statement::FunctionDeclaration(FunctionDecl { name,
                                                           params,
                                                           return_type,
                                                           body,
                                                           position }))
    }

    /// An identifier-led statement: `LVALUE := EXPR #` or `EXPR #`.
    fn parse_identifier_statement(&mut self) -> Option<Statement> {
        let first = self.current.clone();
        let target = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Assign) {
            self.next_token();
            let position = self.current.position;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Hash) {
                return None;
            }
            if !matches!(target, Expr::Identifier(_) | Expr::Index { .. }) {
                self.errors.push(ParseError::InvalidAssignmentTarget { target: target.to_string(),
                                                                       position });
                return None;
            }
            return Some(Statement::Assignment { target,
                                                value,
                                                position });
        }

        if let Some((_, suggestion)) =
            MISCAPITALISED.iter().find(|(word, _)| *word == first.literal)
        {
            self.errors.push(ParseError::MiscapitalizedKeyword { suggestion: *suggestion,
                                                                 position:   first.position, });
            return None;
        }

        if !self.expect_peek(TokenKind::Hash) {
            return None;
        }

        Some(Statement::Expression { expr:     target,
                                     position: first.position, })
    }
}
