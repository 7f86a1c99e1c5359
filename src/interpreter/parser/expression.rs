use crate::{
    ast::{Expr, Identifier, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{parser::core::Parser, token::TokenKind},
};

/// Binding power of operators, weakest first.
///
/// # Example
/// ```
/// use frog::interpreter::{parser::expression::Precedence, token::TokenKind};
///
/// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
/// assert_eq!(Precedence::of(TokenKind::Hash), Precedence::Lowest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that does not continue an expression.
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`, `%`
    Product,
    /// `a[i]`
    Index,
    /// `f(x)`
    Call,
    /// `-x`
    Prefix,
}

impl Precedence {
    /// The precedence a token has in infix position.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual => Self::Equals,
            TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Modulo => Self::Product,
            TokenKind::LBracket => Self::Index,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

type PrefixFn<'src> = fn(&mut Parser<'src>) -> Option<Expr>;
type InfixFn<'src> = fn(&mut Parser<'src>, Expr) -> Option<Expr>;

impl<'src> Parser<'src> {
    /// Handler for a token in prefix (operand) position.
    fn prefix_rule(kind: TokenKind) -> Option<PrefixFn<'src>> {
        let rule: PrefixFn<'src> = match kind {
            TokenKind::Identifier => Self::parse_identifier,
            TokenKind::Number => Self::parse_number,
            TokenKind::String => Self::parse_string,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Minus => Self::parse_prefix,
            TokenKind::LBrace => Self::parse_array_literal,
            TokenKind::LBracket => Self::parse_array_size,
            TokenKind::LParen => Self::parse_grouped,
            _ => return None,
        };
        Some(rule)
    }

    /// Handler for a token in infix (operator) position.
    fn infix_rule(kind: TokenKind) -> Option<InfixFn<'src>> {
        let rule: InfixFn<'src> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Modulo
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual => Self::parse_infix,
            TokenKind::LBracket => Self::parse_index,
            TokenKind::LParen => Self::parse_call,
            _ => return None,
        };
        Some(rule)
    }

    /// Parses an expression by precedence climbing.
    ///
    /// Parses one operand with the prefix handler of the current token, then
    /// keeps folding infix operators into the left-hand side for as long as
    /// the lookahead binds tighter than `precedence`. Each right operand is
    /// parsed at its operator's own precedence, so equal-precedence chains
    /// associate to the left.
    ///
    /// A `#` lookahead always ends the expression.
    ///
    /// # Parameters
    /// - `precedence`: Binding power of the operator to the left of this
    ///   expression, or [`Precedence::Lowest`] at the top.
    ///
    /// # Returns
    /// The expression, with `current` on its last token, or `None` after a
    /// diagnostic.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let Some(prefix) = Self::prefix_rule(self.current.kind) else {
            self.errors.push(ParseError::NoPrefixRule { kind:     self.current.kind,
                                                        position: self.current.position, });
            return None;
        };

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Hash) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = Self::infix_rule(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(Identifier::new(self.current.literal.clone(),
                                              self.current.position)))
    }

    /// A numeral containing `.` is a real, anything else an integer.
    fn parse_number(&mut self) -> Option<Expr> {
        let literal = self.current.literal.clone();
        let position = self.current.position;

        if literal.contains('.') {
            let Ok(value) = literal.parse::<f64>() else {
                self.errors.push(ParseError::InvalidReal { literal, position });
                return None;
            };
            return Some(Expr::Real { value,
                                     literal,
                                     position });
        }

        let Ok(value) = literal.parse::<i64>() else {
            self.errors.push(ParseError::InvalidInteger { literal, position });
            return None;
        };
        Some(Expr::Integer { value, position })
    }

    fn parse_string(&mut self) -> Option<Expr> {
        Some(Expr::Str { value:    self.current.literal.clone(),
                         position: self.current.position, })
    }

    fn parse_boolean(&mut self) -> Option<Expr> {
        Some(Expr::Boolean { value:    self.current_is(TokenKind::True),
                             position: self.current.position, })
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        let position = self.current.position;
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix { op: PrefixOperator::Negate,
                            right: Box::new(right),
                            position })
    }

    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let position = self.current.position;
        let op = InfixOperator::from_token(self.current.kind)?;
        let precedence = Precedence::of(self.current.kind);

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { left: Box::new(left),
                           op,
                           right: Box::new(right),
                           position })
    }

    /// `( EXPR )`
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen).then_some(expr)
    }

    /// `{ EXPR, ... }`
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let position = self.current.position;
        let elements = self.parse_expression_list(TokenKind::RBrace)?;
        Some(Expr::ArrayLiteral { elements, position })
    }

    /// `[ EXPR ]` in operand position.
    fn parse_array_size(&mut self) -> Option<Expr> {
        let position = self.current.position;
        self.next_token();
        let size = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::RBracket)
            .then(|| Expr::ArraySize { size: Box::new(size),
                                       position })
    }

    /// `left [ EXPR ]`
    fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        let position = self.current.position;
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::RBracket)
            .then(|| Expr::Index { left: Box::new(left),
                                   index: Box::new(index),
                                   position })
    }

    /// `function ( EXPR, ... )`
    fn parse_call(&mut self, function: Expr) -> Option<Expr> {
        let position = self.current.position;
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::Call { function: Box::new(function),
                          arguments,
                          position })
    }

    /// Parses comma-separated expressions after the current opening token, up
    /// to and including `end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end).then_some(list)
    }
}
