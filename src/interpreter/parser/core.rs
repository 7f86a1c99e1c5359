use std::path::PathBuf;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Recursive-descent parser with one token of lookahead.
///
/// The parser pulls tokens from a [`Lexer`] on demand and keeps exactly two of
/// them: `current`, the token being parsed, and `peek`, the one after it.
/// Statement parsers follow one convention: on entry `current` is the first
/// token of the statement, on exit it is the last one (usually the `#`).
///
/// Problems never stop the parse. Each one is recorded as a [`ParseError`] and
/// parsing resumes at the next token, so the returned [`Program`] may be
/// incomplete around a defect. Check [`Parser::has_errors`] before using it.
///
/// # Example
/// ```
/// use frog::interpreter::parser::Parser;
///
/// let mut parser = Parser::new("FRG_Begin FRG_Int a # a := 1 # FRG_End");
/// let program = parser.parse_program();
///
/// assert!(!parser.has_errors());
/// assert_eq!(program.statements.len(), 2);
/// ```
pub struct Parser<'src> {
    lexer:                Lexer<'src>,
    pub(super) current:   Token,
    pub(super) peek:      Token,
    pub(super) errors:    Vec<ParseError>,
    /// The file this source was read from, if any. `FRG_Use` paths resolve
    /// against its directory.
    pub(super) origin:    Option<PathBuf>,
    /// Canonical paths of the files currently being included, outermost
    /// first.
    pub(super) including: Vec<PathBuf>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over source text that has no file of origin.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_chain(source, None, Vec::new())
    }

    /// Creates a parser over source text read from `path`.
    ///
    /// Included files are then looked up relative to the directory of
    /// `path`, and `path` itself counts as being included.
    #[must_use]
    pub fn with_origin(source: &'src str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let canonical = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        Self::with_chain(source, Some(path), vec![canonical])
    }

    pub(super) fn with_chain(source: &'src str,
                             origin: Option<PathBuf>,
                             including: Vec<PathBuf>)
                             -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self { lexer,
               current,
               peek,
               errors: Vec::new(),
               origin,
               including }
    }

    /// Parses a whole `FRG_Begin ... FRG_End` program.
    ///
    /// Statements parsed before a missing `FRG_End` are still returned.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        if !self.current_is(TokenKind::FrgBegin) {
            self.errors.push(ParseError::MissingBegin);
            return program;
        }
        self.next_token();

        let mut ended = false;
        while !self.current_is(TokenKind::Eof) {
            if self.current_is(TokenKind::FrgEnd) {
                ended = true;
                break;
            }
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        if !ended {
            self.errors.push(ParseError::MissingEnd);
        }

        program
    }

    /// Diagnostics recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Returns `true` when at least one diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Shifts the lookahead window by one token.
    pub(super) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead has the given kind, otherwise records an
    /// error and stays put.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            return true;
        }
        self.errors.push(ParseError::UnexpectedToken { expected: kind,
                                                       found:    self.peek.kind,
                                                       position: self.peek.position, });
        false
    }
}
