use logos::Logos;

use crate::interpreter::token::{Position, Token, TokenKind};

/// Raw lexemes recognised by the generated scanner.
///
/// This is the low-level layer: it knows nothing about keywords or source
/// positions. [`Lexer`] turns each lexeme into a [`Token`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
enum Lexeme {
    /// `## comment` up to the end of the line.
    #[regex(r"##[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Identifiers and keywords; told apart by the keyword table. Any
    /// Unicode letter may start a name.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Word,
    /// A digit run with an optional fractional part. No exponents.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// A string literal with its escapes decoded. The second pattern accepts
    /// a literal that runs into the end of input without a closing quote.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, terminated_string, allow_greedy = true)]
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#, unterminated_string, allow_greedy = true)]
    Str(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `!`
    #[token("!")]
    Not,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    LessThan,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Modulo,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `#`
    #[token("#")]
    Hash,
}

/// Decodes a string literal that has both quotes.
fn terminated_string(lex: &logos::Lexer<Lexeme>) -> String {
    let slice = lex.slice();
    unescape(&slice[1..slice.len() - 1])
}

/// Decodes a string literal that was cut off by the end of input.
fn unterminated_string(lex: &logos::Lexer<Lexeme>) -> String {
    unescape(&lex.slice()[1..])
}

/// Replaces the escapes `\n`, `\t`, `\"` and `\\` with the characters they
/// stand for. Any other backslash sequence is kept as written.
///
/// # Example
/// ```
/// use frog::interpreter::lexer::unescape;
///
/// assert_eq!(unescape(r#"a\tb\n\"c\"\\"#), "a\tb\n\"c\"\\");
/// assert_eq!(unescape(r"\q"), r"\q");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('"') => decoded.push('"'),
            Some('\\') => decoded.push('\\'),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            },
            None => decoded.push('\\'),
        }
    }

    decoded
}

/// Pull-based tokenizer over Frog source text.
///
/// Each call to [`Lexer::next_token`] scans exactly one token and records the
/// line and column at which it starts. Nothing is buffered ahead; the parser
/// keeps its own single token of lookahead.
///
/// Once the input is exhausted every further call returns an `Eof` token.
///
/// # Example
/// ```
/// use frog::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("a := 1 ## set a\n");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().literal, "1");
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner:  logos::Lexer<'src, Lexeme>,
    /// Byte offset up to which `line` and `column` have been computed.
    cursor: usize,
    line:   usize,
    column: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:  Lexeme::lexer(source),
               cursor: 0,
               line:   1,
               column: 1, }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(scanned) = self.inner.next() else {
                let end = self.inner.source().len();
                self.advance_to(end);
                return Token::new(TokenKind::Eof, "", self.position());
            };

            let span = self.inner.span();
            self.advance_to(span.start);
            let position = self.position();
            self.advance_to(span.end);

            let slice = self.inner.slice();
            let (kind, literal) = match scanned {
                Ok(Lexeme::Comment) => continue,
                Ok(Lexeme::Word) => {
                    (TokenKind::keyword(slice).unwrap_or(TokenKind::Identifier), slice.to_string())
                },
                Ok(Lexeme::Number) => (TokenKind::Number, slice.to_string()),
                Ok(Lexeme::Str(value)) => (TokenKind::String, value),
                Ok(lexeme) => (punctuation_kind(&lexeme), slice.to_string()),
                Err(()) => (TokenKind::Illegal, slice.to_string()),
            };

            return Token::new(kind, literal, position);
        }
    }

    /// Drains the lexer into a vector that ends with the single `Eof` token.
    ///
    /// Consumes the lexer, so the sequence can be produced only once. Used by
    /// the token dump; the parser pulls tokens one at a time instead.
    ///
    /// # Example
    /// ```
    /// use frog::interpreter::{lexer::Lexer, token::TokenKind};
    ///
    /// let tokens = Lexer::new("FRG_Print \"hi\" #").all_tokens();
    /// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    ///
    /// assert_eq!(kinds,
    ///            vec![TokenKind::FrgPrint, TokenKind::String, TokenKind::Hash, TokenKind::Eof]);
    /// ```
    #[must_use]
    pub fn all_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Moves the line/column bookkeeping forward to byte `offset`.
    fn advance_to(&mut self, offset: usize) {
        let source: &'src str = self.inner.source();
        for ch in source[self.cursor..offset].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.cursor = offset;
    }
}

/// Maps fixed-spelling lexemes to their token kind.
const fn punctuation_kind(lexeme: &Lexeme) -> TokenKind {
    match lexeme {
        Lexeme::Assign => TokenKind::Assign,
        Lexeme::Colon => TokenKind::Colon,
        Lexeme::Equal => TokenKind::Equal,
        Lexeme::NotEqual => TokenKind::NotEqual,
        Lexeme::Not => TokenKind::Not,
        Lexeme::LessEqual => TokenKind::LessEqual,
        Lexeme::LessThan => TokenKind::LessThan,
        Lexeme::GreaterEqual => TokenKind::GreaterEqual,
        Lexeme::GreaterThan => TokenKind::GreaterThan,
        Lexeme::And => TokenKind::And,
        Lexeme::Or => TokenKind::Or,
        Lexeme::Plus => TokenKind::Plus,
        Lexeme::Minus => TokenKind::Minus,
        Lexeme::Asterisk => TokenKind::Asterisk,
        Lexeme::Slash => TokenKind::Slash,
        Lexeme::Modulo => TokenKind::Modulo,
        Lexeme::Comma => TokenKind::Comma,
        Lexeme::Semicolon => TokenKind::Semicolon,
        Lexeme::LParen => TokenKind::LParen,
        Lexeme::RParen => TokenKind::RParen,
        Lexeme::LBrace => TokenKind::LBrace,
        Lexeme::RBrace => TokenKind::RBrace,
        Lexeme::LBracket => TokenKind::LBracket,
        Lexeme::RBracket => TokenKind::RBracket,
        Lexeme::Hash => TokenKind::Hash,
        Lexeme::Comment | Lexeme::Word | Lexeme::Number | Lexeme::Str(_) => TokenKind::Illegal,
    }
}
