/// A location in the source text.
///
/// Both fields are 1-based. `column` counts characters (not bytes) from the
/// start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Source line, starting at 1.
    pub line:   usize,
    /// Character column within the line, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// The type tag of a [`Token`].
///
/// The set is closed: every character sequence the lexer can produce maps to
/// exactly one of these kinds, with `Illegal` covering everything the
/// language does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Produced once the source is exhausted, and again on
    /// every later request.
    Eof,
    /// A character (or unmatched half of a two-character operator) that is
    /// not part of the language.
    Illegal,

    /// A name that is not a keyword.
    Identifier,
    /// A numeral such as `42` or `3.14`; the literal keeps the source text.
    Number,
    /// A string literal; the literal holds the decoded contents.
    String,

    /// `:=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Modulo,

    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,

    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `#`, the statement terminator.
    Hash,

    /// `FRG_Begin`
    FrgBegin,
    /// `FRG_End`
    FrgEnd,
    /// `FRG_Int`
    FrgInt,
    /// `FRG_Real`
    FrgReal,
    /// `FRG_Strg`
    FrgStrg,
    /// `FRG_Print`
    FrgPrint,
    /// `FRG_Input`
    FrgInput,
    /// `FRG_Fn`
    FrgFn,
    /// `FRG_Use`
    FrgUse,
    /// `If`
    If,
    /// `Else`
    Else,
    /// `Begin`
    Begin,
    /// `End`
    End,
    /// `Repeat`
    Repeat,
    /// `Until`
    Until,
    /// `Break`
    Break,
    /// `Continue`
    Continue,
    /// `True`
    True,
    /// `False`
    False,
}

impl TokenKind {
    /// Looks a word up in the keyword table.
    ///
    /// Keywords are case-sensitive; anything not listed is an identifier.
    ///
    /// # Example
    /// ```
    /// use frog::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("Repeat"), Some(TokenKind::Repeat));
    /// assert_eq!(TokenKind::keyword("repeat"), None);
    /// ```
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "FRG_Begin" => Self::FrgBegin,
            "FRG_End" => Self::FrgEnd,
            "FRG_Int" => Self::FrgInt,
            "FRG_Real" => Self::FrgReal,
            "FRG_Strg" => Self::FrgStrg,
            "FRG_Print" => Self::FrgPrint,
            "FRG_Input" => Self::FrgInput,
            "FRG_Fn" => Self::FrgFn,
            "FRG_Use" => Self::FrgUse,
            "If" => Self::If,
            "Else" => Self::Else,
            "Begin" => Self::Begin,
            "End" => Self::End,
            "Repeat" => Self::Repeat,
            "Until" => Self::Until,
            "Break" => Self::Break,
            "Continue" => Self::Continue,
            "True" => Self::True,
            "False" => Self::False,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` for the three type keywords usable in declarations and
    /// function signatures.
    #[must_use]
    pub const fn is_type(self) -> bool {
        matches!(self, Self::FrgInt | Self::FrgReal | Self::FrgStrg)
    }

    /// The upper-case name used in token dumps and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Modulo => "MODULO",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessEqual => "LESS_EQUAL",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Hash => "HASH",
            Self::FrgBegin => "FRG_BEGIN",
            Self::FrgEnd => "FRG_END",
            Self::FrgInt => "FRG_INT",
            Self::FrgReal => "FRG_REAL",
            Self::FrgStrg => "FRG_STRG",
            Self::FrgPrint => "FRG_PRINT",
            Self::FrgInput => "FRG_INPUT",
            Self::FrgFn => "FRG_FN",
            Self::FrgUse => "FRG_USE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Repeat => "REPEAT",
            Self::Until => "UNTIL",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::True => "TRUE",
            Self::False => "FALSE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit: a type tag, its literal text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The source text of the token. For strings this is the decoded value
    /// without the surrounding quotes.
    pub literal:  String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self { kind,
               literal: literal.into(),
               position }
    }

    /// Formats the token the way the token dump prints it:
    /// `TOKEN_TYPE_NAME: "literal"`.
    ///
    /// # Example
    /// ```
    /// use frog::interpreter::token::{Position, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Assign, ":=", Position::new(1, 3));
    /// assert_eq!(token.dump(), r#"ASSIGN: ":=""#);
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        format!("{}: {:?}", self.kind, self.literal)
    }
}
