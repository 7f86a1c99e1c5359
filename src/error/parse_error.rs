use std::fmt;

use crate::interpreter::token::{Position, TokenKind};

/// A single parse diagnostic.
///
/// The parser never stops at the first problem: it records one of these and
/// carries on, so a run can report every defect in the file at once. The
/// `Display` output is the human-readable diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The first token is not `FRG_Begin`.
    #[error("program must start with FRG_Begin")]
    MissingBegin,
    /// The input ended before `FRG_End`.
    #[error("program must end with FRG_End")]
    MissingEnd,
    /// The lookahead token is not the one the grammar requires.
    #[error("ERROR: expected next token to be {expected}, got {found} instead ({position})")]
    UnexpectedToken {
        /// The token kind the grammar asked for.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// Where the offending token starts.
        position: Position,
    },
    /// A token that cannot begin any statement.
    #[error("ERROR: Unexpected token '{literal}' at line {line}, column {column}. Cannot parse it as a statement.")]
    NotAStatement {
        /// The token's literal text.
        literal: String,
        /// Source line.
        line:    usize,
        /// Source column.
        column:  usize,
    },
    /// A lower-case spelling of a block keyword used as a statement.
    #[error("ERROR: syntax error, did you mean '{suggestion}'? ({position})")]
    MiscapitalizedKeyword {
        /// The correctly capitalised keyword.
        suggestion: &'static str,
        /// Where the misspelt word starts.
        position:   Position,
    },
    /// A token that cannot start an expression.
    #[error("no prefix parse function for {kind} found ({position})")]
    NoPrefixRule {
        /// The token kind found in expression position.
        kind:     TokenKind,
        /// Where it starts.
        position: Position,
    },
    /// A numeral without a `.` that does not fit an `i64`.
    #[error("could not parse {literal:?} as integer ({position})")]
    InvalidInteger {
        /// The numeral as written.
        literal:  String,
        /// Where it starts.
        position: Position,
    },
    /// A numeral with a `.` that is not a valid real.
    #[error("could not parse {literal:?} as float ({position})")]
    InvalidReal {
        /// The numeral as written.
        literal:  String,
        /// Where it starts.
        position: Position,
    },
    /// A `Begin` block that runs into the end of input.
    #[error("unterminated block statement, expected End, got {found} ({position})")]
    UnterminatedBlock {
        /// The token found instead of `End`.
        found:    TokenKind,
        /// Where that token starts.
        position: Position,
    },
    /// A function parameter without a type keyword.
    #[error("expected parameter type, got {literal} ({position})")]
    ExpectedParameterType {
        /// The token text found instead.
        literal:  String,
        /// Where it starts.
        position: Position,
    },
    /// A function declaration without a return type keyword.
    #[error("expected return type, got {literal} ({position})")]
    ExpectedReturnType {
        /// The token text found instead.
        literal:  String,
        /// Where it starts.
        position: Position,
    },
    /// The left side of `:=` is neither a name nor an index expression.
    #[error("cannot assign to expression {target} ({position})")]
    InvalidAssignmentTarget {
        /// The rendered target expression.
        target:   String,
        /// Position of `:=`.
        position: Position,
    },
    /// An included file could not be read.
    #[error("ERROR: could not read included file {file}: {reason} ({position})")]
    UnreadableInclude {
        /// The file name as written after `FRG_Use`.
        file:     String,
        /// The underlying I/O failure.
        reason:   String,
        /// Position of `FRG_Use`.
        position: Position,
    },
    /// An included file is already being included further up the chain.
    #[error("cyclic inclusion of file {file} ({position})")]
    CyclicInclude {
        /// The file name as written after `FRG_Use`.
        file:     String,
        /// Position of `FRG_Use`.
        position: Position,
    },
    /// A diagnostic raised while parsing an included file.
    #[error("ERROR in included file {file}: {source}")]
    InIncludedFile {
        /// The file name as written after `FRG_Use`.
        file:   String,
        /// The diagnostic from the included file.
        source: Box<ParseError>,
    },
}

/// Every diagnostic collected while parsing one program.
///
/// Displays as one tab-indented diagnostic per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostics(pub Vec<ParseError>);

impl Diagnostics {
    /// The collected diagnostics in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "\t{error}")?;
        }
        Ok(())
    }
}
