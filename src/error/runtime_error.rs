use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::{token::Position, value::array::MAX_ARRAY_LEN},
};

/// What went wrong during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    /// A name was read before being declared.
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    /// A name was assigned before being declared.
    #[error("cannot assign to undeclared identifier: {0}")]
    UndeclaredAssignment(String),
    /// `FRG_Input` named an undeclared identifier.
    #[error("cannot input to undeclared identifier: {0}")]
    UndeclaredInput(String),
    /// `/` or `%` with a zero right operand.
    #[error("u can't divis per zero")]
    DivisionByZero,
    /// Checked integer arithmetic overflowed.
    #[error("integer overflow")]
    IntegerOverflow,
    /// A binary operator applied to operands of different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type of the right operand.
        right: &'static str,
    },
    /// A binary operator the operand type does not support.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type of the right operand.
        right: &'static str,
    },
    /// A prefix operator the operand type does not support.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      PrefixOperator,
        /// Type of the operand.
        operand: &'static str,
    },
    /// An index outside `0..len`.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(i64),
    /// Indexing a value that is not an array or string, or with a non-integer.
    #[error("index operator not supported: {left}[{index}]")]
    IndexNotSupported {
        /// Type of the indexed value.
        left:  &'static str,
        /// Type of the index.
        index: &'static str,
    },
    /// Writing through an index into something other than an array.
    #[error("cannot assign to index: {left}[{index}]")]
    IndexAssignNotSupported {
        /// Type of the indexed value.
        left:  &'static str,
        /// Type of the index.
        index: &'static str,
    },
    /// The left side of an assignment is not assignable.
    #[error("cannot assign to {0}")]
    InvalidAssignmentTarget(String),
    /// `[n]` where `n` is not an integer.
    #[error("array size must be integer")]
    ArraySizeNotInteger,
    /// `[n]` where `n` is negative.
    #[error("array size cannot be negative")]
    NegativeArraySize,
    /// An array would grow past the supported length.
    #[error("array length {0} exceeds the maximum of {max}", max = MAX_ARRAY_LEN)]
    ArrayTooLarge(i64),
    /// A call to a name bound by `FRG_Fn`.
    #[error("function '{0}' is declared but calling functions is not supported")]
    FunctionNotCallable(String),
    /// A call whose callee is not a declared function.
    #[error("'{0}' is not a function")]
    NotAFunction(String),
    /// `FRG_Input` found no more input lines.
    #[error("error reading input: end of input")]
    EndOfInput,
    /// Reading from the input source failed.
    #[error("error reading input: {0}")]
    InputFailed(String),
    /// Writing to the output sink failed.
    #[error("error writing output: {0}")]
    OutputFailed(String),
}

/// A runtime error together with the source position that raised it.
///
/// Displays as `ERROR: <message> (line L, col C)`.
///
/// # Example
/// ```
/// use frog::{
///     error::{RuntimeError, RuntimeErrorKind},
///     interpreter::token::Position,
/// };
///
/// let error = RuntimeError::new(RuntimeErrorKind::DivisionByZero, Position::new(3, 8));
/// assert_eq!(error.to_string(), "ERROR: u can't divis per zero (line 3, col 8)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ERROR: {kind} ({position})")]
pub struct RuntimeError {
    /// What went wrong.
    pub kind:     RuntimeErrorKind,
    /// Where it went wrong.
    pub position: Position,
}

impl RuntimeError {
    /// Creates a runtime error.
    #[must_use]
    pub const fn new(kind: RuntimeErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// The message without the `ERROR:` prefix and position suffix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
