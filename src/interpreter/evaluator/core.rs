use std::{
    collections::HashSet,
    io::{BufRead, Write},
};

use crate::{
    ast::Program,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// Runtime errors travel in the `Err` arm and are propagated with `?` through
/// every sequencing point, so the first error ends the run.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Break` and `Continue` are control signals: every construct that runs
/// statements in sequence stops at the first one and hands it up unchanged
/// until a `Repeat` loop consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Ran to completion, yielding a value for expression statements.
    Normal(Option<Value>),
    /// A `Break` is unwinding to the nearest loop.
    Break,
    /// A `Continue` is unwinding to the nearest loop.
    Continue,
}

/// Stores the runtime state of one program run.
///
/// Holds the variable environment, the names declared with `FRG_Fn`, and the
/// input and output streams used by `FRG_Input` and `FRG_Print`. The streams
/// are generic so tests can run programs against in-memory buffers.
///
/// One context evaluates one program at a time; evaluation needs `&mut self`.
///
/// # Example
/// ```
/// use frog::interpreter::evaluator::core::Context;
///
/// let program = frog::parse("FRG_Begin FRG_Print 1 + 2 # FRG_End").unwrap();
/// let mut context = Context::new("".as_bytes(), Vec::new());
///
/// context.eval_program(&program).unwrap();
///
/// assert_eq!(context.into_output(), b"3\n");
/// ```
pub struct Context<R, W> {
    /// The variable store.
    pub env:              Environment,
    /// Names bound by function declarations.
    pub(super) functions: HashSet<String>,
    pub(super) input:     R,
    pub(super) output:    W,
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Creates a context with an empty environment.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { env: Environment::new(),
               functions: HashSet::new(),
               input,
               output }
    }

    /// Consumes the context and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates every top-level statement in order.
    ///
    /// A `Break` or `Continue` that reaches the top level stops the program
    /// without an error.
    ///
    /// # Returns
    /// The value of the last expression statement that ran, if any.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        let mut last = None;

        for statement in &program.statements {
            match self.eval_statement(statement)? {
                Flow::Normal(Some(value)) => last = Some(value),
                Flow::Normal(None) => {},
                Flow::Break | Flow::Continue => break,
            }
        }

        Ok(last)
    }
}
