use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Identifier, Statement},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        token::Position,
        value::{
            array::{Array, MAX_ARRAY_LEN},
            core::Value,
        },
    },
    util::num::i64_to_usize_checked,
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// [`Flow::Normal`] with the value of an expression statement (or `None`
    /// for everything else), or the control signal raised by `Break` or
    /// `Continue`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Declaration { is_array, names, .. } => {
                for name in names {
                    let initial = if *is_array {
                        Value::Array(Array::default())
                    } else {
                        Value::Null
                    };
                    self.env.set(name.name.clone(), initial);
                }
                Ok(Flow::Normal(None))
            },
            Statement::Assignment { target, value, .. } => {
                let value = self.eval(value)?;
                self.assign(target, value)?;
                Ok(Flow::Normal(None))
            },
            Statement::Print { values, position } => {
                self.eval_print(values, *position)?;
                Ok(Flow::Normal(None))
            },
            Statement::Input { targets, .. } => {
                self.eval_input(targets)?;
                Ok(Flow::Normal(None))
            },
            Statement::If { condition,
                            consequence,
                            alternative,
                            .. } => {
                let branch = if self.eval(condition)?.is_truthy() {
                    Some(consequence.as_ref())
                } else {
                    alternative.as_deref()
                };

                match branch {
                    Some(branch) => match self.eval_statement(branch)? {
                        Flow::Normal(_) => Ok(Flow::Normal(None)),
                        signal => Ok(signal),
                    },
                    None => Ok(Flow::Normal(None)),
                }
            },
            Statement::RepeatUntil { body, condition, .. } => self.eval_repeat(body, condition),
            Statement::Block { statements, .. } | Statement::Use { statements, .. } => {
                self.eval_block(statements)
            },
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Continue { .. } => Ok(Flow::Continue),
            Statement::FunctionDeclaration(decl) => {
                self.functions.insert(decl.name.name.clone());
                Ok(Flow::Normal(None))
            },
            Statement::Expression { expr, .. } => Ok(Flow::Normal(Some(self.eval(expr)?))),
        }
    }

    /// Runs statements in order, stopping at the first control signal.
    ///
    /// # Returns
    /// The signal that stopped the block, or the outcome of its last
    /// statement.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        let mut last = Flow::Normal(None);

        for statement in statements {
            last = self.eval_statement(statement)?;
            if !matches!(last, Flow::Normal(_)) {
                return Ok(last);
            }
        }

        Ok(last)
    }

    /// Runs a post-test loop.
    ///
    /// `Break` leaves immediately without testing the condition. `Continue`
    /// skips the rest of the pass and goes straight to the condition. The
    /// loop repeats while the condition is falsy.
    fn eval_repeat(&mut self, body: &[Statement], condition: &Expr) -> EvalResult<Flow> {
        loop {
            for statement in body {
                match self.eval_statement(statement)? {
                    Flow::Normal(_) => {},
                    Flow::Break => return Ok(Flow::Normal(None)),
                    Flow::Continue => break,
                }
            }

            if self.eval(condition)?.is_truthy() {
                return Ok(Flow::Normal(None));
            }
        }
    }

    /// Stores `value` into an identifier or an array slot.
    ///
    /// Writing past the end of an array grows it, padding with `Int(0)`.
    fn assign(&mut self, target: &Expr, value: Value) -> EvalResult<()> {
        match target {
            Expr::Identifier(ident) => {
                if !self.env.contains(&ident.name) {
                    let kind = RuntimeErrorKind::UndeclaredAssignment(ident.name.clone());
                    return Err(RuntimeError::new(kind, ident.position));
                }
                self.env.set(ident.name.clone(), value);
                Ok(())
            },
            Expr::Index { left,
                          index,
                          position, } => {
                let container = self.eval(left)?;
                let index = self.eval(index)?;

                match (&container, &index) {
                    (Value::Array(array), Value::Int(i)) => {
                        let out_of_bounds =
                            RuntimeError::new(RuntimeErrorKind::IndexOutOfBounds(*i), *position);
                        let slot = i64_to_usize_checked(*i, out_of_bounds)?;
                        if slot >= MAX_ARRAY_LEN {
                            return Err(RuntimeError::new(RuntimeErrorKind::ArrayTooLarge(*i),
                                                         *position));
                        }
                        array.set_growing(slot, value);
                        Ok(())
                    },
                    _ => Err(RuntimeError::new(RuntimeErrorKind::IndexAssignNotSupported {
                                                   left:  container.type_name(),
                                                   index: index.type_name(),
                                               },
                                               *position)),
                }
            },
            other => {
                let kind = RuntimeErrorKind::InvalidAssignmentTarget(other.to_string());
                Err(RuntimeError::new(kind, other.position()))
            },
        }
    }

    /// Writes each value with no separator, then one newline.
    fn eval_print(&mut self, values: &[Expr], position: Position) -> EvalResult<()> {
        let output_failed = |e: std::io::Error| {
            RuntimeError::new(RuntimeErrorKind::OutputFailed(e.to_string()), position)
        };

        for expr in values {
            let value = self.eval(expr)?;
            write!(self.output, "{value}").map_err(output_failed)?;
        }
        writeln!(self.output).map_err(output_failed)?;
        self.output.flush().map_err(output_failed)
    }

    /// Reads one line per target and stores it as an integer, a real or a
    /// string, whichever parses first.
    fn eval_input(&mut self, targets: &[Identifier]) -> EvalResult<()> {
        for target in targets {
            if !self.env.contains(&target.name) {
                return Err(RuntimeError::new(RuntimeErrorKind::UndeclaredInput(target.name.clone()),
                                             target.position));
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    return Err(RuntimeError::new(RuntimeErrorKind::EndOfInput, target.position));
                },
                Ok(_) => {},
                Err(e) => {
                    return Err(RuntimeError::new(RuntimeErrorKind::InputFailed(e.to_string()),
                                                 target.position));
                },
            }

            let text = line.strip_suffix('\n').unwrap_or(&line);
            let text = text.strip_suffix('\r').unwrap_or(text);

            self.env.set(target.name.clone(), parse_input(text));
        }

        Ok(())
    }
}

/// Interprets one input line: integer first, then real, then string.
fn parse_input(text: &str) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(r) = text.parse::<f64>() {
        return Value::from(r);
    }
    Value::from(text)
}
