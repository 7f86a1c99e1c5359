use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, PrefixOperator},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::{
            binary::eval_infix,
            core::{Context, EvalResult},
        },
        token::Position,
        value::{
            array::{Array, MAX_ARRAY_LEN},
            core::Value,
        },
    },
    util::num::i64_to_usize_checked,
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates an expression to a value.
    ///
    /// Operands are evaluated left to right, and the first error is returned
    /// as soon as it occurs.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The resulting value. Reading an identifier yields a copy of its
    /// binding; for arrays that copy shares storage with the variable.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Identifier(ident) => {
                self.env
                    .get(&ident.name)
                    .cloned()
                    .ok_or_else(|| {
                        RuntimeError::new(RuntimeErrorKind::IdentifierNotFound(ident.name.clone()),
                                          ident.position)
                    })
            },
            Expr::Integer { value, .. } => Ok(Value::from(*value)),
            Expr::Real { value, .. } => Ok(Value::from(*value)),
            Expr::Str { value, .. } => Ok(Value::from(value.as_str())),
            Expr::Boolean { value, .. } => Ok(Value::from(*value)),
            Expr::Prefix { op, right, position } => {
                let right = self.eval(right)?;
                eval_prefix(*op, &right, *position)
            },
            Expr::Infix { left,
                          op,
                          right,
                          position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_infix(*op, &left, &right, *position)
            },
            Expr::ArrayLiteral { elements, .. } => {
                let elements = elements.iter()
                                       .map(|element| self.eval(element))
                                       .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(elements))
            },
            Expr::ArraySize { size, position } => {
                let size = self.eval(size)?;
                eval_array_size(&size, *position)
            },
            Expr::Index { left,
                          index,
                          position, } => {
                let left = self.eval(left)?;
                let index = self.eval(index)?;
                eval_index(&left, &index, *position)
            },
            Expr::Call { function, position, .. } => Err(self.call_error(function, *position)),
        }
    }

    /// Calls are parsed but never executed.
    fn call_error(&self, function: &Expr, position: Position) -> RuntimeError {
        let kind = match function {
            Expr::Identifier(ident) if self.functions.contains(&ident.name) => {
                RuntimeErrorKind::FunctionNotCallable(ident.name.clone())
            },
            other => RuntimeErrorKind::NotAFunction(other.to_string()),
        };
        RuntimeError::new(kind, position)
    }
}

fn eval_prefix(op: PrefixOperator, right: &Value, position: Position) -> EvalResult<Value> {
    match (op, right) {
        (PrefixOperator::Negate, Value::Int(n)) => {
            n.checked_neg()
             .map(Value::Int)
             .ok_or(RuntimeError::new(RuntimeErrorKind::IntegerOverflow, position))
        },
        (PrefixOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
        (op, operand) => {
            let kind = RuntimeErrorKind::UnknownPrefixOperator { op,
                                                                 operand: operand.type_name() };
            Err(RuntimeError::new(kind, position))
        },
    }
}

/// `[n]`: an array of `n` zeros.
fn eval_array_size(size: &Value, position: Position) -> EvalResult<Value> {
    let Value::Int(n) = size else {
        return Err(RuntimeError::new(RuntimeErrorKind::ArraySizeNotInteger, position));
    };

    let negative = RuntimeError::new(RuntimeErrorKind::NegativeArraySize, position);
    let len = i64_to_usize_checked(*n, negative)?;
    if len > MAX_ARRAY_LEN {
        return Err(RuntimeError::new(RuntimeErrorKind::ArrayTooLarge(*n), position));
    }

    Ok(Value::Array(Array::zeroed(len)))
}

/// `Array[Int]` yields the element, `String[Int]` a one-character string.
fn eval_index(left: &Value, index: &Value, position: Position) -> EvalResult<Value> {
    let out_of_bounds = |i: i64| RuntimeError::new(RuntimeErrorKind::IndexOutOfBounds(i), position);

    match (left, index) {
        (Value::Array(array), Value::Int(i)) => {
            let slot = i64_to_usize_checked(*i, out_of_bounds(*i))?;
            array.get(slot).ok_or_else(|| out_of_bounds(*i))
        },
        (Value::Str(s), Value::Int(i)) => {
            let slot = i64_to_usize_checked(*i, out_of_bounds(*i))?;
            s.chars()
             .nth(slot)
             .map(|ch| Value::Str(ch.to_string()))
             .ok_or_else(|| out_of_bounds(*i))
        },
        _ => {
            let kind = RuntimeErrorKind::IndexNotSupported { left:  left.type_name(),
                                                             index: index.type_name(), };
            Err(RuntimeError::new(kind, position))
        },
    }
}
