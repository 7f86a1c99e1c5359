use crate::{
    ast::InfixOperator,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, token::Position, value::core::Value},
    util::num::i64_to_f64,
};

/// Applies a binary operator to two evaluated operands.
///
/// Operators are defined only between two integers, two reals or two strings;
/// there is no implicit conversion between integer and real. Operands of
/// different types are a type mismatch, anything else an unknown operator.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`, `right`: The evaluated operands.
/// - `position`: Position of the operator, used for errors.
///
/// # Example
/// ```
/// use frog::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::eval_infix, token::Position, value::core::Value},
/// };
///
/// let here = Position::new(1, 1);
///
/// assert_eq!(eval_infix(InfixOperator::Divide, &Value::Int(7), &Value::Int(2), here),
///            Ok(Value::Real(3.5)));
/// assert!(eval_infix(InfixOperator::Add, &Value::Int(1), &Value::Real(1.0), here).is_err());
/// ```
pub fn eval_infix(op: InfixOperator,
                  left: &Value,
                  right: &Value,
                  position: Position)
                  -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int(op, *a, *b, position),
        (Value::Real(a), Value::Real(b)) => eval_real(op, *a, *b, position),
        (Value::Str(a), Value::Str(b)) if op == InfixOperator::Add => {
            Ok(Value::Str(format!("{a}{b}")))
        },
        _ => {
            let (left, right) = (left.type_name(), right.type_name());
            let kind = if left == right {
                RuntimeErrorKind::UnknownInfixOperator { left, op, right }
            } else {
                RuntimeErrorKind::TypeMismatch { left, op, right }
            };
            Err(RuntimeError::new(kind, position))
        },
    }
}

/// Integer arithmetic is checked. `/` always produces a real.
fn eval_int(op: InfixOperator, a: i64, b: i64, position: Position) -> EvalResult<Value> {
    let fail = |kind| RuntimeError::new(kind, position);
    let overflow = || fail(RuntimeErrorKind::IntegerOverflow);

    let value = match op {
        InfixOperator::Add => Value::Int(a.checked_add(b).ok_or_else(overflow)?),
        InfixOperator::Subtract => Value::Int(a.checked_sub(b).ok_or_else(overflow)?),
        InfixOperator::Multiply => Value::Int(a.checked_mul(b).ok_or_else(overflow)?),
        InfixOperator::Divide => {
            if b == 0 {
                return Err(fail(RuntimeErrorKind::DivisionByZero));
            }
            Value::Real(i64_to_f64(a) / i64_to_f64(b))
        },
        InfixOperator::Modulo => {
            if b == 0 {
                return Err(fail(RuntimeErrorKind::DivisionByZero));
            }
            Value::Int(a.checked_rem(b).ok_or_else(overflow)?)
        },
        InfixOperator::Equal => Value::Boolean(a == b),
        InfixOperator::NotEqual => Value::Boolean(a != b),
        InfixOperator::LessThan => Value::Boolean(a < b),
        InfixOperator::GreaterThan => Value::Boolean(a > b),
        InfixOperator::LessEqual => Value::Boolean(a <= b),
        InfixOperator::GreaterEqual => Value::Boolean(a >= b),
    };

    Ok(value)
}

/// `%` on reals keeps the sign of the dividend.
#[allow(clippy::float_cmp)]
fn eval_real(op: InfixOperator, a: f64, b: f64, position: Position) -> EvalResult<Value> {
    let value = match op {
        InfixOperator::Add => Value::Real(a + b),
        InfixOperator::Subtract => Value::Real(a - b),
        InfixOperator::Multiply => Value::Real(a * b),
        InfixOperator::Divide | InfixOperator::Modulo if b == 0.0 => {
            return Err(RuntimeError::new(RuntimeErrorKind::DivisionByZero, position));
        },
        InfixOperator::Divide => Value::Real(a / b),
        InfixOperator::Modulo => Value::Real(a % b),
        InfixOperator::Equal => Value::Boolean(a == b),
        InfixOperator::NotEqual => Value::Boolean(a != b),
        InfixOperator::LessThan => Value::Boolean(a < b),
        InfixOperator::GreaterThan => Value::Boolean(a > b),
        InfixOperator::LessEqual => Value::Boolean(a <= b),
        InfixOperator::GreaterEqual => Value::Boolean(a >= b),
    };

    Ok(value)
}
