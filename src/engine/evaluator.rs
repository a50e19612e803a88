use tracing::{debug, trace};

use crate::{
    engine::{
        explain::{explain, report},
        lexer::{Operator, Token},
    },
    error::EvalError,
    util::num::{round_to_millis, u64_to_f64_checked},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// One binary operation performed during evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
    /// Left operand (the value pushed first).
    pub left:   f64,
    /// Right operand (the value pushed last).
    pub right:  f64,
    /// The operator applied.
    pub op:     Operator,
    /// The unrounded result of `left op right`.
    pub result: f64,
}

impl Step {
    /// Renders this step as a human-readable breakdown.
    #[must_use]
    pub fn explanation(&self) -> String {
        explain(self)
    }
}

/// The outcome of one successful calculation.
///
/// Each calculation owns its steps, so repeated or concurrent calculations
/// never see each other's explanations.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Final value rounded to three decimal places.
    pub value: f64,
    /// Every binary operation in the order it was evaluated.
    pub steps: Vec<Step>,
}

impl Calculation {
    /// One explanation per step, in evaluation order.
    #[must_use]
    pub fn explanations(&self) -> Vec<String> {
        self.steps.iter().map(Step::explanation).collect()
    }

    /// All explanations numbered from 1 and joined into a single report.
    #[must_use]
    pub fn report(&self) -> String {
        report(&self.steps)
    }
}

/// Applies a supported operator to two operands.
///
/// Division by zero is not an error: it yields an infinity or NaN.
///
/// # Errors
/// Returns [`EvalError::UnknownOperator`] for any symbol other than
/// `+ - * /`.
pub fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => Ok(left / right),
        Operator::Unknown(symbol) => Err(EvalError::UnknownOperator { symbol }),
    }
}

/// Evaluates a postfix sequence with a value stack.
///
/// Numbers are pushed. An operator pops the right operand, then the left
/// one, records a [`Step`] and pushes its result. Exactly one value must be
/// left at the end; it is rounded to three decimal places.
///
/// # Errors
/// - [`EvalError::MalformedExpression`] if an operator lacks operands or more
///   than one value remains.
/// - [`EvalError::UnknownOperator`] if an unsupported symbol is applied.
/// - [`EvalError::LiteralTooLarge`] if a number is not exactly representable
///   as `f64`. Tokens from the lexer never are.
///
/// # Example
/// ```
/// use mathgenius::engine::{
///     evaluator::evaluate,
///     lexer::{Operator, Token},
/// };
///
/// // 7 2 /
/// let postfix = [Token::Number(7), Token::Number(2), Token::Operator(Operator::Div)];
/// let calculation = evaluate(&postfix).unwrap();
///
/// assert_eq!(calculation.value, 3.5);
/// assert_eq!(calculation.steps.len(), 1);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<Calculation> {
    let mut stack: Vec<f64> = Vec::new();
    let mut steps = Vec::new();

    for token in postfix {
        match *token {
            Token::Number(value) => {
                stack.push(u64_to_f64_checked(value, EvalError::LiteralTooLarge { value })?);
            },
            Token::Operator(op) => {
                let remaining = stack.len();
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::MalformedExpression { remaining });
                };
                let result = apply(op, left, right)?;

                trace!(left, %op, right, result, "applied operator");
                steps.push(Step { left, right, op, result });
                stack.push(result);
            },
        }
    }

    let value = match stack.as_slice() {
        [value] => round_to_millis(*value),
        _ => return Err(EvalError::MalformedExpression { remaining: stack.len() }),
    };

    debug!(value, steps = steps.len(), "evaluated expression");
    Ok(Calculation { value, steps })
}
