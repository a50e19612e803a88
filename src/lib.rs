//! # mathgenius
//!
//! mathgenius solves flat arithmetic problems such as `2+3*4` and explains
//! how it got there. Expressions are tokenized, reordered into postfix order
//! respecting operator precedence, and evaluated on a value stack while every
//! binary operation is recorded and rendered as a hand-worked breakdown.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    engine::{
        evaluator::{Calculation, evaluate},
        lexer::tokenize,
        postfix::to_postfix,
    },
    error::Error,
};

/// Turns expressions into answers and explanations.
///
/// This module holds the whole calculation pipeline: tokenizing, conversion
/// to postfix order, stack evaluation and the rendering of each evaluated
/// step.
///
/// # Responsibilities
/// - Splits input into number and operator tokens.
/// - Orders operators by precedence and associativity.
/// - Evaluates, rounds, and records every binary operation.
/// - Formats the recorded operations as a numbered report.
pub mod engine;
/// Provides unified error types for tokenizing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase and a crate-level [`error::Error`].
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Stored problems.
///
/// A problem pairs the text of a question with its answer and knows how to
/// display itself solved or unsolved.
pub mod problem;
/// Numeric helpers shared by the engine and the command line.
///
/// # Responsibilities
/// - Convert integer literals to `f64` without silent precision loss.
/// - Round answers to three decimal places.
/// - Render numbers with a visible decimal point.
pub mod util;

/// Calculates an expression and returns its value with every step taken.
///
/// The expression may contain non-negative integers and the operators
/// `+ - * /`; whitespace is ignored. Each call works on its own state, so the
/// returned steps only ever describe this expression.
///
/// # Errors
/// Returns an error if a literal is too large, if an unsupported operator is
/// used, or if the operators and operands do not reduce to a single value.
///
/// # Examples
/// ```
/// use mathgenius::calculate;
///
/// let calculation = calculate("2+3*4").unwrap();
/// assert_eq!(calculation.value, 14.0);
/// assert_eq!(calculation.steps.len(), 2);
///
/// // A trailing operator has nothing to apply to.
/// assert!(calculate("2++").is_err());
/// ```
pub fn calculate(expression: &str) -> Result<Calculation, Error> {
    let tokens = tokenize(expression)?;
    debug!(expression, tokens = tokens.len(), "tokenized expression");

    let postfix = to_postfix(&tokens);
    Ok(evaluate(&postfix)?)
}

/// Remembers the most recent calculation for later explanation.
///
/// This is the stateful front door used by interactive callers: solve with
/// [`Calculator::calculate`], then ask for the report of that same
/// calculation with [`Calculator::explanations_string`]. A failed
/// calculation forgets the previous one.
#[derive(Debug, Default)]
pub struct Calculator {
    last: Option<Calculation>,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates an expression and returns its rounded value.
    ///
    /// # Errors
    /// See [`calculate`].
    ///
    /// # Examples
    /// ```
    /// use mathgenius::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    /// assert_eq!(calculator.explanations_string(), "");
    ///
    /// assert_eq!(calculator.calculate("7/2").unwrap(), 3.5);
    /// assert!(calculator.explanations_string().starts_with("1. The computation"));
    /// ```
    pub fn calculate(&mut self, expression: &str) -> Result<f64, Error> {
        self.last = None;
        let calculation = calculate(expression)?;
        let value = calculation.value;
        self.last = Some(calculation);
        Ok(value)
    }

    /// The numbered report of the most recent successful calculation.
    ///
    /// Empty before any calculation and after a failed one.
    #[must_use]
    pub fn explanations_string(&self) -> String {
        self.last.as_ref().map(Calculation::report).unwrap_or_default()
    }

    /// The most recent successful calculation, if any.
    #[must_use]
    pub const fn last(&self) -> Option<&Calculation> {
        self.last.as_ref()
    }
}
