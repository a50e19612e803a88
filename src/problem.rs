use crate::{calculate, error::Error, util::num::format_number};

/// A stored question together with its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    description: String,
    answer:      f64,
}

impl Problem {
    /// Creates a problem from its display text and answer.
    #[must_use]
    pub const fn new(description: String, answer: f64) -> Self {
        Self { description, answer }
    }

    /// Solves an expression and keeps it as a problem.
    ///
    /// The description is the expression followed by `=`.
    ///
    /// # Example
    /// ```
    /// use mathgenius::problem::Problem;
    ///
    /// let problem = Problem::from_expression("2+3*4").unwrap();
    /// assert_eq!(problem.solved(), "2+3*4=14.0");
    /// assert_eq!(problem.unsolved(), "2+3*4=__");
    /// ```
    pub fn from_expression(expression: &str) -> Result<Self, Error> {
        let calculation = calculate(expression)?;
        Ok(Self::new(format!("{}=", expression.trim()), calculation.value))
    }

    /// The description followed by the answer.
    #[must_use]
    pub fn solved(&self) -> String {
        format!("{}{}", self.description, format_number(self.answer))
    }

    /// The description followed by a blank to fill in.
    #[must_use]
    pub fn unsolved(&self) -> String {
        format!("{}__", self.description)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn answer(&self) -> f64 {
        self.answer
    }
}
