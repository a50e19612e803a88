#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// The expression does not reduce to exactly one value.
    ///
    /// Raised both when an operator finds fewer than two operands and when
    /// operands are left over once every token has been consumed.
    MalformedExpression {
        /// Number of values on the stack when the problem was detected.
        remaining: usize,
    },
    /// An operator other than `+`, `-`, `*` or `/` reached the evaluator.
    UnknownOperator {
        /// The offending symbol.
        symbol: char,
    },
    /// A number token cannot be represented exactly as `f64`.
    LiteralTooLarge {
        /// The number carried by the token.
        value: u64,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression { remaining } => {
                write!(f, "Malformed expression: {remaining} value(s) left instead of one.")
            },
            Self::UnknownOperator { symbol } => {
                write!(f, "Unknown operator: '{symbol}'. Only + - * / are supported.")
            },
            Self::LiteralTooLarge { value } => {
                write!(f, "Literal {value} is too large to compute with exactly.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
