/// Tokenizer errors.
///
/// Raised before any arithmetic takes place, when the input cannot be turned
/// into tokens.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while the postfix sequence is reduced, such as operand underflow,
/// leftover operands or an unsupported operator symbol.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of a single calculation.
pub enum Error {
    /// The input could not be tokenized.
    Parse(ParseError),
    /// The tokens could not be evaluated.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
