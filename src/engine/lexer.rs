use logos::Logos;

use crate::{error::ParseError, util::num::MAX_SAFE_U64_INT};

/// A binary arithmetic operator.
///
/// Any character that is neither a digit nor whitespace lexes as an operator.
/// Characters outside `+ - * /` are kept verbatim in [`Operator::Unknown`] and
/// only rejected once they reach the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Any other symbol.
    Unknown(char),
}

impl Operator {
    /// Binding strength used when converting to postfix order.
    ///
    /// `+` and `-` bind with 1, `*` and `/` with 2, anything else with 0.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Unknown(_) => 0,
        }
    }

    /// The character this operator was written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Unknown(c) => c,
        }
    }
}

impl From<char> for Operator {
    fn from(c: char) -> Self {
        match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            other => Self::Unknown(other),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a lexical token of an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Non-negative integer literal, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(u64),
    /// A single operator character.
    #[regex(r"[^0-9 \t\r\n\f]", |lex| lex.slice().chars().next().map(Operator::from))]
    Operator(Operator),
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(u64)`: The parsed value if it is at most `2^53 - 1`.
/// - `None`: If the literal is larger.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse::<u64>().ok().filter(|value| *value <= MAX_SAFE_U64_INT)
}

/// Splits an expression into number and operator tokens.
///
/// A maximal run of digits becomes one [`Token::Number`]; every other
/// non-whitespace character becomes one [`Token::Operator`]. Whitespace is
/// skipped.
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] if a digit run cannot be
/// represented exactly.
///
/// # Example
/// ```
/// use mathgenius::engine::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("12+3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(12), Token::Operator(Operator::Add), Token::Number(3)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(ParseError::LiteralTooLarge { literal:  lexer.slice().to_string(),
                                                     position: lexer.span().start, });
        }
    }

    Ok(tokens)
}
