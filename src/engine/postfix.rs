use tracing::debug;

use crate::engine::lexer::{Operator, Token};

/// Returns `true` if `op` binds strictly tighter than `top`.
///
/// When this is `false` the operator on the stack is emitted first, which
/// makes operators of equal precedence group from left to right.
const fn binds_tighter(op: Operator, top: Operator) -> bool {
    op.precedence() > top.precedence()
}

/// Reorders infix tokens into postfix (reverse Polish) order.
///
/// Numbers go straight to the output. Each operator first pops every stacked
/// operator that does not bind looser than itself, then is pushed. Whatever
/// remains on the stack is emitted last, top first.
///
/// The sequence is not validated here: consecutive operators or a leading
/// operator produce a postfix sequence that the evaluator will reject.
///
/// # Example
/// ```
/// use mathgenius::engine::{
///     lexer::{Operator, Token},
///     postfix::to_postfix,
/// };
///
/// // 2 + 3 * 4
/// let infix = [Token::Number(2),
///              Token::Operator(Operator::Add),
///              Token::Number(3),
///              Token::Operator(Operator::Mul),
///              Token::Number(4)];
///
/// assert_eq!(to_postfix(&infix),
///            vec![Token::Number(2),
///                 Token::Number(3),
///                 Token::Number(4),
///                 Token::Operator(Operator::Mul),
///                 Token::Operator(Operator::Add)]);
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Operator> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(_) => output.push(*token),
            Token::Operator(op) => {
                while let Some(&top) = operators.last() {
                    if binds_tighter(op, top) {
                        break;
                    }
                    operators.pop();
                    output.push(Token::Operator(top));
                }
                operators.push(op);
            },
        }
    }

    output.extend(operators.into_iter().rev().map(Token::Operator));

    debug!(infix = tokens.len(), postfix = output.len(), "converted to postfix");
    output
}
