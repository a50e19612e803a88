/// The lexer module tokenizes expressions.
///
/// Turns the raw character sequence into integer and operator tokens. A run
/// of digits becomes one number; every other non-whitespace character
/// becomes an operator, even when the evaluator will later reject it.
pub mod lexer;
/// The postfix module reorders tokens for stack evaluation.
///
/// Implements the operator-stack conversion from infix to postfix order,
/// with `*` and `/` binding tighter than `+` and `-` and left-to-right
/// grouping at equal precedence.
pub mod postfix;
/// The evaluator module reduces postfix tokens to a value.
///
/// Applies each operator to the two values on top of the stack, records
/// every operation as a step and checks that exactly one value remains.
pub mod evaluator;
/// The explain module renders evaluated steps for people.
///
/// Produces the per-step breakdowns and the numbered report shown after a
/// calculation.
pub mod explain;
