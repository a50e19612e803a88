use std::fmt::Write;

use crate::{
    engine::{evaluator::Step, lexer::Operator},
    util::num::{format_number, split_decimal},
};

/// Width of the right-justified column used by the stacked layout.
pub const COLUMN_WIDTH: usize = 30;
/// Number of dashes in the rule between the operands and the result.
pub const RULE_WIDTH: usize = 39;
/// Gap between the operator and the second operand.
const OPERATOR_GAP: &str = "          ";

/// Renders one step as a header line followed by a breakdown.
///
/// Division is described in a single sentence. The other operators are laid
/// out the way they are worked by hand: the operand with the longer integer
/// part on top, both operands padded with trailing zeros to the same number
/// of decimals, then a rule and the result, every line right-justified in a
/// [`COLUMN_WIDTH`] column. Multiplication is shown as `x`.
///
/// Putting the longer operand on top only affects the display; it does not
/// change the recorded result.
///
/// # Example
/// ```
/// use mathgenius::engine::{evaluator::Step, explain::explain, lexer::Operator};
///
/// let step = Step { left: 6.0, right: 3.0, op: Operator::Div, result: 2.0 };
/// assert_eq!(explain(&step),
///            "The computation of the problem: 6.0 / 3.0 = 2.0\n\n\
///             The division of 6.0 and 3.0 is 2.0\n\n");
/// ```
#[must_use]
pub fn explain(step: &Step) -> String {
    let left = format_number(step.left);
    let right = format_number(step.right);
    let result = format_number(step.result);

    let mut text = format!("The computation of the problem: {left} {} {right} = {result}\n\n",
                           step.op);

    if step.op == Operator::Div {
        let _ = writeln!(text, "The division of {left} and {right} is {result}");
    } else {
        for line in stacked_layout(left, right, step.op, result) {
            let _ = writeln!(text, "{line:>width$}", width = COLUMN_WIDTH);
        }
    }

    text.push('\n');
    text
}

/// Builds the four lines of the hand-worked layout, before justification.
fn stacked_layout(left: String, right: String, op: Operator, result: String) -> [String; 4] {
    let (mut top, mut bottom) = if split_decimal(&left).0.len() < split_decimal(&right).0.len() {
        (right, left)
    } else {
        (left, right)
    };

    let top_decimals = split_decimal(&top).1.len();
    let bottom_decimals = split_decimal(&bottom).1.len();
    if top_decimals < bottom_decimals {
        pad_decimals(&mut top, bottom_decimals - top_decimals);
    } else {
        pad_decimals(&mut bottom, top_decimals - bottom_decimals);
    }

    let symbol = match op {
        Operator::Mul => 'x',
        other => other.symbol(),
    };

    [top, format!("{symbol}{gap}{bottom}", gap = OPERATOR_GAP), "-".repeat(RULE_WIDTH), result]
}

/// Appends trailing zeros to a decimal number; non-finite text is left alone.
fn pad_decimals(number: &mut String, zeros: usize) {
    if number.contains('.') {
        number.push_str(&"0".repeat(zeros));
    }
}

/// Joins the explanations of all steps into one numbered report.
///
/// Steps are numbered from 1 in evaluation order. An empty slice yields an
/// empty report.
///
/// # Example
/// ```
/// use mathgenius::engine::{evaluator::Step, explain::report, lexer::Operator};
///
/// let steps = [Step { left: 8.0, right: 4.0, op: Operator::Div, result: 2.0 },
///              Step { left: 2.0, right: 2.0, op: Operator::Div, result: 1.0 }];
/// let text = report(&steps);
///
/// assert!(text.starts_with("1. The computation of the problem: 8.0 / 4.0 = 2.0"));
/// assert!(text.contains("\n2. The computation of the problem: 2.0 / 2.0 = 1.0"));
/// assert!(report(&[]).is_empty());
/// ```
#[must_use]
pub fn report(steps: &[Step]) -> String {
    steps.iter()
         .enumerate()
         .fold(String::new(), |mut text, (index, step)| {
             let _ = write!(text, "{}. {}", index + 1, explain(step));
             text
         })
}
