use mathgenius::{
    Calculator, calculate,
    engine::{
        evaluator::{Step, evaluate},
        lexer::{Operator, Token},
    },
    error::{Error, EvalError, ParseError},
};

fn value_of(src: &str) -> f64 {
    calculate(src).unwrap_or_else(|e| panic!("{src:?} failed: {e}")).value
}

fn assert_value(src: &str, expected: f64) {
    let value = value_of(src);
    assert!(value == expected, "{src:?} gave {value}, expected {expected}");
}

fn assert_failure(src: &str) -> Error {
    match calculate(src) {
        Ok(calculation) => {
            panic!("{src:?} succeeded with {} but was expected to fail", calculation.value)
        },
        Err(e) => e,
    }
}

#[test]
fn single_digit_operations() {
    for a in 0..10_u32 {
        for b in 0..10_u32 {
            let (x, y) = (f64::from(a), f64::from(b));
            assert_value(&format!("{a}+{b}"), x + y);
            assert_value(&format!("{a}-{b}"), x - y);
            assert_value(&format!("{a}*{b}"), x * y);
            if b != 0 {
                let expected = ((x / y) * 1000.0 + 0.5).floor() / 1000.0;
                assert_value(&format!("{a}/{b}"), expected);
            }
        }
    }
}

#[test]
fn division_results() {
    assert_value("6/3", 2.0);
    assert_value("7/2", 3.5);
    assert_value("2/3", 0.667);
    assert_value("1/3", 0.333);
}

#[test]
fn precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("10-6/2", 7.0);
    assert_value("1+2*3-4/2", 5.0);
}

#[test]
fn left_associativity() {
    assert_value("8-3-2", 3.0);
    assert_value("8/4/2", 1.0);
    assert_value("2*6/3", 4.0);
    assert_value("9-4+1", 6.0);
}

#[test]
fn multi_digit_numbers() {
    assert_value("12+8", 20.0);
    assert_value("100*25", 2500.0);
    assert_value("007+3", 10.0);
}

#[test]
fn whitespace_is_skipped() {
    assert_value(" 2 + 3 * 4 ", 14.0);
    assert_value("8\t-\n3", 5.0);
}

#[test]
fn negative_results() {
    assert_value("3-12", -9.0);
    assert_value("1-2*3", -5.0);
}

#[test]
fn division_by_zero_propagates() {
    assert!(value_of("1/0").is_infinite());
    assert!(value_of("0/0").is_nan());
    assert!(value_of("5-1/0").is_sign_negative());
}

#[test]
fn huge_finite_results_stay_finite() {
    let factors = vec!["9007199254740991"; 19].join("*");
    let expected = (0..19).fold(1.0_f64, |acc, _| acc * 9_007_199_254_740_991.0) * 1000.0;

    let value = value_of(&format!("{factors}*1000"));
    assert!(expected.is_finite());
    assert!(value == expected, "{value} != {expected}");
}

#[test]
fn whole_results_beyond_exact_integers_are_untouched() {
    assert_value("9007199254740991*1000", 9_007_199_254_740_991.0 * 1000.0);
    assert_value("100000000*1000000000+159410", 100_000_000_000_159_410.0);
}

#[test]
fn inexact_number_tokens_are_rejected() {
    let postfix = [Token::Number(u64::MAX), Token::Number(1), Token::Operator(Operator::Add)];

    assert_eq!(evaluate(&postfix),
               Err(EvalError::LiteralTooLarge { value: u64::MAX }));
}

#[test]
fn steps_follow_evaluation_order() {
    let calculation = calculate("2+3*4").unwrap();

    assert_eq!(calculation.steps,
               vec![Step { left: 3.0, right: 4.0, op: Operator::Mul, result: 12.0 },
                    Step { left: 2.0, right: 12.0, op: Operator::Add, result: 14.0 }]);
}

#[test]
fn one_step_per_operator() {
    assert_eq!(calculate("5").unwrap().steps.len(), 0);
    assert_eq!(calculate("1+2+3+4").unwrap().steps.len(), 3);
    assert_eq!(calculate("8-3-2").unwrap().steps[0].result, 5.0);
}

#[test]
fn steps_keep_unrounded_results() {
    let calculation = calculate("2/3").unwrap();
    assert_eq!(calculation.value, 0.667);
    assert_eq!(calculation.steps[0].result, 2.0 / 3.0);
}

#[test]
fn trailing_operator_is_malformed() {
    assert!(matches!(assert_failure("2++"),
                     Error::Eval(EvalError::MalformedExpression { .. })));
    assert!(matches!(assert_failure("2+"),
                     Error::Eval(EvalError::MalformedExpression { remaining: 1 })));
}

#[test]
fn leading_operator_is_malformed() {
    assert!(matches!(assert_failure("-3"),
                     Error::Eval(EvalError::MalformedExpression { remaining: 1 })));
}

#[test]
fn missing_operator_is_malformed() {
    assert_eq!(assert_failure("2 3"),
               Error::Eval(EvalError::MalformedExpression { remaining: 2 }));
}

#[test]
fn empty_input_is_malformed() {
    assert_eq!(assert_failure(""),
               Error::Eval(EvalError::MalformedExpression { remaining: 0 }));
    assert_eq!(assert_failure("   "),
               Error::Eval(EvalError::MalformedExpression { remaining: 0 }));
}

#[test]
fn unknown_operator_is_reported() {
    assert_eq!(assert_failure("2%3"),
               Error::Eval(EvalError::UnknownOperator { symbol: '%' }));
    assert_eq!(assert_failure("2^3+1"),
               Error::Eval(EvalError::UnknownOperator { symbol: '^' }));
}

#[test]
fn oversized_literal_is_rejected() {
    assert_eq!(assert_failure("1+99999999999999999999"),
               Error::Parse(ParseError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                                          position: 2, }));
    assert!(matches!(assert_failure("9007199254740992"),
                     Error::Parse(ParseError::LiteralTooLarge { position: 0, .. })));
    assert_value("9007199254740991-9007199254740990", 1.0);
}

#[test]
fn errors_display_their_cause() {
    assert_eq!(assert_failure("2%3").to_string(),
               "Unknown operator: '%'. Only + - * / are supported.");
    assert_eq!(assert_failure("2 3").to_string(),
               "Malformed expression: 2 value(s) left instead of one.");
}

#[test]
fn repeated_calculations_are_identical() {
    let first = calculate("12+8*3-4/2").unwrap();
    let second = calculate("12+8*3-4/2").unwrap();

    assert_eq!(first, second);
    assert_eq!(first.report(), second.report());
}

#[test]
fn calculator_reports_only_the_latest_calculation() {
    let mut calculator = Calculator::new();
    assert!(calculator.explanations_string().is_empty());
    assert!(calculator.last().is_none());

    assert_eq!(calculator.calculate("2+3*4").unwrap(), 14.0);
    let report = calculator.explanations_string();
    assert!(report.contains("1. The computation of the problem: 3.0 * 4.0 = 12.0"));
    assert!(report.contains("2. The computation of the problem: 2.0 + 12.0 = 14.0"));

    assert_eq!(calculator.calculate("6/3").unwrap(), 2.0);
    let report = calculator.explanations_string();
    assert!(report.starts_with("1. The computation of the problem: 6.0 / 3.0 = 2.0"));
    assert!(!report.contains("2. "));
}

#[test]
fn calculator_forgets_after_failure() {
    let mut calculator = Calculator::new();
    calculator.calculate("1+1").unwrap();

    assert!(calculator.calculate("1+").is_err());
    assert!(calculator.explanations_string().is_empty());
    assert!(calculator.last().is_none());
}
