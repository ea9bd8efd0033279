#![allow(nonstandard_style)]

use approx::assert_relative_eq;
use expreval::*;

fn no_variables(name: &str) -> Result<f64> {
    Err(CalcError::variable_resolution(name.into()))
}

fn result(text: &str) -> Result<f64> {
    Evaluator::new(no_variables).evaluate(text)
}

fn value(text: &str) -> f64 {
    result(text).unwrap()
}

#[test]
fn basic_operations() {
    assert_relative_eq!(value("3 + 4"), 7.0, epsilon = 1e-3);
    assert_relative_eq!(value("3 - 4"), -1.0, epsilon = 1e-3);
    assert_relative_eq!(value("3 * 4"), 12.0, epsilon = 1e-3);
    assert_relative_eq!(value("8 / 4"), 2.0, epsilon = 1e-3);
    assert_relative_eq!(value("3 ^ 2"), 9.0, epsilon = 1e-3);
}

#[test]
fn operations_match_direct_arithmetic() {
    let pairs = [(1.5, 2.25), (10.0, 3.0), (0.5, 8.0), (7.0, 0.25)];
    for (a, b) in pairs {
        assert_relative_eq!(value(&format!("{} + {}", a, b)), a + b, epsilon = 1e-3);
        assert_relative_eq!(value(&format!("{} - {}", a, b)), a - b, epsilon = 1e-3);
        assert_relative_eq!(value(&format!("{} * {}", a, b)), a * b, epsilon = 1e-3);
        assert_relative_eq!(value(&format!("{} / {}", a, b)), a / b, epsilon = 1e-3);
        assert_relative_eq!(value(&format!("{} ^ {}", a, b)), a.powf(b), epsilon = 1e-3);
    }
}

#[test]
fn parentheses_override_precedence() {
    assert_relative_eq!(value("(3 + 4) * 2"), 14.0, epsilon = 1e-3);
    assert_relative_eq!(value("3 + 4 * 2"), 11.0, epsilon = 1e-3);
    assert_relative_eq!(value("((1 + 2) * (3 + 4))"), 21.0, epsilon = 1e-3);
}

#[test]
fn precedence_ladder() {
    assert_relative_eq!(value("2 + 3 * 4 ^ 2"), 50.0, epsilon = 1e-3);
    assert_relative_eq!(value("2 * 3 ^ 2"), 18.0, epsilon = 1e-3);
}

#[test]
fn equal_precedence_associates_left() {
    assert_relative_eq!(value("8 - 3 - 2"), 3.0, epsilon = 1e-3);
    assert_relative_eq!(value("16 / 4 / 2"), 2.0, epsilon = 1e-3);
    assert_relative_eq!(value("2 ^ 3 ^ 2"), 64.0, epsilon = 1e-3);
}

#[test]
fn fully_parenthesized_forms_agree() {
    assert_relative_eq!(value("((8 - 3) - 2)"), value("8 - 3 - 2"), epsilon = 1e-3);
    assert_relative_eq!(value("((2 ^ 3) ^ 2)"), value("2 ^ 3 ^ 2"), epsilon = 1e-3);
    assert_relative_eq!(value("(2 + (3 * (4 ^ 2)))"), value("2 + 3 * 4 ^ 2"), epsilon = 1e-3);
}

#[test]
fn functions() {
    assert_relative_eq!(value("sin(0)"), 0.0, epsilon = 1e-3);
    assert_relative_eq!(value("cos(0)"), 1.0, epsilon = 1e-3);
    assert_relative_eq!(value("tan(0)"), 0.0, epsilon = 1e-3);
    assert_relative_eq!(value("sqrt(4)"), 2.0, epsilon = 1e-3);
}

#[test]
fn functions_compose_with_operators() {
    assert_relative_eq!(value("2 * sqrt(9) + 1"), 7.0, epsilon = 1e-3);
    assert_relative_eq!(value("sqrt(sqrt(16))"), 2.0, epsilon = 1e-3);
    assert_relative_eq!(value("sin(cos(0))"), 1.0_f64.sin(), epsilon = 1e-3);
    assert_relative_eq!(value("sqrt(3 ^ 2 + 4 ^ 2)"), 5.0, epsilon = 1e-3);
}

#[test]
fn sqrt_of_a_negative_is_nan() {
    assert!(value("sqrt(0 - 1)").is_nan());
}

#[test]
fn single_number_and_bare_variable() {
    assert_relative_eq!(value("42"), 42.0, epsilon = 1e-3);
    assert_relative_eq!(value("3.25"), 3.25, epsilon = 1e-3);

    let mut evaluator = Evaluator::new(|_: &str| -> Result<f64> { Ok(5.0) });
    assert_relative_eq!(evaluator.evaluate("x").unwrap(), 5.0, epsilon = 1e-3);
}

#[test]
fn variables_in_expressions() {
    let mut evaluator = Evaluator::new(|_: &str| -> Result<f64> { Ok(5.0) });
    assert_relative_eq!(evaluator.evaluate("2 * x").unwrap(), 10.0, epsilon = 1e-3);
}

#[test]
fn variables_keep_their_first_value() {
    let mut values = [2.0, 100.0].into_iter();
    let mut evaluator = Evaluator::new(move |_: &str| -> Result<f64> {
        Ok(values.next().unwrap_or(0.0))
    });

    assert_relative_eq!(evaluator.evaluate("x + 1").unwrap(), 3.0, epsilon = 1e-3);
    assert_relative_eq!(evaluator.evaluate("x + 1").unwrap(), 3.0, epsilon = 1e-3);
}

#[test]
fn division_by_zero() {
    assert_eq!(result("3 / 0"), Err(CalcError::division_by_zero));
    assert_eq!(result("1 / (2 - 2)"), Err(CalcError::division_by_zero));
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(result("3 + (4 * 2"), Err(CalcError::mismatched_parenthesis));
    assert_eq!(result("3 + 4) * 2"), Err(CalcError::mismatched_parenthesis));
}

#[test]
fn malformed_expressions() {
    assert_eq!(result("3 +"), Err(CalcError::malformed_expression));
    assert_eq!(result("3 4"), Err(CalcError::malformed_expression));
}

#[test]
fn invalid_characters() {
    assert_eq!(result("3 $ 4"), Err(CalcError::invalid_character('$')));
}
