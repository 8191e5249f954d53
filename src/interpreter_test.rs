use super::*;

use crate::lang_err::ExpectedCount;
use crate::sexpr;
use crate::value::ToSymbol;


fn sym(name: &str) -> Value {
    name.to_symbol_or_panic().into()
}

#[test]
fn number_self_evaluates() {
    assert_eq!(eval(&Value::Number(4.5)), Value::Number(4.5));
}

#[test]
fn error_self_propagates() {
    let err = Value::Error(EvalErr::DivideByZero);
    assert_eq!(eval(&err), err);
}

#[test]
fn standalone_symbol_is_bad_operator() {
    assert!(matches!(
        eval(&sym("+")),
        Value::Error(EvalErr::BadOperator(_))
    ));
}

#[test]
fn addition_folds() {
    assert_eq!(eval(&sexpr![sym("+"), 1.0, 2.0, 3.0]), Value::Number(6.0));
    assert_eq!(eval(&sexpr![sym("add"), 1.0, 2.0]), Value::Number(3.0));
}

#[test]
fn subtraction_folds() {
    assert_eq!(eval(&sexpr![sym("-"), 10.0, 1.0, 2.0]), Value::Number(7.0));
}

#[test]
fn unary_subtraction_negates() {
    assert_eq!(eval(&sexpr![sym("-"), 5.0]), Value::Number(-5.0));
}

#[test]
fn unary_multiplication_is_rejected() {
    assert_eq!(
        eval(&sexpr![sym("*"), 4.0]),
        Value::Error(EvalErr::WrongArgumentCount {
            given: 1,
            expected: ExpectedCount::AtLeast(2),
        })
    );
}

#[test]
fn division_by_zero() {
    assert_eq!(
        eval(&sexpr![sym("/"), 10.0, 0.0]),
        Value::Error(EvalErr::DivideByZero)
    );
}

#[test]
fn division_folds() {
    assert_eq!(eval(&sexpr![sym("/"), 12.0, 3.0, 2.0]), Value::Number(2.0));
}

#[test]
fn pow_folds() {
    assert_eq!(eval(&sexpr![sym("^"), 2.0, 10.0]), Value::Number(1024.0));
    assert_eq!(
        eval(&sexpr![sym("pow"), 4.0]),
        Value::Error(EvalErr::WrongArgumentCount {
            given: 1,
            expected: ExpectedCount::AtLeast(2),
        })
    );
}

#[test]
fn min_max_running_extremum() {
    assert_eq!(
        eval(&sexpr![sym("min"), 3.0, -1.0, 7.0]),
        Value::Number(-1.0)
    );
    assert_eq!(
        eval(&sexpr![sym("max"), 3.0, -1.0, 7.0]),
        Value::Number(7.0)
    );
}

#[test]
fn unrecognized_operator() {
    assert!(matches!(
        eval(&sexpr![sym("foo"), 1.0, 2.0]),
        Value::Error(EvalErr::BadOperator(_))
    ));
}

#[test]
fn empty_sexpr_is_bad_operator() {
    assert!(matches!(
        eval(&Value::empty_sexpr()),
        Value::Error(EvalErr::BadOperator(_))
    ));
}

#[test]
fn non_symbol_head_is_bad_operator() {
    assert!(matches!(
        eval(&sexpr![1.0, 2.0]),
        Value::Error(EvalErr::BadOperator(_))
    ));
}

#[test]
fn nested_evaluation() {
    let form = sexpr![sym("+"), 1.0, sexpr![sym("*"), 2.0, 3.0]];
    assert_eq!(eval(&form), Value::Number(7.0));
}

#[test]
fn operand_error_short_circuits() {
    // (bad) reduces to BadOperator; each operator must propagate it
    // unchanged rather than folding past it.
    let bad = sexpr![sym("foo")];
    let expected = eval(&bad);
    assert!(expected.is_err());

    for op in &["+", "-", "*", "^", "min", "max"] {
        let form = sexpr![sym(op), 10.0, bad.clone(), 2.0];
        assert_eq!(eval(&form), expected, "operator {}", op);
    }
}

#[test]
fn division_propagates_operand_error() {
    // A right-hand operand error must win over the left accumulator.
    let form = sexpr![sym("/"), 10.0, sexpr![sym("foo")]];
    assert!(matches!(
        eval(&form),
        Value::Error(EvalErr::BadOperator(_))
    ));
}

#[test]
fn first_error_wins() {
    let div_zero = sexpr![sym("/"), 1.0, 0.0];
    let bad_op = sexpr![sym("foo")];
    let form = sexpr![sym("+"), div_zero, bad_op];

    assert_eq!(eval(&form), Value::Error(EvalErr::DivideByZero));
}
