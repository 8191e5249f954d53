use super::*;

use crate::sexpr;
use crate::syntax::{Parser, Tokenizer};


fn read_str(input: &str) -> Value {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input);
    read(&Parser::parse(tokenizer).unwrap())
}

fn sym(name: &str) -> Value {
    name.to_symbol_or_panic().into()
}

#[test]
fn int_literal() {
    assert_eq!(read_str("42"), sexpr![42.0]);
}

#[test]
fn decimal_literal() {
    assert_eq!(read_str("3.5"), sexpr![3.5]);
    assert_eq!(read_str("-12.25"), sexpr![-12.25]);
    assert_eq!(read_str("-7"), sexpr![-7.0]);
}

#[test]
fn symbol_literal() {
    assert_eq!(read_str("max"), sexpr![sym("max")]);
}

#[test]
fn sexpr_preserves_order() {
    assert_eq!(
        read_str("(+ 1 2 3)"),
        sexpr![sexpr![sym("+"), 1.0, 2.0, 3.0]]
    );
}

#[test]
fn nested_sexpr() {
    assert_eq!(
        read_str("(* (+ 1 1) 3)"),
        sexpr![sexpr![sym("*"), sexpr![sym("+"), 1.0, 1.0], 3.0]]
    );
}

#[test]
fn empty_sexpr() {
    assert_eq!(read_str("()"), sexpr![Value::empty_sexpr()]);
}

#[test]
fn out_of_range_literal_is_bad_number() {
    // f64 overflows to infinity on parse; the reader rejects it.
    let literal = format!("1{}", "0".repeat(400));
    match read_str(&literal) {
        Value::SExpr(children) => {
            assert_eq!(children.len(), 1);
            assert!(matches!(
                children[0],
                Value::Error(EvalErr::BadNumber(_))
            ));
        }
        value @ _ => panic!("{}", value),
    }
}

#[test]
fn well_formed_literal_matches_float_parse() {
    for literal in &["0", "7", "3.50", "-2.125", "-0.5"] {
        assert_eq!(
            read_str(literal),
            sexpr![literal.parse::<f64>().unwrap()]
        );
    }
}
