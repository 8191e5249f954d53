//! Module for representing language values.

use std::convert::TryFrom;
use std::fmt;

use super::symbol::Symbol;
use crate::lang_err::EvalErr;


/// Creates a Value::SExpr from a sequence of Value-convertible elements.
#[macro_export]
macro_rules! sexpr {
    [$($elem:expr),*$(,)?] => {
        $crate::value::Value::SExpr(vec![$($elem.into()),*])
    };
}


/// Tagged result/AST type of the language.
///
/// A tree of Values is built bottom-up by the reader from one parsed input
/// line and consumed by the interpreter. A parent SExpr exclusively owns
/// its children; no sharing between Value trees.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Error(EvalErr),
    Symbol(Symbol),
    SExpr(Vec<Value>),
}

impl Value {
    pub fn empty_sexpr() -> Value {
        Value::SExpr(Vec::new())
    }

    /// Appends `child` as the new last element of an SExpr, preserving
    /// insertion order.
    pub fn append(&mut self, child: Value) {
        match self {
            Value::SExpr(children) => children.push(child),
            _ => panic!("append on non-composite value"),
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Writes this Value with the bracket pair supplied by the caller
    /// context. Display uses the default ( ) pair.
    pub fn fmt_expr(&self, f: &mut fmt::Formatter<'_>, open: char, close: char) -> fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{:.6}", num),
            Value::Error(err) => write!(f, "Error: {}", err),
            Value::Symbol(symbol) => write!(f, "{}", symbol),
            Value::SExpr(children) => {
                write!(f, "{}", open)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    child.fmt_expr(f, open, close)?;
                }
                write!(f, "{}", close)
            }
        }
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_expr(f, '(', ')')
    }
}

impl From<f64> for Value {
    fn from(num: f64) -> Self {
        Value::Number(num)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<EvalErr> for Value {
    fn from(err: EvalErr) -> Self {
        Value::Error(err)
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        if let Value::Number(num) = value {
            Ok(*num)
        } else {
            Err(())
        }
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
