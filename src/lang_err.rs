//! Evaluation errors, represented as data rather than unwound control flow.
//!
//! An EvalErr ends up wrapped in a Value::Error, which propagates through
//! the fold loops of the interpreter without further evaluation. Callers
//! check results explicitly; nothing here panics or throws.

use std::borrow::Cow;
use std::fmt;

use self::EvalErr::*;
use self::ExpectedCount::*;
use crate::value::Value;


/// Creates an EvalErr wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::lang_err::EvalErr::$($kind)+)
    };
}


#[derive(Clone, Debug, PartialEq)]
pub enum EvalErr {
    Unknown,
    DivideByZero,
    BadOperator(Box<Value>),
    BadNumber(String),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    InvalidArgument {
        given: Box<Value>,
        expected: Cow<'static, str>,
    },
    UnexpectedNode(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}


impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unknown => write!(f, "Unknown error"),
            DivideByZero => write!(f, "Division by zero"),
            BadOperator(value) => write!(f, "Bad operator: {}", value),
            BadNumber(literal) => write!(f, "Bad number literal: \"{}\"", literal),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            UnexpectedNode(tag) => write!(f, "Unexpected parse node: {}", tag),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
            AtMost(maximum) => write!(f, "at most {}", maximum),
        };
    }
}
