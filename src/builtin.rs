//! Table of built-in operators.

use lazy_static::lazy_static;

use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

use crate::interpreter::{Args, Ret};
use crate::lang_err::{EvalErr, ExpectedCount};
use crate::value::Value;

macro_rules! builtins {
    [$($n:tt : $x:expr),*$(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert(
                    $n,
                    BuiltIn {
                        name: stringify!($x),
                        fun: $x,
                    },
                );
            )*
            m
        }
    };
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "+": add, "add": add,
        "-": sub, "sub": sub,
        "*": mul, "mul": mul,
        "/": div, "div": div,
        "^": pow, "pow": pow,
        "min": min,
        "max": max,
    ];
}

pub trait Func {
    fn call(&self, args: Args) -> Ret;
}

pub struct BuiltIn {
    name: &'static str,
    fun: fn(Args) -> Ret,
}

impl Func for BuiltIn {
    fn call(&self, args: Args) -> Ret {
        (self.fun)(args)
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.fun)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


fn number(value: &Value) -> Result<f64, EvalErr> {
    f64::try_from(value).map_err(|_| EvalErr::InvalidArgument {
        given: Box::new(value.clone()),
        expected: Cow::Borrowed("a number"),
    })
}

fn at_least(args: &Args, minimum: usize) -> Result<(), EvalErr> {
    if args.len() < minimum {
        return err!(WrongArgumentCount {
            given: args.len(),
            expected: ExpectedCount::AtLeast(minimum),
        });
    }
    Ok(())
}

fn add(args: Args) -> Ret {
    at_least(&args, 1)?;

    let mut curr = number(&args[0])?;
    for arg in &args[1..] {
        curr += number(arg)?;
    }
    Ok(curr.into())
}

fn sub(args: Args) -> Ret {
    at_least(&args, 1)?;

    let first = number(&args[0])?;
    // Unary form negates.
    if args.len() == 1 {
        return Ok((-first).into());
    }

    let mut curr = first;
    for arg in &args[1..] {
        curr -= number(arg)?;
    }
    Ok(curr.into())
}

fn mul(args: Args) -> Ret {
    at_least(&args, 2)?;

    let mut curr = number(&args[0])?;
    for arg in &args[1..] {
        curr *= number(arg)?;
    }
    Ok(curr.into())
}

fn div(args: Args) -> Ret {
    at_least(&args, 2)?;

    let mut curr = number(&args[0])?;
    for arg in &args[1..] {
        let divisor = number(arg)?;
        if divisor == 0.0 {
            return err!(DivideByZero);
        }
        curr /= divisor;
    }
    Ok(curr.into())
}

fn pow(args: Args) -> Ret {
    at_least(&args, 2)?;

    let mut curr = number(&args[0])?;
    for arg in &args[1..] {
        curr = curr.powf(number(arg)?);
    }
    Ok(curr.into())
}

fn min(args: Args) -> Ret {
    at_least(&args, 1)?;

    let mut curr = number(&args[0])?;
    for arg in &args[1..] {
        curr = curr.min(number(arg)?);
    }
    Ok(curr.into())
}

fn max(args: Args) -> Ret {
    at_least(&args, 1)?;

    let mut curr = number(&args[0])?;
    for arg in &args[1..] {
        curr = curr.max(number(arg)?);
    }
    Ok(curr.into())
}
