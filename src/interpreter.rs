//! Evaluation of Value trees.
//!
//! Reduces a tree to a single Number or Error value: numbers
//! self-evaluate, an SExpr applies the operator named by its first child
//! to its left-to-right-evaluated operands. The first operand to reduce
//! to an error short-circuits the whole form.

use crate::builtin::{Func, BUILTINS};
use crate::lang_err::EvalErr;
use crate::value::Value;

pub type Args = Vec<Value>;
pub type Ret = Result<Value, EvalErr>;


/// Evaluates a Value tree; the result is always Number or Error.
pub fn eval(value: &Value) -> Value {
    match eval_value(value) {
        Ok(result) => result,
        Err(err) => Value::Error(err),
    }
}

fn eval_value(value: &Value) -> Ret {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::Error(err) => Err(err.clone()),
        // A symbol only has meaning in operator position.
        Value::Symbol(_) => Err(EvalErr::BadOperator(Box::new(value.clone()))),
        Value::SExpr(children) => {
            let (car, cdr) = match children.split_first() {
                Some(pair) => pair,
                None => return Err(EvalErr::BadOperator(Box::new(value.clone()))),
            };

            let builtin = match car {
                Value::Symbol(symbol) => BUILTINS.get(symbol.as_str()),
                _ => None,
            };
            match builtin {
                Some(builtin) => builtin.call(evlis(cdr)?),
                None => Err(EvalErr::BadOperator(Box::new(car.clone()))),
            }
        }
    }
}

/// Evaluates operands left to right, stopping at the first error.
fn evlis(operands: &[Value]) -> Result<Args, EvalErr> {
    let mut args = Args::with_capacity(operands.len());
    for operand in operands {
        args.push(eval_value(operand)?);
    }
    Ok(args)
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
