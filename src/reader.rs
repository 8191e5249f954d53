//! Module for converting parse trees into Value trees.
//!
//! A pure recursive-descent transform: each node is classified by its
//! kind, leaves become Number/Symbol values, composites become SExprs
//! built bottom-up in child order. No backtracking, no lookahead.

use crate::lang_err::EvalErr;
use crate::syntax::{NodeKind, ParseNode};
use crate::value::{ToSymbol, Value};


pub fn read(node: &ParseNode) -> Value {
    match node.kind() {
        NodeKind::Int | NodeKind::Number => read_number(node),
        NodeKind::Symbol => read_symbol(node),
        NodeKind::Root | NodeKind::Sexpr => read_sexpr(node),
        _ => EvalErr::UnexpectedNode(format!("{:?}", node.kind())).into(),
    }
}

fn read_number(node: &ParseNode) -> Value {
    // Signed/decimal literals arrive split into lexeme children;
    // reassemble before parsing.
    let literal = if node.kind() == NodeKind::Int {
        node.text().to_string()
    } else {
        node.children()
            .iter()
            .map(|child| child.text())
            .collect::<String>()
    };

    match literal.parse::<f64>() {
        // Out-of-range literals parse to infinities; reject rather than
        // letting non-finite numbers into evaluation.
        Ok(num) if num.is_finite() => Value::Number(num),
        _ => EvalErr::BadNumber(literal).into(),
    }
}

fn read_symbol(node: &ParseNode) -> Value {
    match node.text().to_symbol() {
        Ok(symbol) => symbol.into(),
        Err(err) => EvalErr::UnexpectedNode(format!("{:?}", err)).into(),
    }
}

fn read_sexpr(node: &ParseNode) -> Value {
    let mut sexpr = Value::empty_sexpr();
    for child in node.children() {
        if child.is_bracket() {
            continue;
        }
        sexpr.append(read(child));
    }
    sexpr
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
