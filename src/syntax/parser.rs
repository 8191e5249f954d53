//! Module for parsing tokens into a tagged parse tree.
//!
//! Implements the surface grammar:
//! ```text
//! int    := '0' | [1-9][0-9]*
//! number := '-'? int ('.' [0-9]+)?
//! symbol := '+' | '-' | '*' | '/' | '^'
//!         | "add" | "sub" | "mul" | "div" | "pow" | "min" | "max"
//! sexpr  := '(' expr* ')'
//! expr   := number | symbol | sexpr
//! repl   := expr*
//! ```
//! The produced tree keeps bracket lexemes as Sexpr children and splits
//! signed/decimal literals into their lexeme parts; downstream consumers
//! see the same node shapes the surface syntax had.

use std::fmt;

use super::parse_node::{NodeKind, ParseNode};
use super::token::{Token, TokenKind};

use self::ParseErrorReason::*;

const MAX_DEPTH: usize = 128;

/// Operator tokens accepted by the grammar.
pub const SYMBOLS: [&str; 12] = [
    "+", "-", "*", "/", "^", "add", "sub", "mul", "div", "pow", "min", "max",
];


pub struct Parser {
    current: Vec<ParseNode>,
    max_current_len: usize,

    exprs: Vec<ParseNode>,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            current: Default::default(),
            max_current_len: MAX_DEPTH,
            exprs: Default::default(),
        }
    }

    /// Consumes a token stream into a Root node holding one child per
    /// top-level expression.
    pub fn parse<I: IntoIterator<Item = Token>>(tokens: I) -> Result<ParseNode, ParseError> {
        let mut parser = Parser::new();
        for token in tokens {
            parser.parse_token(token)?;
        }
        parser.finish()
    }

    fn parse_token(&mut self, token: Token) -> Result<(), ParseError> {
        match &token.token {
            TokenKind::LeftParen => {
                if self.current.len() >= self.max_current_len {
                    return Err(ParseError {
                        reason: DepthOverflow,
                        token: Some(token),
                    });
                }
                let mut sexpr = ParseNode::new(NodeKind::Sexpr);
                sexpr.add_child(ParseNode::leaf(NodeKind::Lexeme, "("));
                self.current.push(sexpr);
            }
            TokenKind::RightParen => {
                let mut sexpr = match self.current.pop() {
                    Some(sexpr) => sexpr,
                    None => {
                        return Err(ParseError {
                            reason: UnmatchedClose,
                            token: Some(token),
                        });
                    }
                };
                sexpr.add_child(ParseNode::leaf(NodeKind::Lexeme, ")"));
                self.append(sexpr);
            }
            TokenKind::Atom(text) => match classify_atom(text) {
                Some(node) => self.append(node),
                None => {
                    return Err(ParseError {
                        reason: InvalidToken,
                        token: Some(token.clone()),
                    });
                }
            },
        }

        Ok(())
    }

    fn append(&mut self, node: ParseNode) {
        match self.current.last_mut() {
            Some(parent) => parent.add_child(node),
            None => self.exprs.push(node),
        }
    }

    fn finish(self) -> Result<ParseNode, ParseError> {
        if !self.current.is_empty() {
            return Err(ParseError {
                reason: UnclosedExpr,
                token: None,
            });
        }

        let mut root = ParseNode::new(NodeKind::Root);
        for expr in self.exprs {
            root.add_child(expr);
        }
        Ok(root)
    }
}


fn classify_atom(text: &str) -> Option<ParseNode> {
    if is_int(text) {
        return Some(ParseNode::leaf(NodeKind::Int, text));
    }
    if let Some(node) = scan_number(text) {
        return Some(node);
    }
    if SYMBOLS.contains(&text) {
        return Some(ParseNode::leaf(NodeKind::Symbol, text));
    }
    None
}

// int := '0' | [1-9][0-9]*
fn is_int(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some('0') => chars.next().is_none(),
        Some(c) if c.is_ascii_digit() => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

// number := '-'? int ('.' [0-9]+)?
//
// Plain unsigned integers never reach here; they classify as Int leaves.
fn scan_number(text: &str) -> Option<ParseNode> {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (Some("-"), rest),
        None => (None, text),
    };
    let (int_part, frac) = match rest.find('.') {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };

    if !is_int(int_part) {
        return None;
    }
    if let Some(frac) = frac {
        if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }

    let mut node = ParseNode::new(NodeKind::Number);
    if let Some(sign) = sign {
        node.add_child(ParseNode::leaf(NodeKind::Lexeme, sign));
    }
    node.add_child(ParseNode::leaf(NodeKind::Lexeme, int_part));
    if let Some(frac) = frac {
        node.add_child(ParseNode::leaf(NodeKind::Lexeme, "."));
        node.add_child(ParseNode::leaf(NodeKind::Lexeme, frac));
    }
    Some(node)
}


#[derive(Debug)]
pub enum ParseErrorReason {
    DepthOverflow,
    UnmatchedClose,
    UnclosedExpr,
    InvalidToken,
}

#[derive(Debug)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Option<Token>,
}

impl ParseError {
    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Parse Error] {:?}", self.reason)?;
        match &self.token {
            Some(token) => write!(f, ": {}", token),
            None => write!(f, " at end of input"),
        }
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
