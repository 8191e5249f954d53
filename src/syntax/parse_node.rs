//! Generic tagged parse-tree node handed from the grammar to the reader.

use std::fmt;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// Top-level node covering all expressions of one input.
    Root,
    /// Parenthesized list; children include the bracket lexemes.
    Sexpr,
    /// Unsigned integer literal leaf.
    Int,
    /// Signed and/or decimal literal; children are its lexeme parts.
    Number,
    /// Operator token leaf.
    Symbol,
    /// Raw structural text: brackets, sign, integer/fraction parts.
    Lexeme,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseNode {
    kind: NodeKind,
    text: String,
    children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::default(),
            children: Vec::new(),
        }
    }

    pub fn leaf<S: AsRef<str>>(kind: NodeKind, text: S) -> Self {
        Self {
            kind,
            text: text.as_ref().to_string(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: ParseNode) {
        self.children.push(child);
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn children(&self) -> &[ParseNode] {
        self.children.as_slice()
    }

    /// Structural bracket lexemes are present in Sexpr children for
    /// fidelity to the surface syntax; content consumers skip them.
    pub fn is_bracket(&self) -> bool {
        self.kind == NodeKind::Lexeme && (self.text == "(" || self.text == ")")
    }
}


impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            write!(f, "{:?}:{}", self.kind, self.text)
        } else {
            write!(f, "{:?}(", self.kind)?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")
        }
    }
}
