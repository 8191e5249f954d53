use std::fmt;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Atom(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub token: TokenKind,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            TokenKind::Atom(text) => write!(f, "{} @ ({}, {})", text, self.line, self.col),
            _ => write!(f, "{:?} @ ({}, {})", self.token, self.line, self.col),
        }
    }
}
