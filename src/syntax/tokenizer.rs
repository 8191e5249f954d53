//! Module for breaking input text into tokens.

use std::collections::VecDeque;

use super::token::{Token, TokenKind};


/// Accumulates tokens from string-like input and hands them out as an
/// Iterator.
///
/// Tracks paren depth across inputs so interactive callers can tell
/// whether an expression is still open and prompt for continuation lines.
pub struct Tokenizer {
    depth: usize,
    line_count: usize,
    tokens: VecDeque<Token>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            depth: 0,
            line_count: 0,
            tokens: Default::default(),
        }
    }

    pub fn clear(&mut self) {
        self.depth = 0;
        self.tokens.clear();
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn tokenize<S: AsRef<str>>(&mut self, input: S) {
        for line in input.as_ref().split('\n') {
            self.tokenize_line(line);
        }
    }

    fn tokenize_line(&mut self, line: &str) {
        let mut start: usize = 0;
        let mut empty = true;
        for (i, c) in line.char_indices() {
            if c.is_whitespace() {
                if !empty {
                    self.push_atom(&line[start..i], start);
                    empty = true;
                }
                continue;
            }

            match c {
                '(' | ')' => {
                    if !empty {
                        self.push_atom(&line[start..i], start);
                        empty = true;
                    }

                    let token = match c {
                        '(' => {
                            self.depth += 1;
                            TokenKind::LeftParen
                        }
                        ')' => {
                            self.depth = self.depth.saturating_sub(1);
                            TokenKind::RightParen
                        }
                        _ => panic!(),
                    };
                    self.tokens.push_back(Token {
                        token,
                        line: self.line_count,
                        col: i,
                    });
                }
                _ => {
                    if empty {
                        empty = false;
                        start = i;
                    }
                }
            }
        }

        // EOL handling.
        if !empty {
            self.push_atom(&line[start..], start);
        }

        self.line_count += 1;
    }

    fn push_atom(&mut self, atom: &str, start: usize) {
        self.tokens.push_back(Token {
            token: TokenKind::Atom(atom.to_string()),
            line: self.line_count,
            col: start,
        });
    }
}


impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
