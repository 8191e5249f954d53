use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::parser::SYMBOLS;


// Rustyline Helper for CliStream.
pub struct CliHelper {}

pub struct CliCandidate {
    symbol: &'static str,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {}
    }

    fn symbols_with_prefix(&self, prefix: &str) -> Vec<&'static str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        SYMBOLS
            .iter()
            .filter(|symbol| symbol.starts_with(prefix))
            .copied()
            .collect()
    }

    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if !c.is_alphabetic() && c != '_' {
                if i < pos {
                    start = i + 1;
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, end) = self.word_bounds(line, pos);
        let symbols = self.symbols_with_prefix(&line[start..end]);
        Ok((
            start,
            symbols
                .into_iter()
                .map(|symbol| CliCandidate { symbol })
                .collect(),
        ))
    }
}

impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.symbol
    }

    fn replacement(&self) -> &str {
        self.symbol
    }
}

impl Hinter for CliHelper {
    type Hint = String;
}

impl Highlighter for CliHelper {}
impl Validator for CliHelper {}
impl Helper for CliHelper {}
