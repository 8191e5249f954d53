use sxlang::prelude::*;


/// Runs the full pipeline over `input`, yielding one evaluated Value per
/// top-level expression.
pub fn results<S: AsRef<str>>(input: S) -> Vec<Value> {
    // Integration tests will call this multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input.as_ref());
    let root = Parser::parse(tokenizer).unwrap();

    match read(&root) {
        Value::SExpr(exprs) => exprs.iter().map(eval).collect(),
        value @ _ => panic!("{}", value),
    }
}

pub fn parse_error<S: AsRef<str>>(input: S) -> ParseError {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input.as_ref());
    Parser::parse(tokenizer).unwrap_err()
}
