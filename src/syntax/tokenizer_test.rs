use super::*;


fn kinds(input: &str) -> Vec<TokenKind> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input);
    tokenizer.map(|info| info.token).collect()
}

fn atom(text: &str) -> TokenKind {
    TokenKind::Atom(text.to_string())
}

#[test]
fn basic_expr() {
    assert_eq!(
        kinds("(+ 1 2)"),
        vec![
            TokenKind::LeftParen,
            atom("+"),
            atom("1"),
            atom("2"),
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn no_whitespace_around_parens() {
    assert_eq!(
        kinds("(min(max 1 2)3)"),
        vec![
            TokenKind::LeftParen,
            atom("min"),
            TokenKind::LeftParen,
            atom("max"),
            atom("1"),
            atom("2"),
            TokenKind::RightParen,
            atom("3"),
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn depth_across_lines() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize("(+ 1 (");
    assert_eq!(tokenizer.depth(), 2);

    tokenizer.tokenize("* 2 3)");
    assert_eq!(tokenizer.depth(), 1);

    tokenizer.tokenize(")");
    assert_eq!(tokenizer.depth(), 0);
}

#[test]
fn depth_does_not_underflow() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize("))");
    assert_eq!(tokenizer.depth(), 0);
}

#[test]
fn clear_resets_state() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize("(+ 1");
    tokenizer.clear();

    assert_eq!(tokenizer.depth(), 0);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn token_positions() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize("(add 1\n 2)");
    let tokens = tokenizer.collect::<Vec<_>>();

    assert_eq!((tokens[0].line, tokens[0].col), (0, 0));
    assert_eq!((tokens[1].line, tokens[1].col), (0, 1));
    assert_eq!((tokens[3].line, tokens[3].col), (1, 1));
}
