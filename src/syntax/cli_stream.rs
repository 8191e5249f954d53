use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use super::token::Token;
use super::tokenizer::Tokenizer;


/// Interactive line source yielding the tokens of one complete
/// expression group at a time.
///
/// Continuation prompts are driven by the tokenizer's paren depth, so a
/// form can span multiple physical lines. ^C abandons a partial form;
/// ^D ends the stream.
pub struct CliStream {
    editor: Editor<CliHelper>,
    tokenizer: Tokenizer,

    curr_expr: String,
}

impl CliStream {
    pub fn new() -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new()));

        CliStream {
            editor,
            tokenizer: Tokenizer::new(),

            curr_expr: String::default(),
        }
    }
}


impl Iterator for CliStream {
    type Item = Vec<Token>;

    fn next(&mut self) -> Option<Vec<Token>> {
        loop {
            let line = if self.tokenizer.depth() == 0 {
                self.editor.readline("> ")
            } else {
                self.editor
                    .readline(&format!("..{}", "  ".repeat(self.tokenizer.depth())))
            };

            match line {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr += " ";
                    }
                    self.curr_expr += &line;
                    self.tokenizer.tokenize(&line);

                    if self.tokenizer.depth() == 0 {
                        let tokens = (&mut self.tokenizer).collect::<Vec<_>>();
                        self.editor.add_history_entry(self.curr_expr.as_str());
                        self.curr_expr = String::default();
                        if tokens.is_empty() {
                            continue;
                        }
                        return Some(tokens);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Enable ^C to cancel an expression mid-parse.
                    self.tokenizer.clear();
                    self.curr_expr = String::default();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.tokenizer.clear();
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.tokenizer.clear();
                    self.curr_expr = String::default();
                    continue;
                }
            }
        }
    }
}
