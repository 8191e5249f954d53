use log::debug;
use std::env;
use std::path::Path;

use sxlang::interpreter::eval;
use sxlang::reader::read;
use sxlang::syntax::cli_stream::CliStream;
use sxlang::syntax::{Parser, Tokenizer};
use sxlang::value::Value;


fn usage(args: &Vec<String>) {
    println!(
        "usage: {} [SRC_FILE]",
        Path::new(&args[0]).file_name().unwrap().to_string_lossy()
    );
    println!();
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    return match args.len() {
        1 => interactive_repl(),
        2 => file_repl(&args[1]),
        n => {
            usage(&args);
            Err(format!("Wrong argument count: {}, expected 0 or 1", n - 1))
        }
    };
}

fn interactive_repl() -> Result<(), String> {
    println!("sxlang v{}", env!("CARGO_PKG_VERSION"));
    println!("Press ^D to exit");
    println!();

    let mut stream = CliStream::new();
    while let Some(tokens) = stream.next() {
        let root = match Parser::parse(tokens) {
            Ok(root) => root,
            Err(err) => {
                println!(" {}", err);
                println!();
                continue;
            }
        };
        debug!("parse tree: {}", root);

        // One result per top-level expression.
        match read(&root) {
            Value::SExpr(exprs) => {
                for expr in &exprs {
                    println!("-> {}", eval(expr));
                }
            }
            value @ _ => println!("-> {}", eval(&value)),
        }
        println!();
    }
    Ok(())
}

fn file_repl(path: &str) -> Result<(), String> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return Err(format!("{}", err)),
    };

    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(&source);
    let root = match Parser::parse(tokenizer) {
        Ok(root) => root,
        Err(err) => return Err(format!(" {}", err)),
    };
    debug!("parse tree: {}", root);

    match read(&root) {
        Value::SExpr(exprs) => {
            for expr in &exprs {
                println!("> {}", expr);
                println!("-> {}", eval(expr));
                println!();
            }
        }
        value @ _ => println!("-> {}", eval(&value)),
    }
    Ok(())
}
