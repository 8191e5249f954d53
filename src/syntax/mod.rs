// Public exports.
pub use parse_node::{NodeKind, ParseNode};
pub use parser::{ParseError, ParseErrorReason, Parser};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

// Public mods.
pub mod parse_node;
pub mod parser;
pub mod token;

#[cfg(feature = "cli")]
pub mod cli_helper;
#[cfg(feature = "cli")]
pub mod cli_stream;

// Private mods.
mod tokenizer;
