//! sxlang is a small S-expression arithmetic language.
//!
//! A line of input is tokenized and parsed into a tagged parse tree,
//! converted by the reader into a [`Value`](value::Value) tree, and reduced
//! by the interpreter to a single number or a propagated error value.
//!
//! Evaluation failures are data, not unwound control flow: every malformed
//! or ill-typed expression reduces to a `Value::Error` and the REPL moves
//! on to the next line.

#[macro_use]
pub mod lang_err;
#[macro_use]
pub mod value;

pub mod builtin;
pub mod interpreter;
pub mod reader;
pub mod syntax;

pub mod prelude {
    pub use crate::builtin::{BuiltIn, Func, BUILTINS};
    pub use crate::interpreter::eval;
    pub use crate::lang_err::{EvalErr, ExpectedCount};
    pub use crate::reader::read;
    pub use crate::syntax::{
        NodeKind, ParseError, ParseNode, Parser, Token, TokenKind, Tokenizer,
    };
    pub use crate::value::{Symbol, ToSymbol, Value};
    // Macros.
    pub use crate::{err, sexpr};
}
