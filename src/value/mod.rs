pub mod symbol;
pub mod value;


pub use symbol::{Symbol, SymbolError, ToSymbol};
pub use value::Value;
