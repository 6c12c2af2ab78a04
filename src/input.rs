//! User input handling: turning a command line into tokens.

pub mod lexer;

pub use lexer::{LexError, Token, TokenClass, tokenize};
