/*!
# Rust Language Module

This Rust module provides lexical analysis of Sally Forth. There is no
parser: the interpreter executes tokens as soon as they are lexed.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use token::Token;

/// Input line a token came from, if known.
pub type LineNumber = Option<usize>;

#[cfg(test)]
mod tests;
