/*!
## Rust Machine Module

This Rust module is the Sally Forth interpreter: the operand stack,
the symbol table, the token sources and the dispatch loop.

*/

mod control;
mod op;
mod operation;
mod runtime;
mod source;
mod stack;
mod symbol;

pub use op::Op;
pub use op::UNTIL;
pub use operation::Operation;
pub use runtime::Exit;
pub use runtime::Runtime;
pub use source::LineSource;
pub use source::Reader;
pub use source::Replay;
pub use source::TokenQueue;
pub use source::TokenSource;
pub use stack::Stack;
pub use symbol::Entry;
pub use symbol::SymbolTable;

#[cfg(test)]
mod tests;
