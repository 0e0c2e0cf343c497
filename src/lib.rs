//! # Sally Forth
//!
//! A small stack language in the tradition of Forth. Programs are read a
//! line at a time and every word is executed as soon as it is read.
//!
//! Run a program file with `sally program.sal`, pipe one in with
//! `sally -`, or start `sally` with no arguments for an interactive
//! console. Type CTRL-D to end the session and CTRL-C to stop a runaway
//! loop. When the input runs out you get a report on the operand stack.
//! ```text
//! > 3 4 + . CR
//! 7
//! >
//! END OF PROGRAM
//! PARAMETER STACK EMPTY
//! ```
//!
//! The library can be driven directly with any `BufRead` as input and any
//! `Write` as output:
//! ```
//! use sally::mach::{Exit, Reader, Runtime, TokenQueue};
//!
//! let mut runtime = Runtime::new(vec![], vec![]);
//! let mut source = TokenQueue::new(Reader::new("2 3 * .".as_bytes()));
//! assert_eq!(runtime.execute(&mut source), Exit::EndOfProgram(0));
//! assert_eq!(runtime.out(), b"6");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
