//! # Sally Forth
//!
//! Command line front end. See the library documentation for the language.
//!

fn main() {
    sally::term::main();
}
