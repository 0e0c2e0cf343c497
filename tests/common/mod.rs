#![allow(dead_code)]

use sally::mach::{Exit, Reader, Runtime, TokenQueue};

/// Runs a whole program and returns what it printed.
pub fn exec(program: &str) -> String {
    exec_all(program).0
}

/// Runs a whole program. Returns the output, the diagnostics and how the
/// session ended.
pub fn exec_all(program: &str) -> (String, String, Exit) {
    let mut runtime = Runtime::new(vec![], vec![]);
    let mut source = TokenQueue::new(Reader::new(program.as_bytes()));
    let exit = runtime.execute(&mut source);
    let out = String::from_utf8_lossy(runtime.out()).into_owned();
    let diag = String::from_utf8_lossy(runtime.diag()).into_owned();
    (out, diag, exit)
}

/// The report printed when a session ends.
pub fn report(program: &str) -> String {
    exec_all(program).2.to_string()
}
