use super::*;
use crate::lang::{ErrorCode, Token};

mod var_test;

type TestRuntime = Runtime<Vec<u8>, Vec<u8>>;

fn run(program: &str) -> (TestRuntime, Exit) {
    let mut runtime = Runtime::new(vec![], vec![]);
    let mut source = TokenQueue::new(Reader::new(program.as_bytes()));
    let exit = runtime.execute(&mut source);
    (runtime, exit)
}

fn output(runtime: &TestRuntime) -> String {
    String::from_utf8_lossy(runtime.out()).into_owned()
}

fn diagnostics(runtime: &TestRuntime) -> String {
    String::from_utf8_lossy(runtime.diag()).into_owned()
}

fn tokens(runtime: &TestRuntime) -> Vec<Token> {
    runtime.stack().iter().cloned().collect()
}

fn values(runtime: &TestRuntime) -> Vec<i64> {
    runtime.stack().iter().map(Token::value).collect()
}

fn fault(exit: &Exit) -> u16 {
    match exit {
        Exit::Fault(error) => error.code(),
        Exit::EndOfProgram(_) => 0,
    }
}

fn code(code: ErrorCode) -> u16 {
    code as u16
}
