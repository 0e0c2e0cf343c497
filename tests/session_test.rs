mod common;
use common::*;
use sally::mach::{Exit, Reader, Runtime, TokenQueue};

#[test]
fn test_blank_lines_are_skipped() {
    assert_eq!(exec("1 .\n\n   \n2 .\n"), "12");
}

#[test]
fn test_last_line_without_newline() {
    assert_eq!(exec("1 .\r\n2 ."), "12");
}

#[test]
fn test_fault_ends_session() {
    let (out, _, exit) = exec_all("1 .\n0 0 /\n2 .\n");
    assert_eq!(out, "1");
    assert_eq!(exit.to_string(), "DIVISION BY ZERO IN 2; /");
}

#[test]
fn test_session_state_survives_between_runs() {
    let mut runtime = Runtime::new(vec![], vec![]);
    let first = runtime.execute(&mut TokenQueue::new(Reader::new("3 X SET 9".as_bytes())));
    assert_eq!(first, Exit::EndOfProgram(1));
    let second = runtime.execute(&mut TokenQueue::new(Reader::new("X @ + .".as_bytes())));
    assert_eq!(second, Exit::EndOfProgram(0));
    assert_eq!(String::from_utf8_lossy(runtime.out()), "12");
}

#[test]
fn test_interrupt() {
    let mut runtime = Runtime::new(vec![], vec![]);
    runtime.interrupt();
    let exit = runtime.execute(&mut TokenQueue::new(Reader::new("DO 0 UNTIL".as_bytes())));
    assert_eq!(exit.to_string(), "BREAK IN 1");
}
