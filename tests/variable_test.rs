mod common;
use common::*;
use sally::mach::Exit;

#[test]
fn test_set_fetch_store() {
    assert_eq!(exec("10 X SET X @ 1 + X ! X @ . CR"), "11\n");
}

#[test]
fn test_set_twice_is_reported() {
    let (out, diag, exit) = exec_all("1 X SET\n2 X SET X @ .");
    assert_eq!(out, "1");
    assert_eq!(diag, "VARIABLE ALREADY SET; X\n");
    assert_eq!(exit, Exit::EndOfProgram(2));
}

#[test]
fn test_fetch_unbound_is_reported() {
    let (out, diag, exit) = exec_all("Y @ 5 .");
    assert_eq!(out, "5");
    assert_eq!(diag, "VARIABLE DOES NOT EXIST; Y\n");
    assert_eq!(exit, Exit::EndOfProgram(1));
}

#[test]
fn test_store_unbound_does_nothing() {
    let (out, diag, exit) = exec_all("3 Z ! 4 .");
    assert_eq!(out, "4");
    assert_eq!(diag, "");
    assert_eq!(exit, Exit::EndOfProgram(0));
}

#[test]
fn test_variable_prints_its_name() {
    assert_eq!(exec("5 V SET V ."), "V");
}

#[test]
fn test_numeral_spelling_names_a_variable() {
    assert_eq!(exec("1 007 SET 007 @ . SP 007 ."), "1 7");
    let (_, diag, _) = exec_all("1 007 SET 2 7 SET 7 @ .");
    assert_eq!(diag, "");
}
