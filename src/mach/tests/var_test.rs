use super::*;

#[test]
fn test_set_and_fetch() {
    let (r, exit) = run("10 X SET X @");
    assert_eq!(values(&r), vec![10]);
    assert_eq!(exit, Exit::EndOfProgram(1));
}

#[test]
fn test_set_twice_is_reported_and_skipped() {
    let (r, exit) = run("10 X SET 20 X SET X @ .");
    assert_eq!(diagnostics(&r), "VARIABLE ALREADY SET; X\n");
    assert_eq!(output(&r), "10");
    assert_eq!(
        tokens(&r),
        vec![Token::Integer(20), Token::Variable("X".to_string())]
    );
    assert_eq!(exit, Exit::EndOfProgram(2));
}

#[test]
fn test_set_over_builtin_is_reported() {
    let (r, _) = run("1 .\"DUP\" SET");
    assert_eq!(diagnostics(&r), "VARIABLE ALREADY SET; DUP\n");
}

#[test]
fn test_fetch_unbound_is_reported_and_skipped() {
    let (r, exit) = run("Y @ 1 .");
    assert_eq!(diagnostics(&r), "VARIABLE DOES NOT EXIST; Y\n");
    assert_eq!(output(&r), "1");
    assert_eq!(tokens(&r), vec![Token::Word("Y".to_string())]);
    assert_eq!(exit, Exit::EndOfProgram(1));
}

#[test]
fn test_store() {
    let (r, _) = run("10 X SET 20 X ! X @");
    assert_eq!(values(&r), vec![20]);
}

#[test]
fn test_store_unbound_does_nothing() {
    let (r, exit) = run("5 Z !");
    assert!(r.stack().is_empty());
    assert!(diagnostics(&r).is_empty());
    assert!(!r.symbols().is_bound("Z"));
    assert_eq!(exit, Exit::EndOfProgram(0));
}

#[test]
fn test_store_over_builtin_replaces_it() {
    let (r, _) = run("5 .\"SP\" ! SP SP @");
    assert_eq!(
        tokens(&r),
        vec![Token::Variable("SP".to_string()), Token::Integer(5)]
    );
    assert_eq!(r.symbols().lookup("SP"), Some(Entry::Variable(5)));
}

#[test]
fn test_fetch_builtin_reads_zero() {
    let (r, _) = run(".\"DUP\" @");
    assert_eq!(tokens(&r), vec![Token::Integer(0)]);
}

#[test]
fn test_variable_underflow() {
    let (_, exit) = run("X SET");
    assert_eq!(fault(&exit), code(ErrorCode::StackUnderflow));
    let (_, exit) = run("@");
    assert_eq!(fault(&exit), code(ErrorCode::StackUnderflow));
    let (_, exit) = run("X !");
    assert_eq!(fault(&exit), code(ErrorCode::StackUnderflow));
}
