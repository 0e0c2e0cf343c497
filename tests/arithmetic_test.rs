mod common;
use common::*;

#[test]
fn test_add_and_print() {
    assert_eq!(exec("3 4 + . CR"), "7\n");
}

#[test]
fn test_operand_order() {
    assert_eq!(exec("10 3 - . SP 6 7 * . SP 7 2 / . SP 7 2 % ."), "7 42 3 1");
}

#[test]
fn test_truncating_division() {
    assert_eq!(exec("-7 2 / . SP -7 2 % ."), "-3 -1");
    assert_eq!(exec("5 NEG ."), "-5");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(report("1 0 /"), "DIVISION BY ZERO IN 1; /");
    assert_eq!(report("1\n0 %"), "DIVISION BY ZERO IN 2; %");
}

#[test]
fn test_overflow() {
    assert_eq!(report("9223372036854775807 1 +"), "OVERFLOW IN 1; +");
}

#[test]
fn test_comparisons() {
    assert_eq!(exec("3 5 < . 5 3 < . 3 3 <= . 3 3 == . 3 4 != . 4 3 >= . 4 3 > ."), "1011111");
}

#[test]
fn test_logic() {
    assert_eq!(exec("1 1 AND . 1 2 AND . 0 1 OR . 0 0 OR . 0 NOT . 5 NOT ."), "101010");
}
