use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer kernels for the arithmetic, comparison and logic words
///
/// `lhs` is the deeper operand and `rhs` the one that was on top, so
/// `7 2 -` is `subtract(7, 2)`. Truth values are `1` and `0`.

pub struct Operation {}

impl Operation {
    pub fn truth(b: bool) -> i64 {
        if b {
            1
        } else {
            0
        }
    }

    pub fn negate(val: i64) -> Result<i64> {
        match val.checked_neg() {
            Some(n) => Ok(n),
            None => Err(error!(Overflow; "NEG")),
        }
    }

    pub fn sum(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_add(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(Overflow; "+")),
        }
    }

    pub fn subtract(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_sub(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(Overflow; "-")),
        }
    }

    pub fn multiply(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_mul(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(Overflow; "*")),
        }
    }

    /// Truncates toward zero.
    pub fn divide(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_div(rhs) {
            Some(n) => Ok(n),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero; "/"))
                } else {
                    Err(error!(Overflow; "/"))
                }
            }
        }
    }

    /// Takes the sign of `lhs`.
    pub fn remainder(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_rem(rhs) {
            Some(n) => Ok(n),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero; "%"))
                } else {
                    Err(error!(Overflow; "%"))
                }
            }
        }
    }

    pub fn less(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs < rhs))
    }

    pub fn less_equal(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs <= rhs))
    }

    pub fn equal(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs == rhs))
    }

    pub fn not_equal(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs != rhs))
    }

    pub fn greater_equal(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs >= rhs))
    }

    pub fn greater(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs > rhs))
    }

    /// Only `1` counts as true here; `2 1 AND` is `0`.
    pub fn and(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs == 1 && rhs == 1))
    }

    pub fn or(lhs: i64, rhs: i64) -> Result<i64> {
        Ok(Operation::truth(lhs == 1 || rhs == 1))
    }

    pub fn not(val: i64) -> Result<i64> {
        Ok(Operation::truth(val == 0))
    }
}
