use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand stack
///
/// A vector that refuses to grow past its limit and reports underflow as
/// an error instead of returning `None`.

pub struct Stack<T> {
    overflow_message: &'static str,
    limit: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub const LIMIT: usize = u16::MAX as usize;

    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack::with_limit(overflow_message, Self::LIMIT)
    }

    pub fn with_limit(overflow_message: &'static str, limit: usize) -> Stack<T> {
        Stack {
            overflow_message,
            limit,
            vec: vec![],
        }
    }

    /// Fails unless at least `len` items are present. Nothing is popped
    /// either way, so a failed operation leaves the stack as it found it.
    pub fn require(&self, len: usize, message: &str) -> Result<()> {
        if self.vec.len() < len {
            Err(error!(StackUnderflow; message))
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }

    /// Bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// A full stack is left unchanged.
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.limit {
            return Err(error!(StackOverflow; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.vec.pop().ok_or_else(|| error!(StackUnderflow))
    }

    /// Pops two. The lower one comes first.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let mut two = self.pop_n(2)?;
        match (two.pop(), two.pop()) {
            (Some(upper), Some(lower)) => Ok((lower, upper)),
            _ => Err(error!(InternalError; "POP 2")),
        }
    }

    /// Pops `len` items, returned bottom to top. Nothing is popped when
    /// fewer are present.
    pub fn pop_n(&mut self, len: usize) -> Result<Vec<T>> {
        if len > self.vec.len() {
            return Err(error!(StackUnderflow));
        }
        let range = (self.vec.len() - len)..;
        Ok(self.vec.drain(range).collect())
    }
}
