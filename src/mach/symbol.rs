use super::Op;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// What a name is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Builtin(Op),
    Variable(i64),
}

impl Entry {
    /// Built-in slots hold no storage and read as zero.
    pub fn value(&self) -> i64 {
        match self {
            Entry::Builtin(_) => 0,
            Entry::Variable(n) => *n,
        }
    }
}

/// ## Symbol table
///
/// Built-in keywords and user variables share one namespace.
/// A name is bound at most once; `SET` on any bound name fails.

#[derive(Debug)]
pub struct SymbolTable {
    symbols: HashMap<String, Entry>,
}

impl Default for SymbolTable {
    fn default() -> SymbolTable {
        SymbolTable {
            symbols: Op::ALL
                .iter()
                .map(|op| (op.keyword().to_string(), Entry::Builtin(*op)))
                .collect(),
        }
    }
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn lookup(&self, name: &str) -> Option<Entry> {
        self.symbols.get(name).copied()
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn define_variable(&mut self, name: &str, value: i64) -> Result<()> {
        if self.is_bound(name) {
            return Err(error!(AlreadyBound; name));
        }
        self.symbols.insert(name.to_string(), Entry::Variable(value));
        Ok(())
    }

    /// Rebinds `name` to a variable holding `value`. Whatever was there
    /// before is replaced, built-in or not.
    pub fn store(&mut self, name: &str, value: i64) -> Result<()> {
        match self.symbols.get_mut(name) {
            Some(entry) => {
                *entry = Entry::Variable(value);
                Ok(())
            }
            None => Err(error!(Unbound; name)),
        }
    }
}
