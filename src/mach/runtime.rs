use super::{Entry, Op, Operation, Stack, SymbolTable, TokenSource};
use crate::error;
use crate::lang::{Error, Token};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter
///
/// Owns the operand stack and the symbol table, and writes to two sinks:
/// `out` for what the program prints and `diag` for reports about the
/// program (recovered faults, `DUMP`).
///
/// Tokens are executed the moment they are read. There is no parse tree;
/// `IFTHEN` and `DO` read ahead in the same token source to find their
/// bodies.

pub struct Runtime<W: Write, E: Write> {
    pub(super) stack: Stack<Token>,
    pub(super) symbols: SymbolTable,
    out: W,
    diag: E,
    interrupted: Arc<AtomicBool>,
    nesting: usize,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Exit {
    /// Input ran out. Carries the number of tokens left on the stack.
    EndOfProgram(usize),
    Fault(Error),
}

impl Exit {
    pub fn is_fault(&self) -> bool {
        matches!(self, Exit::Fault(_))
    }
}

impl std::fmt::Display for Exit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Exit::EndOfProgram(0) => write!(f, "END OF PROGRAM\nPARAMETER STACK EMPTY"),
            Exit::EndOfProgram(n) => {
                write!(f, "END OF PROGRAM\nPARAMETER STACK HAS {} TOKEN(S)", n)
            }
            Exit::Fault(error) => write!(f, "{}", error),
        }
    }
}

impl<W: Write, E: Write> Runtime<W, E> {
    /// How many `IFTHEN` and `DO` may be running inside one another.
    pub const MAX_NESTING: usize = 128;

    pub fn new(out: W, diag: E) -> Runtime<W, E> {
        Runtime {
            stack: Stack::new("PARAMETER STACK FULL"),
            symbols: SymbolTable::new(),
            out,
            diag,
            interrupted: Arc::new(AtomicBool::new(false)),
            nesting: 0,
        }
    }

    pub fn stack(&self) -> &Stack<Token> {
        &self.stack
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn out(&self) -> &W {
        &self.out
    }

    pub fn diag(&self) -> &E {
        &self.diag
    }

    /// Setting the flag ends the session before the next token is dispatched.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Runs until the source is exhausted or a fault ends the session.
    pub fn execute(&mut self, source: &mut dyn TokenSource) -> Exit {
        let error = loop {
            if let Err(error) = self.step(source) {
                break error;
            }
        };
        let error = match self.out.flush() {
            Ok(()) => error,
            Err(flush_error) if error.is_end_of_program() => flush_error.into(),
            Err(_) => error,
        };
        if error.is_end_of_program() {
            debug!(depth = self.stack.len(), "end of program");
            Exit::EndOfProgram(self.stack.len())
        } else {
            let error = match error.line_number() {
                Some(_) => error,
                None => error.in_line_number(source.line_number()),
            };
            debug!(%error, "session ended");
            Exit::Fault(error)
        }
    }

    /// Reads and dispatches a single token.
    pub fn step(&mut self, source: &mut dyn TokenSource) -> Result<()> {
        let token = source.next_token()?;
        self.dispatch(token, source)
    }

    /// The dispatch rule. Literals and unknown words are pushed, variables
    /// are pushed by name, built-ins run.
    pub fn dispatch(&mut self, token: Token, source: &mut dyn TokenSource) -> Result<()> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Interrupted));
        }
        trace!(%token, depth = self.stack.len(), "dispatch");
        let entry = match &token {
            Token::Word(name) => self.symbols.lookup(name),
            _ => None,
        };
        let op = match (entry, token) {
            (Some(Entry::Builtin(op)), _) => op,
            (Some(Entry::Variable(_)), Token::Word(name)) => {
                return self.stack.push(Token::Variable(name))
            }
            (_, token) => return self.stack.push(token),
        };
        match self.perform(op, source) {
            Err(error) if error.is_recoverable() => {
                debug!(%error, "recovered");
                writeln!(self.diag, "{}", error)?;
                Ok(())
            }
            result => result,
        }
    }

    fn perform(&mut self, op: Op, source: &mut dyn TokenSource) -> Result<()> {
        if self.stack.len() < op.arity() {
            return Err(error!(StackUnderflow; &op.underflow_message()));
        }
        use Op::*;
        match op {
            Dump => self.dump(),
            Add => self.binary(Operation::sum),
            Sub => self.binary(Operation::subtract),
            Mul => self.binary(Operation::multiply),
            Div => self.binary(Operation::divide),
            Mod => self.binary(Operation::remainder),
            Neg => self.unary(Operation::negate),
            Dot => self.dot(),
            Sp => {
                write!(self.out, " ")?;
                Ok(self.out.flush()?)
            }
            Cr => {
                writeln!(self.out)?;
                Ok(self.out.flush()?)
            }
            Dup => {
                let val = self.top()?.value();
                self.stack.push(Token::Integer(val))
            }
            Drop => self.stack.pop().map(|_| ()),
            Swap => {
                let (one, two) = self.stack.pop_2()?;
                self.stack.push(Token::Integer(two.value()))?;
                self.stack.push(Token::Integer(one.value()))
            }
            Rot => {
                let three = self.stack.pop_n(3)?;
                for index in [1, 2, 0].iter() {
                    self.stack.push(Token::Integer(three[*index].value()))?;
                }
                Ok(())
            }
            Set => self.set(),
            Fetch => self.fetch(),
            Store => self.store(),
            Lt => self.binary(Operation::less),
            LtEq => self.binary(Operation::less_equal),
            Eq => self.binary(Operation::equal),
            NotEq => self.binary(Operation::not_equal),
            GtEq => self.binary(Operation::greater_equal),
            Gt => self.binary(Operation::greater),
            And => self.binary(Operation::and),
            Or => self.binary(Operation::or),
            Not => self.unary(Operation::not),
            IfThen => {
                self.enter()?;
                let result = self.if_then(source);
                self.nesting -= 1;
                result
            }
            Do => {
                self.enter()?;
                let result = self.do_until(source);
                self.nesting -= 1;
                result
            }
            Else | EndIf => {
                let message = format!("{} WITHOUT IFTHEN", op);
                Err(error!(ControlStructureMismatch; &message))
            }
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.nesting >= Self::MAX_NESTING {
            return Err(error!(ControlStructureMismatch; "NESTING TOO DEEP"));
        }
        self.nesting += 1;
        Ok(())
    }

    fn unary(&mut self, f: fn(i64) -> Result<i64>) -> Result<()> {
        let val = self.stack.pop()?;
        self.stack.push(Token::Integer(f(val.value())?))
    }

    fn binary(&mut self, f: fn(i64, i64) -> Result<i64>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(Token::Integer(f(lhs.value(), rhs.value())?))
    }

    fn dot(&mut self) -> Result<()> {
        match self.stack.pop()? {
            Token::Integer(n) | Token::Numeral(n, _) => write!(self.out, "{}", n)?,
            token => write!(self.out, "{}", token.text())?,
        }
        Ok(self.out.flush()?)
    }

    fn dump(&mut self) -> Result<()> {
        let items: Vec<String> = self.stack.iter().map(|t| t.to_string()).collect();
        writeln!(self.diag, "STACK {}: {}", self.stack.len(), items.join(" "))?;
        Ok(())
    }

    /// `value name SET`. The stack is left alone when the name is taken.
    fn set(&mut self) -> Result<()> {
        let name = self.top_text()?;
        if self.symbols.is_bound(&name) {
            return Err(error!(AlreadyBound; &name));
        }
        let (val, _) = self.stack.pop_2()?;
        debug!(%name, value = val.value(), "SET");
        self.symbols.define_variable(&name, val.value())
    }

    /// `name @`. The stack is left alone when the name is unbound.
    fn fetch(&mut self) -> Result<()> {
        let name = self.top_text()?;
        let entry = match self.symbols.lookup(&name) {
            Some(entry) => entry,
            None => return Err(error!(Unbound; &name)),
        };
        self.stack.pop()?;
        self.stack.push(Token::Integer(entry.value()))
    }

    /// `value name !`. Does nothing at all for an unbound name.
    fn store(&mut self) -> Result<()> {
        let (val, var) = self.stack.pop_2()?;
        let name = var.text();
        if self.symbols.is_bound(&name) {
            debug!(%name, value = val.value(), "STORE");
            self.symbols.store(&name, val.value())?;
        }
        Ok(())
    }

    fn top(&self) -> Result<&Token> {
        match self.stack.last() {
            Some(token) => Ok(token),
            None => Err(error!(StackUnderflow)),
        }
    }

    fn top_text(&self) -> Result<String> {
        Ok(self.top()?.text().into_owned())
    }
}
