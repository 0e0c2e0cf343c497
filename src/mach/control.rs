use super::op::UNTIL;
use super::{Entry, Op, Replay, Runtime, TokenSource};
use crate::lang::{Error, Token};
use std::io::Write;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Control flow
///
/// `flag IFTHEN ... [ELSE ...] ENDIF` and `DO ... flag UNTIL`.
///
/// A branch that runs is dispatched token by token. A branch that doesn't
/// is read and thrown away, counting nested `IFTHEN`s so their `ELSE` and
/// `ENDIF` are not mistaken for ours. A nested conditional inside a
/// running branch is dispatched like any other word and consumes its own
/// `ELSE` and `ENDIF`.

impl<W: Write, E: Write> Runtime<W, E> {
    pub(super) fn if_then(&mut self, source: &mut dyn TokenSource) -> Result<()> {
        let flag = self.stack.pop()?.value();
        debug!(flag, "IFTHEN");
        if flag == 1 {
            if self.run_branch(source, true)? == Op::Else {
                self.skip_branch(source, &[Op::EndIf])?;
            }
        } else if self.skip_branch(source, &[Op::Else, Op::EndIf])? == Op::Else {
            self.run_branch(source, false)?;
        }
        Ok(())
    }

    /// Dispatches tokens until `ENDIF`, or `ELSE` when `stop_at_else`.
    /// Returns the keyword that stopped it, already consumed.
    fn run_branch(&mut self, source: &mut dyn TokenSource, stop_at_else: bool) -> Result<Op> {
        loop {
            let token = source.next_token()?;
            if let Token::Word(name) = &token {
                match self.symbols.lookup(name) {
                    Some(Entry::Builtin(Op::EndIf)) => return Ok(Op::EndIf),
                    Some(Entry::Builtin(Op::Else)) if stop_at_else => return Ok(Op::Else),
                    _ => {}
                }
            }
            self.dispatch(token, source)?;
        }
    }

    /// Discards tokens until one of `targets` turns up outside any nested
    /// conditional. Returns the one that did, already consumed.
    fn skip_branch(&mut self, source: &mut dyn TokenSource, targets: &[Op]) -> Result<Op> {
        let mut depth = 0usize;
        loop {
            let token = source.next_token()?;
            if token.is_word(Op::IfThen.keyword()) {
                depth += 1;
            } else if depth > 0 {
                if token.is_word(Op::EndIf.keyword()) {
                    depth -= 1;
                }
            } else if let Some(op) = targets.iter().find(|op| token.is_word(op.keyword())) {
                return Ok(*op);
            }
        }
    }

    /// Captures the body up to the matching `UNTIL`, then replays it until
    /// it leaves `1` on the stack. The body always runs at least once.
    pub(super) fn do_until(&mut self, source: &mut dyn TokenSource) -> Result<()> {
        let mut body = vec![];
        let mut depth = 0usize;
        loop {
            let token = source.next_token()?;
            if token.is_word(UNTIL) {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            } else if token.is_word(Op::Do.keyword()) {
                depth += 1;
            }
            body.push(token);
        }
        debug!(tokens = body.len(), "DO");
        let mut passes = 0usize;
        loop {
            let mut replay = Replay::new(&body);
            while !replay.is_exhausted() {
                let token = replay.next_token()?;
                self.dispatch(token, &mut replay)?;
            }
            passes += 1;
            self.stack.require(1, "NEED ONE PARAMETER FOR UNTIL")?;
            if self.stack.pop()?.value() == 1 {
                break;
            }
        }
        debug!(passes, "UNTIL");
        Ok(())
    }
}
