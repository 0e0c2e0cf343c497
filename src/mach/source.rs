use crate::error;
use crate::lang::{Error, Line, LineNumber, Token};
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// Where the dispatch loop gets its next token.
///
/// Both the top level and the control-flow words pull from this, so a
/// conditional reads its branches from the same place as its caller.
pub trait TokenSource {
    /// `EndOfProgram` once no token can ever be produced again.
    fn next_token(&mut self) -> Result<Token>;

    fn line_number(&self) -> LineNumber {
        None
    }
}

/// Line-oriented character input.
pub trait LineSource {
    /// Next line with its terminator removed, `None` at end of stream.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Adapts any buffered reader. A last line without a newline still counts.
pub struct Reader<R> {
    inner: R,
}

impl<R: BufRead> Reader<R> {
    pub fn new(inner: R) -> Reader<R> {
        Reader { inner }
    }
}

impl<R: BufRead> LineSource for Reader<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut s = String::new();
        if self.inner.read_line(&mut s)? == 0 {
            return Ok(None);
        }
        while s.ends_with('\n') || s.ends_with('\r') {
            s.pop();
        }
        Ok(Some(s))
    }
}

/// ## Pending token queue
///
/// Lexes one input line at a time, and only when every token of the
/// previous line has been handed out.
pub struct TokenQueue<L> {
    lines: L,
    pending: VecDeque<Token>,
    line_number: usize,
    exhausted: bool,
}

impl<L: LineSource> TokenQueue<L> {
    pub fn new(lines: L) -> TokenQueue<L> {
        TokenQueue {
            lines,
            pending: VecDeque::new(),
            line_number: 0,
            exhausted: false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn fill(&mut self) -> Result<()> {
        debug_assert!(self.pending.is_empty());
        match self.lines.read_line()? {
            None => {
                trace!(lines = self.line_number, "end of input");
                self.exhausted = true;
            }
            Some(s) => {
                self.line_number += 1;
                let line = Line::new(self.line_number, &s);
                if line.is_blank() {
                    trace!(line = self.line_number, "blank line");
                } else {
                    trace!(%line, "lexed");
                }
                self.pending.extend(line.into_tokens());
            }
        }
        Ok(())
    }
}

impl<L: LineSource> TokenSource for TokenQueue<L> {
    fn next_token(&mut self) -> Result<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            if self.exhausted {
                return Err(error!(EndOfProgram));
            }
            self.fill()?;
        }
    }

    fn line_number(&self) -> LineNumber {
        if self.line_number == 0 {
            None
        } else {
            Some(self.line_number)
        }
    }
}

/// Replays a captured loop body. Words inside the body that consume
/// tokens of their own read them from here, never from the input.
pub struct Replay<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Replay<'a> {
    pub fn new(tokens: &'a [Token]) -> Replay<'a> {
        Replay { tokens, index: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.tokens.len()
    }
}

impl<'a> TokenSource for Replay<'a> {
    fn next_token(&mut self) -> Result<Token> {
        match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                Ok(token.clone())
            }
            None => Err(error!(ControlStructureMismatch; "UNTIL INSIDE AN UNFINISHED IFTHEN OR DO")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(s: &str) -> TokenQueue<Reader<&[u8]>> {
        TokenQueue::new(Reader::new(s.as_bytes()))
    }

    #[test]
    fn test_tokens_across_lines() {
        let mut q = queue("1 2\n\n3\n");
        assert_eq!(q.next_token(), Ok(Token::Integer(1)));
        assert_eq!(q.line_number(), Some(1));
        assert_eq!(q.pending(), 1);
        assert_eq!(q.next_token(), Ok(Token::Integer(2)));
        assert_eq!(q.next_token(), Ok(Token::Integer(3)));
        assert_eq!(q.line_number(), Some(3));
        assert!(q.next_token().unwrap_err().is_end_of_program());
        assert!(q.next_token().unwrap_err().is_end_of_program());
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut q = queue("7");
        assert_eq!(q.next_token(), Ok(Token::Integer(7)));
        assert!(q.next_token().unwrap_err().is_end_of_program());
    }

    #[test]
    fn test_crlf() {
        let mut q = queue(".\"a\"\r\nX\r\n");
        assert_eq!(q.next_token(), Ok(Token::String("a".to_string())));
        assert_eq!(q.next_token(), Ok(Token::Word("X".to_string())));
    }

    #[test]
    fn test_empty_input() {
        let mut q = queue("");
        assert!(q.next_token().unwrap_err().is_end_of_program());
        assert_eq!(q.line_number(), None);
    }

    #[test]
    fn test_replay() {
        let body = vec![Token::Integer(1), Token::Word("DROP".to_string())];
        let mut r = Replay::new(&body);
        assert!(!r.is_exhausted());
        assert_eq!(r.next_token(), Ok(Token::Integer(1)));
        assert_eq!(r.next_token(), Ok(Token::Word("DROP".to_string())));
        assert!(r.is_exhausted());
        assert!(r.next_token().is_err());
    }
}
