use super::lex::*;
use super::token::*;

/// One line of program input, already lexed.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: usize,
    blank: bool,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(number: usize, s: &str) -> Line {
        Line {
            number,
            blank: s.trim_end_matches(|c: char| c == '\n' || c == '\r').is_empty(),
            tokens: lex(s),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Nothing at all was typed. A line of only spaces or a comment is not blank.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|s| s.to_string()).collect();
        write!(f, "{} {}", self.number, s.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_versus_empty() {
        let line = Line::new(1, "");
        assert!(line.is_blank() && line.is_empty());
        let line = Line::new(2, "   // nothing here");
        assert!(!line.is_blank() && line.is_empty());
        let line = Line::new(3, "\r\n");
        assert!(line.is_blank());
    }

    #[test]
    fn test_display() {
        let line = Line::new(10, "1 2 + .\"sum\" . // done");
        assert_eq!(line.to_string(), "10 1 2 + .\"sum\" .");
    }
}
