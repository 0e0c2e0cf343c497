use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    SallyLexer::lex(s)
}

fn is_sally_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(&pk) = self.chars().peek() {
            if !is_sally_whitespace(pk) {
                break;
            }
            self.chars().next();
        }
    }

    /// Everything after the opening `."` up to the closing quote or the end
    /// of the line. The closing quote is consumed.
    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self.chars().next() {
            if ch == '"' {
                break;
            }
            s.push(ch);
        }
        Some(Token::String(s))
    }

    fn word(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if is_sally_whitespace(pk) {
                break;
            }
            s.push(pk);
            self.chars().next();
        }
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Some(Token::Integer(n)),
            Ok(n) => Some(Token::Numeral(n, s)),
            Err(_) => Some(Token::Word(s)),
        }
    }
}

struct SallyLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Tokenizers<'a> for SallyLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for SallyLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remark {
            return None;
        }
        self.whitespace();
        let pk = *self.chars.peek()?;
        let second = self.chars.clone().nth(1);
        match (pk, second) {
            ('/', Some('/')) => {
                self.remark = true;
                None
            }
            ('.', Some('"')) => {
                self.chars.nth(1);
                self.string()
            }
            _ => self.word(),
        }
    }
}

impl<'a> SallyLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let s = s.trim_end_matches(|c: char| c == '\n' || c == '\r');
        SallyLexer {
            chars: s.chars().peekable(),
            remark: false,
        }
        .collect()
    }
}
