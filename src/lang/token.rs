/// ## Lexical unit
///
/// Tokens are what flows through the whole interpreter. The lexer produces
/// `Integer`, `Numeral`, `String` and `Word`. The operand stack holds the same type,
/// so an unresolved word is simply pushed as it came from the lexer.
/// `Variable` is a `Word` that resolved to a variable when dispatched.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Integer(i64),
    /// An integer literal not spelled the way `Integer` prints, like `007`
    /// or `+5`. Keeps its spelling for use as a name.
    Numeral(i64, String),
    String(String),
    Word(String),
    Variable(String),
}

impl Token {
    /// Numeric payload. Only integers carry one; everything else reads as zero.
    pub fn value(&self) -> i64 {
        match self {
            Token::Integer(n) | Token::Numeral(n, _) => *n,
            _ => 0,
        }
    }

    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Token::Integer(n) => n.to_string().into(),
            Token::Numeral(_, s) | Token::String(s) | Token::Word(s) | Token::Variable(s) => {
                s.as_str().into()
            }
        }
    }

    /// True when this is a bare word spelled exactly `keyword`.
    pub fn is_word(&self, keyword: &str) -> bool {
        match self {
            Token::Word(s) => s == keyword,
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Numeral(_, s) => write!(f, "{}", s),
            String(s) => write!(f, ".\"{}\"", s),
            Word(s) => write!(f, "{}", s),
            Variable(s) => write!(f, "{}", s),
        }
    }
}
