use super::*;


fn word(s: &str) -> Token {
    Token::Word(s.to_string())
}

fn string(s: &str) -> Token {
    Token::String(s.to_string())
}
