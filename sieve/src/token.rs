#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub term: String,
    pub position: u32,
}


impl Token {
    pub fn new(term: &str, position: u32) -> Token {
        Token {
            term: term.to_string(),
            position: position,
        }
    }
}
