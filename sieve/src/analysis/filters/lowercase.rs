use crate::token::Token;


pub struct LowercaseFilter<'a> {
    tokens: Box<dyn Iterator<Item=Token> + 'a>,
}


impl<'a> LowercaseFilter<'a> {
    pub fn new(tokens: Box<dyn Iterator<Item=Token> + 'a>) -> LowercaseFilter<'a> {
        LowercaseFilter {
            tokens: tokens,
        }
    }
}


impl<'a> Iterator for LowercaseFilter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut token = self.tokens.next()?;
        token.term = token.term.to_lowercase();

        Some(token)
    }
}
