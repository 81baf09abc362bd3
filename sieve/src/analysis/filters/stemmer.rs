use rust_stemmers::{Algorithm, Stemmer};

use crate::token::Token;


/// Reduces each term to its Snowball stem so query terms match a stemmed index
pub struct StemmerFilter<'a> {
    tokens: Box<dyn Iterator<Item=Token> + 'a>,
    stemmer: Stemmer,
}


impl<'a> StemmerFilter<'a> {
    pub fn new(tokens: Box<dyn Iterator<Item=Token> + 'a>, algorithm: Algorithm) -> StemmerFilter<'a> {
        StemmerFilter {
            tokens: tokens,
            stemmer: Stemmer::create(algorithm),
        }
    }

    pub fn english(tokens: Box<dyn Iterator<Item=Token> + 'a>) -> StemmerFilter<'a> {
        StemmerFilter::new(tokens, Algorithm::English)
    }
}


impl<'a> Iterator for StemmerFilter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut token = self.tokens.next()?;
        token.term = self.stemmer.stem(&token.term).into_owned();

        Some(token)
    }
}
