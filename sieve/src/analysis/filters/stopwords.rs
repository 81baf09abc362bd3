use crate::token::Token;


/// Lucene's default English stop set
pub const ENGLISH_STOPWORDS: &'static [&'static str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these", "they",
    "this", "to", "was", "will", "with",
];


/// Drops stopwords, leaving the positions of the remaining tokens untouched
pub struct StopwordFilter<'a> {
    tokens: Box<dyn Iterator<Item=Token> + 'a>,
    stopwords: &'static [&'static str],
}


impl<'a> StopwordFilter<'a> {
    pub fn new(tokens: Box<dyn Iterator<Item=Token> + 'a>, stopwords: &'static [&'static str]) -> StopwordFilter<'a> {
        StopwordFilter {
            tokens: tokens,
            stopwords: stopwords,
        }
    }

    pub fn english(tokens: Box<dyn Iterator<Item=Token> + 'a>) -> StopwordFilter<'a> {
        StopwordFilter::new(tokens, ENGLISH_STOPWORDS)
    }
}


impl<'a> Iterator for StopwordFilter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(token) = self.tokens.next() {
            if !self.stopwords.contains(&token.term.as_str()) {
                return Some(token);
            }
        }

        None
    }
}
