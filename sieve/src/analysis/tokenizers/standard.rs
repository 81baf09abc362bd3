use unicode_segmentation::{UnicodeSegmentation, UnicodeWords};

use crate::token::Token;


pub struct StandardTokenizer<'a> {
    unicode_words: UnicodeWords<'a>,
    position_counter: u32,
}


impl<'a> StandardTokenizer<'a> {
    pub fn new(input: &'a str) -> StandardTokenizer<'a> {
        StandardTokenizer {
            unicode_words: input.unicode_words(),
            position_counter: 0,
        }
    }
}


impl<'a> Iterator for StandardTokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.unicode_words.next() {
            Some(word) => {
                self.position_counter += 1;

                Some(Token::new(word, self.position_counter))
            }
            None => None,
        }
    }
}
