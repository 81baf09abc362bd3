pub mod standard;

use crate::token::Token;
use crate::analysis::tokenizers::standard::StandardTokenizer;


#[derive(Debug, Clone, PartialEq)]
pub enum TokenizerSpec {
    Standard,
}


impl TokenizerSpec {
    pub fn initialise<'a>(&self, input: &'a str) -> Box<dyn Iterator<Item=Token> + 'a> {
        match *self {
            TokenizerSpec::Standard => {
                Box::new(StandardTokenizer::new(input))
            }
        }
    }
}
