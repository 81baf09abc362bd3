pub mod lowercase;
pub mod stopwords;
pub mod stemmer;

use crate::token::Token;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::filters::stopwords::StopwordFilter;
use crate::analysis::filters::stemmer::StemmerFilter;


#[derive(Debug, Clone, PartialEq)]
pub enum FilterSpec {
    Lowercase,
    EnglishStopwords,
    EnglishStemmer,
}


impl FilterSpec {
    pub fn initialise<'a>(&self, input: Box<dyn Iterator<Item=Token> + 'a>) -> Box<dyn Iterator<Item=Token> + 'a> {
        match *self {
            FilterSpec::Lowercase => {
                Box::new(LowercaseFilter::new(input))
            }
            FilterSpec::EnglishStopwords => {
                Box::new(StopwordFilter::english(input))
            }
            FilterSpec::EnglishStemmer => {
                Box::new(StemmerFilter::english(input))
            }
        }
    }
}
