//! Query-side text analysis
//!
//! Raw query words are broken into tokens before they become `#TERM`
//! operators. An analyzer is a tokenizer followed by a chain of filters.

pub mod tokenizers;
pub mod filters;

use crate::token::Token;

use crate::analysis::tokenizers::TokenizerSpec;
use crate::analysis::filters::FilterSpec;


/// Defines an analyzer
///
/// # Examples
///
/// ```
/// use sieve::Token;
/// use sieve::analysis::AnalyzerSpec;
///
/// let analyzer = AnalyzerSpec::english();
/// let tokens = analyzer.initialise("The Quick brown FOXES").collect::<Vec<Token>>();
///
/// assert_eq!(tokens, vec![
///     Token::new("quick", 2),
///     Token::new("brown", 3),
///     Token::new("fox", 4),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSpec {
    pub tokenizer: TokenizerSpec,
    pub filters: Vec<FilterSpec>,
}


impl AnalyzerSpec {
    /// Word tokenizer, lowercasing, English stopword removal and stemming
    pub fn english() -> AnalyzerSpec {
        AnalyzerSpec {
            tokenizer: TokenizerSpec::Standard,
            filters: vec![
                FilterSpec::Lowercase,
                FilterSpec::EnglishStopwords,
                FilterSpec::EnglishStemmer,
            ],
        }
    }

    pub fn initialise<'a>(&self, input: &'a str) -> Box<dyn Iterator<Item=Token> + 'a> {
        let mut analyzer = self.tokenizer.initialise(input);

        for filter in self.filters.iter() {
            analyzer = filter.initialise(analyzer);
        }

        analyzer
    }

    /// Runs the analyzer and keeps only the terms
    pub fn analyze(&self, input: &str) -> Vec<String> {
        self.initialise(input).map(|token| token.term).collect()
    }
}
