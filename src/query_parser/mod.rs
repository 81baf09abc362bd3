//! Parses the structured query language into operator trees
//!
//! Queries look like `#and(apple #near/2(pie crust.title))`. Words outside
//! the `#` operators are analyzed into terms. A `.field` suffix picks the
//! field a term is looked up in.

pub mod lexer;

use thiserror::Error;

use sieve::{QueryOperator, RetrievalModel};
use sieve::analysis::AnalyzerSpec;

use crate::query_parser::lexer::{tokenize, QueryToken};


#[derive(Debug, PartialEq, Error)]
pub enum QueryParseError {
    #[error("query is empty")]
    Empty,

    #[error("unrecognised operator '{0}'")]
    UnrecognisedOperator(String),

    #[error("malformed #near operator '{0}'")]
    MalformedNear(String),

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("unexpected '{0}' after the end of the query")]
    TrailingTokens(String),

    #[error("term '{0}' is not inside an operator")]
    TermOutsideOperator(String),

    #[error("query has no terms left after analysis")]
    NoTerms,
}


pub struct QueryParser<'a> {
    model: &'a RetrievalModel,
    analyzer: AnalyzerSpec,
}


/// Splits a `.field` suffix off a query word
fn split_field(word: &str) -> (&str, Option<&str>) {
    match word.rfind('.') {
        Some(index) if index + 1 < word.len() => (&word[..index], Some(&word[index + 1..])),
        Some(index) => (&word[..index], None),
        None => (word, None),
    }
}


impl<'a> QueryParser<'a> {
    pub fn new(model: &'a RetrievalModel) -> QueryParser<'a> {
        QueryParser {
            model: model,
            analyzer: AnalyzerSpec::english(),
        }
    }

    /// Name of the operator queries are wrapped in when they don't start
    /// with one the model can rank
    fn default_operator(&self) -> &'static str {
        match *self.model {
            RetrievalModel::UnrankedBoolean | RetrievalModel::RankedBoolean => "#or",
            RetrievalModel::Bm25{..} => "#sum",
            RetrievalModel::Indri{..} => "#and",
        }
    }

    /// Adds the model's default operator around the query where needed
    fn wrap_query(&self, query: &str) -> String {
        let mut query = if query.starts_with('#') {
            query.to_string()
        } else {
            format!("{}({})", self.default_operator(), query)
        };

        // BM25 and Indri rankings always come from a #sum / #and root
        if !self.model.is_boolean() && !query.to_lowercase().starts_with(self.default_operator()) {
            query = format!("{}({})", self.default_operator(), query);
        }

        query
    }

    fn new_operator(&self, name: &str) -> Result<QueryOperator, QueryParseError> {
        let lower = name.to_lowercase();

        if lower.starts_with("#near/") {
            return match lower["#near/".len()..].parse::<u32>() {
                Ok(distance) => {
                    Ok(QueryOperator::Near {
                        distance: distance,
                        args: Vec::new(),
                    })
                }
                Err(_) => Err(QueryParseError::MalformedNear(name.to_string())),
            };
        }

        match lower.as_ref() {
            "#and" if self.model.is_indri() => Ok(QueryOperator::IndriAnd { args: Vec::new() }),
            "#and" => Ok(QueryOperator::And { args: Vec::new() }),
            "#or" => Ok(QueryOperator::Or { args: Vec::new() }),
            "#syn" => Ok(QueryOperator::Synonym { args: Vec::new() }),
            "#sum" => Ok(QueryOperator::Sum { args: Vec::new() }),
            _ => Err(QueryParseError::UnrecognisedOperator(name.to_string())),
        }
    }

    /// Wraps a list-producing root so the tree produces scores
    fn score_root(&self, root: QueryOperator) -> QueryOperator {
        if !root.is_list_producing() {
            return root;
        }

        match *self.model {
            RetrievalModel::UnrankedBoolean | RetrievalModel::RankedBoolean => QueryOperator::new_score(root),
            RetrievalModel::Bm25{..} => QueryOperator::Sum { args: vec![root] },
            RetrievalModel::Indri{..} => QueryOperator::IndriAnd { args: vec![root] },
        }
    }

    pub fn parse(&self, query: &str) -> Result<QueryOperator, QueryParseError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryParseError::Empty);
        }

        let query = self.wrap_query(query);
        let mut tokens = tokenize(&query).into_iter();
        let mut stack: Vec<QueryOperator> = Vec::new();
        let mut root = None;

        while let Some(token) = tokens.next() {
            match token {
                QueryToken::Operator(name) => {
                    stack.push(self.new_operator(name)?);
                }
                QueryToken::Close => {
                    let operator = stack.pop().ok_or(QueryParseError::UnbalancedParentheses)?;

                    match stack.last_mut() {
                        Some(parent) => parent.add_arg(operator),
                        None => {
                            root = Some(operator);
                            break;
                        }
                    }
                }
                QueryToken::Word(word) => {
                    let parent = match stack.last_mut() {
                        Some(parent) => parent,
                        None => return Err(QueryParseError::TermOutsideOperator(word.to_string())),
                    };

                    let (text, field) = split_field(word);
                    for term in self.analyzer.analyze(text) {
                        parent.add_arg(QueryOperator::new_term(&term, field));
                    }
                }
            }
        }

        if let Some(token) = tokens.next() {
            let text = match token {
                QueryToken::Operator(text) | QueryToken::Word(text) => text,
                QueryToken::Close => ")",
            };

            return Err(QueryParseError::TrailingTokens(text.to_string()));
        }

        match root {
            Some(ref root) if !root.has_terms() => Err(QueryParseError::NoTerms),
            Some(root) => Ok(self.score_root(root)),
            None => Err(QueryParseError::UnbalancedParentheses),
        }
    }
}
