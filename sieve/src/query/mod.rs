//! The query operator tree
//!
//! Operators come in two families. `#TERM`, `#SYN` and `#NEAR` produce
//! inverted lists; `#SCORE`, `#OR`, `#AND`, `#SUM` and the Indri `#AND`
//! produce score lists. Evaluation is recursive: every operator evaluates its
//! arguments first, then merges their lists document-at-a-time.

pub mod term;
pub mod synonym;
pub mod near;
pub mod score;
pub mod or;
pub mod and;
pub mod sum;
pub mod indri_and;
pub mod default_score;

use std::fmt;
use std::slice;

use crate::errors::EvaluationError;
use crate::posting::InvertedList;
use crate::score_list::ScoreList;
use crate::retrieval_model::RetrievalModel;
use crate::store::IndexReader;
use crate::query::default_score::DefaultScorer;


/// Field used by terms that do not name one
pub const DEFAULT_FIELD: &'static str = "body";


#[derive(Debug, Clone, PartialEq)]
pub enum QueryOperator {
    Term {
        term: String,
        field: String,
    },
    Synonym {
        args: Vec<QueryOperator>,
    },
    Near {
        distance: u32,
        args: Vec<QueryOperator>,
    },
    Score {
        arg: Box<QueryOperator>,
    },
    Or {
        args: Vec<QueryOperator>,
    },
    And {
        args: Vec<QueryOperator>,
    },
    Sum {
        args: Vec<QueryOperator>,
    },
    IndriAnd {
        args: Vec<QueryOperator>,
    },
}


/// Everything needed to evaluate one query tree
pub struct EvaluationContext<'a, R: IndexReader + ?Sized + 'a> {
    pub model: &'a RetrievalModel,
    pub index: &'a R,
}


impl<'a, R: IndexReader + ?Sized + 'a> EvaluationContext<'a, R> {
    pub fn new(model: &'a RetrievalModel, index: &'a R) -> EvaluationContext<'a, R> {
        EvaluationContext {
            model: model,
            index: index,
        }
    }

    /// Fails unless the active model is one the operator supports
    fn require_model(&self, operator: &'static str, supported: fn(&RetrievalModel) -> bool) -> Result<(), EvaluationError> {
        if supported(self.model) {
            Ok(())
        } else {
            Err(EvaluationError::IncompatibleModel {
                operator: operator,
                model: self.model.name(),
            })
        }
    }
}


/// The output of a score-producing operator
///
/// Carries the information needed to score documents the operator did not
/// match, so parents never need to evaluate it a second time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub scores: ScoreList,
    pub default_scorer: DefaultScorer,
}


impl ScoreResult {
    pub fn new(scores: ScoreList, default_scorer: DefaultScorer) -> ScoreResult {
        ScoreResult {
            scores: scores,
            default_scorer: default_scorer,
        }
    }
}


/// Evaluates a query tree against an index
///
/// Shorthand for `QueryOperator::evaluate`.
pub fn evaluate<R: IndexReader + ?Sized>(tree: &QueryOperator, model: &RetrievalModel, index: &R) -> Result<ScoreList, EvaluationError> {
    tree.evaluate(model, index)
}


fn check_min_arity(operator: &'static str, args: &[QueryOperator], minimum: usize, expected: &'static str) -> Result<(), EvaluationError> {
    if args.len() < minimum {
        return Err(EvaluationError::InvalidArity {
            operator: operator,
            expected: expected,
            found: args.len(),
        });
    }

    Ok(())
}


/// Evaluates arguments that must all produce inverted lists in one field
fn evaluate_argument_lists<R: IndexReader + ?Sized>(operator: &'static str, args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<Vec<InvertedList>, EvaluationError> {
    let mut lists: Vec<InvertedList> = Vec::with_capacity(args.len());

    for arg in args.iter() {
        if !arg.is_list_producing() {
            return Err(EvaluationError::InvalidArgument {
                operator: operator,
                argument: arg.to_string(),
            });
        }

        let list = arg.evaluate_inverted_list(context)?;

        if let Some(first) = lists.first() {
            if first.field != list.field {
                return Err(EvaluationError::FieldMismatch {
                    operator: operator,
                    expected: first.field.clone(),
                    found: list.field,
                });
            }
        }

        lists.push(list);
    }

    Ok(lists)
}


/// Evaluates arguments of a score-producing operator
///
/// List-producing arguments go through an implicit `#SCORE`.
fn evaluate_argument_scores<R: IndexReader + ?Sized>(args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<Vec<ScoreResult>, EvaluationError> {
    args.iter().map(|arg| arg.evaluate_scores(context)).collect()
}


impl QueryOperator {
    pub fn new_term(term: &str, field: Option<&str>) -> QueryOperator {
        QueryOperator::Term {
            term: term.to_string(),
            field: field.unwrap_or(DEFAULT_FIELD).to_string(),
        }
    }

    pub fn new_score(arg: QueryOperator) -> QueryOperator {
        QueryOperator::Score {
            arg: Box::new(arg),
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            QueryOperator::Term{..} => "#TERM",
            QueryOperator::Synonym{..} => "#SYN",
            QueryOperator::Near{..} => "#NEAR",
            QueryOperator::Score{..} => "#SCORE",
            QueryOperator::Or{..} => "#OR",
            QueryOperator::And{..} | QueryOperator::IndriAnd{..} => "#AND",
            QueryOperator::Sum{..} => "#SUM",
        }
    }

    pub fn is_list_producing(&self) -> bool {
        match *self {
            QueryOperator::Term{..} | QueryOperator::Synonym{..} | QueryOperator::Near{..} => true,
            _ => false,
        }
    }

    /// Appends an argument. Does nothing for `#TERM` and `#SCORE`.
    pub fn add_arg(&mut self, arg: QueryOperator) {
        match *self {
            QueryOperator::Synonym{ref mut args} |
            QueryOperator::Near{ref mut args, ..} |
            QueryOperator::Or{ref mut args} |
            QueryOperator::And{ref mut args} |
            QueryOperator::Sum{ref mut args} |
            QueryOperator::IndriAnd{ref mut args} => args.push(arg),
            QueryOperator::Term{..} | QueryOperator::Score{..} => (),
        }
    }

    pub fn args(&self) -> &[QueryOperator] {
        match *self {
            QueryOperator::Synonym{ref args} |
            QueryOperator::Near{ref args, ..} |
            QueryOperator::Or{ref args} |
            QueryOperator::And{ref args} |
            QueryOperator::Sum{ref args} |
            QueryOperator::IndriAnd{ref args} => args,
            QueryOperator::Score{ref arg} => slice::from_ref(&**arg),
            QueryOperator::Term{..} => &[],
        }
    }

    /// True if a `#TERM` appears anywhere in the tree rooted here
    pub fn has_terms(&self) -> bool {
        match *self {
            QueryOperator::Term{..} => true,
            _ => self.args().iter().any(|arg| arg.has_terms()),
        }
    }

    /// Evaluates the tree rooted here and returns its score list
    ///
    /// A list-producing root is scored through an implicit `#SCORE`.
    pub fn evaluate<R: IndexReader + ?Sized>(&self, model: &RetrievalModel, index: &R) -> Result<ScoreList, EvaluationError> {
        let context = EvaluationContext::new(model, index);

        Ok(self.evaluate_scores(&context)?.scores)
    }

    pub fn evaluate_inverted_list<R: IndexReader + ?Sized>(&self, context: &EvaluationContext<R>) -> Result<InvertedList, EvaluationError> {
        let list = match *self {
            QueryOperator::Term{ref term, ref field} => term::evaluate(term, field, context)?,
            QueryOperator::Synonym{ref args} => synonym::evaluate(args, context)?,
            QueryOperator::Near{distance, ref args} => near::evaluate(distance, args, context)?,
            _ => {
                return Err(EvaluationError::InvalidArgument {
                    operator: self.name(),
                    argument: self.to_string(),
                });
            }
        };

        debug!("{} matched {} documents", self, list.len());

        Ok(list)
    }

    pub fn evaluate_scores<R: IndexReader + ?Sized>(&self, context: &EvaluationContext<R>) -> Result<ScoreResult, EvaluationError> {
        let result = match *self {
            QueryOperator::Term{..} | QueryOperator::Synonym{..} | QueryOperator::Near{..} => score::evaluate(self, context)?,
            QueryOperator::Score{ref arg} => score::evaluate(arg, context)?,
            QueryOperator::Or{ref args} => or::evaluate(args, context)?,
            QueryOperator::And{ref args} => and::evaluate(args, context)?,
            QueryOperator::Sum{ref args} => sum::evaluate(args, context)?,
            QueryOperator::IndriAnd{ref args} => indri_and::evaluate(args, context)?,
        };

        debug!("{} scored {} documents", self, result.scores.len());

        Ok(result)
    }
}


impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let args = match *self {
            QueryOperator::Term{ref term, ref field} => return write!(f, "{}.{}", term, field),
            QueryOperator::Score{ref arg} => return write!(f, "#SCORE( {} )", arg),
            QueryOperator::Near{distance, ref args} => {
                write!(f, "#NEAR/{}( ", distance)?;
                args
            }
            QueryOperator::Synonym{ref args} |
            QueryOperator::Or{ref args} |
            QueryOperator::And{ref args} |
            QueryOperator::Sum{ref args} |
            QueryOperator::IndriAnd{ref args} => {
                write!(f, "{}( ", self.name())?;
                args
            }
        };

        for arg in args.iter() {
            write!(f, "{} ", arg)?;
        }

        write!(f, ")")
    }
}
