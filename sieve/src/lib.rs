//! Structured query evaluation over a pre-built inverted index
//!
//! Query operator trees are evaluated document-at-a-time: every operator
//! evaluates its arguments, walks their posting or score lists in parallel
//! with one cursor per argument and emits a fresh list of its own. The
//! retrieval model chosen for the run decides how postings become scores.

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod errors;
pub mod token;
pub mod posting;
pub mod score_list;
pub mod cursor;
pub mod retrieval_model;
pub mod store;
pub mod analysis;
pub mod query;
pub mod collectors;

#[cfg(test)]
mod test_utils;

pub use errors::{EvaluationError, IndexError};
pub use token::Token;
pub use posting::{DocId, Posting, InvertedList};
pub use score_list::{ScoreList, ScoreListEntry};
pub use retrieval_model::RetrievalModel;
pub use store::IndexReader;
pub use query::{QueryOperator, ScoreResult, DEFAULT_FIELD, evaluate};
pub use collectors::{Collector, DocumentMatch};
pub use collectors::top_score::TopScoreCollector;
