use std::io;

use thiserror::Error;

use crate::posting::DocId;


/// Failures reported by the index a query is evaluated against
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot read index: {0}")]
    Io(#[from] io::Error),

    #[error("malformed index snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("unknown document id: {0}")]
    UnknownDocument(DocId),
}


/// Reasons a query tree cannot be evaluated
///
/// None of these leave a partial result behind. Empty results (unknown
/// terms, no intersecting documents) are not errors.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("{operator} expects {expected} argument(s), found {found}")]
    InvalidArity {
        operator: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("#NEAR distance must be at least 1, found {0}")]
    InvalidDistance(u32),

    #[error("arguments of {operator} must be in the same field: expected '{expected}', found '{found}'")]
    FieldMismatch {
        operator: &'static str,
        expected: String,
        found: String,
    },

    #[error("invalid argument in {operator}: {argument} does not produce an inverted list")]
    InvalidArgument {
        operator: &'static str,
        argument: String,
    },

    #[error("{operator} cannot be evaluated under the {model} retrieval model")]
    IncompatibleModel {
        operator: &'static str,
        model: &'static str,
    },

    #[error(transparent)]
    Index(#[from] IndexError),
}
