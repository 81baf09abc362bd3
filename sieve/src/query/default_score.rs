use crate::errors::EvaluationError;
use crate::posting::DocId;
use crate::store::IndexReader;
use crate::query::EvaluationContext;


/// How a score operator scores a document it did not match
///
/// Built while the operator is evaluated, then consulted by parents that
/// need a score for every candidate document (the Indri `#AND`).
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultScorer {
    /// Unmatched documents score zero
    Zero,

    /// A scored term or other inverted list, smoothed by the collection model
    Term {
        field: String,
        collection_term_frequency: u64,
    },

    /// Geometric mean of each argument's default score
    GeometricMean(Vec<DefaultScorer>),
}


impl DefaultScorer {
    pub fn score<R: IndexReader + ?Sized>(&self, context: &EvaluationContext<R>, doc_id: DocId) -> Result<f64, EvaluationError> {
        match *self {
            DefaultScorer::Zero => Ok(0.0),
            DefaultScorer::Term{ref field, collection_term_frequency} => {
                if !context.model.smooths_unmatched() {
                    return Ok(0.0);
                }

                let length = context.index.doc_length(field, doc_id)?;
                let total_field_term_count = context.index.total_field_term_count(field)?;

                Ok(context.model.default_score(length, collection_term_frequency, total_field_term_count))
            }
            DefaultScorer::GeometricMean(ref scorers) => {
                if scorers.is_empty() {
                    return Ok(0.0);
                }

                let exponent = 1.0 / scorers.len() as f64;
                let mut score = 1.0;

                for scorer in scorers.iter() {
                    score *= scorer.score(context, doc_id)?.powf(exponent);
                }

                Ok(score)
            }
        }
    }
}
