use crate::errors::EvaluationError;
use crate::score_list::ScoreList;
use crate::retrieval_model::TermStatistics;
use crate::store::IndexReader;
use crate::query::{QueryOperator, EvaluationContext, ScoreResult};
use crate::query::default_score::DefaultScorer;


/// `#SCORE`: turns an inverted list into a score list using the active model
pub fn evaluate<R: IndexReader + ?Sized>(arg: &QueryOperator, context: &EvaluationContext<R>) -> Result<ScoreResult, EvaluationError> {
    if !arg.is_list_producing() {
        return Err(EvaluationError::InvalidArgument {
            operator: "#SCORE",
            argument: arg.to_string(),
        });
    }

    let list = arg.evaluate_inverted_list(context)?;
    let needs_statistics = context.model.needs_statistics();

    let stats = if needs_statistics {
        TermStatistics {
            document_count: context.index.doc_count(&list.field)?,
            total_field_term_count: context.index.total_field_term_count(&list.field)?,
            document_frequency: list.document_frequency,
            collection_term_frequency: list.collection_term_frequency,
        }
    } else {
        TermStatistics {
            document_frequency: list.document_frequency,
            collection_term_frequency: list.collection_term_frequency,
            ..TermStatistics::default()
        }
    };

    let mut scores = ScoreList::new();
    for posting in list.postings.iter() {
        let length = if needs_statistics {
            context.index.doc_length(&list.field, posting.doc_id)?
        } else {
            0
        };

        scores.add(posting.doc_id, context.model.score(posting.term_frequency, length, &stats));
    }

    let default_scorer = DefaultScorer::Term {
        field: list.field,
        collection_term_frequency: list.collection_term_frequency,
    };

    Ok(ScoreResult::new(scores, default_scorer))
}
