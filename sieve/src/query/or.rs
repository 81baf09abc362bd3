use crate::errors::EvaluationError;
use crate::cursor::{DaatCursor, min_doc_id};
use crate::retrieval_model::RetrievalModel;
use crate::score_list::ScoreList;
use crate::store::IndexReader;
use crate::query::{QueryOperator, EvaluationContext, ScoreResult, evaluate_argument_scores, check_min_arity};
use crate::query::default_score::DefaultScorer;


/// Boolean `#OR`: every document any argument matched, scored by the best
/// argument
pub fn evaluate<R: IndexReader + ?Sized>(args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<ScoreResult, EvaluationError> {
    context.require_model("#OR", RetrievalModel::is_boolean)?;
    check_min_arity("#OR", args, 1, "at least 1")?;

    let results = evaluate_argument_scores(args, context)?;
    let unranked = *context.model == RetrievalModel::UnrankedBoolean;

    let mut scores = ScoreList::new();
    let mut cursors = results.iter().map(|result| DaatCursor::new(&result.scores)).collect::<Vec<_>>();

    while let Some(doc_id) = min_doc_id(&cursors) {
        let mut best = f64::NEG_INFINITY;

        for cursor in cursors.iter_mut() {
            if let Some(entry) = cursor.entry_for(doc_id) {
                best = best.max(entry.score);
                cursor.advance();
            }
        }

        scores.add(doc_id, if unranked { 1.0 } else { best });
    }

    Ok(ScoreResult::new(scores, DefaultScorer::Zero))
}
