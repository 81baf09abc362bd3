use crate::errors::EvaluationError;
use crate::cursor::{DaatCursor, min_doc_id};
use crate::retrieval_model::RetrievalModel;
use crate::score_list::ScoreList;
use crate::store::IndexReader;
use crate::query::{QueryOperator, EvaluationContext, ScoreResult, evaluate_argument_scores, check_min_arity};
use crate::query::default_score::DefaultScorer;


/// BM25 `#SUM`: every document any argument matched, scored by the sum of
/// the arguments that matched it
pub fn evaluate<R: IndexReader + ?Sized>(args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<ScoreResult, EvaluationError> {
    context.require_model("#SUM", RetrievalModel::is_bm25)?;
    check_min_arity("#SUM", args, 1, "at least 1")?;

    let results = evaluate_argument_scores(args, context)?;

    let mut scores = ScoreList::new();
    let mut cursors = results.iter().map(|result| DaatCursor::new(&result.scores)).collect::<Vec<_>>();

    while let Some(doc_id) = min_doc_id(&cursors) {
        let mut total = 0.0;

        for cursor in cursors.iter_mut() {
            if let Some(entry) = cursor.entry_for(doc_id) {
                total += entry.score;
                cursor.advance();
            }
        }

        scores.add(doc_id, total);
    }

    Ok(ScoreResult::new(scores, DefaultScorer::Zero))
}
