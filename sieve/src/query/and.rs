use crate::errors::EvaluationError;
use crate::cursor::{DaatCursor, next_common_doc_id};
use crate::retrieval_model::RetrievalModel;
use crate::score_list::ScoreList;
use crate::store::IndexReader;
use crate::query::{QueryOperator, EvaluationContext, ScoreResult, evaluate_argument_scores, check_min_arity};
use crate::query::default_score::DefaultScorer;


/// Boolean `#AND`: documents every argument matched, scored by the weakest
/// argument
pub fn evaluate<R: IndexReader + ?Sized>(args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<ScoreResult, EvaluationError> {
    context.require_model("#AND", RetrievalModel::is_boolean)?;
    check_min_arity("#AND", args, 1, "at least 1")?;

    let results = evaluate_argument_scores(args, context)?;
    let unranked = *context.model == RetrievalModel::UnrankedBoolean;

    let mut scores = ScoreList::new();
    let mut cursors = results.iter().map(|result| DaatCursor::new(&result.scores)).collect::<Vec<_>>();

    while let Some(doc_id) = next_common_doc_id(&mut cursors) {
        let worst = cursors.iter()
            .filter_map(|cursor| cursor.entry())
            .fold(f64::INFINITY, |worst, entry| worst.min(entry.score));

        scores.add(doc_id, if unranked { 1.0 } else { worst });

        cursors[0].advance();
    }

    Ok(ScoreResult::new(scores, DefaultScorer::Zero))
}


#[cfg(test)]
mod tests {
    use crate::errors::EvaluationError;
    use crate::retrieval_model::RetrievalModel;
    use crate::test_utils::make_body_store;
    use crate::query::{QueryOperator, EvaluationContext};

    fn term(text: &str) -> QueryOperator {
        QueryOperator::new_term(text, None)
    }

    fn and(terms: &[&str]) -> QueryOperator {
        QueryOperator::And {
            args: terms.iter().map(|text| term(text)).collect(),
        }
    }

    #[test]
    fn test_intersection_takes_min() {
        let store = make_body_store(&[
            "apple apple pie",
            "pie pie pie",
            "apple pie pie pie",
            "apple",
        ]);
        let reader = store.reader();
        let context = EvaluationContext::new(&RetrievalModel::RankedBoolean, &reader);

        let result = and(&["apple", "pie"]).evaluate_scores(&context).unwrap();

        let entries = result.scores.iter().map(|entry| (entry.doc_id, entry.score)).collect::<Vec<_>>();
        assert_eq!(entries, vec![(0, 1.0), (2, 1.0)]);
    }

    #[test]
    fn test_unranked_scores_one() {
        let store = make_body_store(&["apple apple pie pie", "apple"]);
        let reader = store.reader();
        let context = EvaluationContext::new(&RetrievalModel::UnrankedBoolean, &reader);

        let result = and(&["apple", "pie"]).evaluate_scores(&context).unwrap();

        let entries = result.scores.iter().map(|entry| (entry.doc_id, entry.score)).collect::<Vec<_>>();
        assert_eq!(entries, vec![(0, 1.0)]);
    }

    #[test]
    fn test_missing_argument_empties_result() {
        let store = make_body_store(&["apple pie", "apple"]);
        let reader = store.reader();
        let context = EvaluationContext::new(&RetrievalModel::RankedBoolean, &reader);

        let result = and(&["apple", "kiwi"]).evaluate_scores(&context).unwrap();

        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_and_rejects_indri() {
        let store = make_body_store(&["apple"]);
        let reader = store.reader();
        let model = RetrievalModel::Indri {
            mu: 2500.0,
            lambda: 0.4,
        };
        let context = EvaluationContext::new(&model, &reader);

        match and(&["apple"]).evaluate_scores(&context) {
            Err(EvaluationError::IncompatibleModel{operator: "#AND", model: "Indri"}) => {}
            other => panic!("expected incompatible model error, got {:?}", other),
        }
    }
}
