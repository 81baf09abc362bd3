use crate::errors::EvaluationError;
use crate::cursor::{DaatCursor, min_doc_id};
use crate::retrieval_model::RetrievalModel;
use crate::score_list::ScoreList;
use crate::store::IndexReader;
use crate::query::{QueryOperator, EvaluationContext, ScoreResult, evaluate_argument_scores, check_min_arity};
use crate::query::default_score::DefaultScorer;


/// Indri `#AND`: geometric mean of the argument scores
///
/// Every document matched by at least one argument is scored. Arguments
/// that did not match a document contribute their default score, so a
/// partial match is smoothed rather than dropped.
pub fn evaluate<R: IndexReader + ?Sized>(args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<ScoreResult, EvaluationError> {
    context.require_model("#AND", RetrievalModel::is_indri)?;
    check_min_arity("#AND", args, 1, "at least 1")?;

    let results = evaluate_argument_scores(args, context)?;
    let exponent = 1.0 / results.len() as f64;

    let mut scores = ScoreList::new();
    let mut cursors = results.iter().map(|result| DaatCursor::new(&result.scores)).collect::<Vec<_>>();

    while let Some(doc_id) = min_doc_id(&cursors) {
        let mut score = 1.0;

        for (cursor, result) in cursors.iter_mut().zip(results.iter()) {
            let arg_score = match cursor.entry_for(doc_id) {
                Some(entry) => {
                    let arg_score = entry.score;
                    cursor.advance();
                    arg_score
                }
                None => result.default_scorer.score(context, doc_id)?,
            };

            score *= arg_score.powf(exponent);
        }

        scores.add(doc_id, score);
    }

    let default_scorer = DefaultScorer::GeometricMean(results.into_iter().map(|result| result.default_scorer).collect());

    Ok(ScoreResult::new(scores, default_scorer))
}


#[cfg(test)]
mod tests {
    use crate::errors::EvaluationError;
    use crate::retrieval_model::RetrievalModel;
    use crate::test_utils::make_body_store;
    use crate::query::{QueryOperator, EvaluationContext};
    use crate::query::default_score::DefaultScorer;

    const EPSILON: f64 = 1e-12;

    fn term(text: &str) -> QueryOperator {
        QueryOperator::new_term(text, None)
    }

    fn indri_and(args: Vec<QueryOperator>) -> QueryOperator {
        QueryOperator::IndriAnd {
            args: args,
        }
    }

    fn indri() -> RetrievalModel {
        RetrievalModel::Indri {
            mu: 2500.0,
            lambda: 0.4,
        }
    }

    #[test]
    fn test_geometric_mean_of_matches() {
        let store = make_body_store(&["apple pie", "apple", "pie pie"]);
        let reader = store.reader();
        let model = indri();
        let context = EvaluationContext::new(&model, &reader);

        let apple = term("apple").evaluate_scores(&context).unwrap().scores;
        let pie = term("pie").evaluate_scores(&context).unwrap().scores;
        let result = indri_and(vec![term("apple"), term("pie")]).evaluate_scores(&context).unwrap();

        let expected = (apple.score_of(0).unwrap() * pie.score_of(0).unwrap()).sqrt();
        let score = result.scores.score_of(0).unwrap();
        assert!((score - expected).abs() < EPSILON, "got {}", score);
    }

    #[test]
    fn test_missing_argument_uses_default_score() {
        let store = make_body_store(&["apple pie", "apple", "pie pie"]);
        let reader = store.reader();
        let model = indri();
        let context = EvaluationContext::new(&model, &reader);

        let apple = term("apple").evaluate_scores(&context).unwrap().scores;
        let result = indri_and(vec![term("apple"), term("pie")]).evaluate_scores(&context).unwrap();

        // Document 1 has no "pie": length 1, ctf of "pie" is 3, field has 5 tokens
        let expected = (apple.score_of(1).unwrap() * model.default_score(1, 3, 5)).sqrt();
        let score = result.scores.score_of(1).unwrap();

        let doc_ids = result.scores.iter().map(|entry| entry.doc_id).collect::<Vec<_>>();
        assert_eq!(doc_ids, vec![0, 1, 2]);
        assert!((score - expected).abs() < EPSILON, "got {}", score);
        assert!(score > 0.0);
    }

    #[test]
    fn test_unknown_term_still_scores_documents() {
        let store = make_body_store(&["apple", "pear"]);
        let reader = store.reader();
        let model = indri();
        let context = EvaluationContext::new(&model, &reader);

        let result = indri_and(vec![term("apple"), term("kiwi")]).evaluate_scores(&context).unwrap();

        let doc_ids = result.scores.iter().map(|entry| entry.doc_id).collect::<Vec<_>>();
        assert_eq!(doc_ids, vec![0]);
    }

    #[test]
    fn test_nested_and_uses_geometric_mean_default() {
        let store = make_body_store(&["apple", "pie crust"]);
        let reader = store.reader();
        let model = indri();
        let context = EvaluationContext::new(&model, &reader);

        let inner = indri_and(vec![term("pie"), term("crust")]);
        let inner_result = inner.evaluate_scores(&context).unwrap();
        let result = indri_and(vec![term("apple"), inner]).evaluate_scores(&context).unwrap();

        assert_eq!(inner_result.default_scorer, DefaultScorer::GeometricMean(vec![
            DefaultScorer::Term {
                field: "body".to_string(),
                collection_term_frequency: 1,
            },
            DefaultScorer::Term {
                field: "body".to_string(),
                collection_term_frequency: 1,
            },
        ]));

        // Document 0 lacks both "pie" and "crust"
        let apple = term("apple").evaluate_scores(&context).unwrap().scores;
        let inner_default = inner_result.default_scorer.score(&context, 0).unwrap();
        let expected = (apple.score_of(0).unwrap() * inner_default).sqrt();
        let score = result.scores.score_of(0).unwrap();

        assert!((score - expected).abs() < EPSILON, "got {}", score);
    }

    #[test]
    fn test_single_argument_is_identity() {
        let store = make_body_store(&["apple pie", "apple"]);
        let reader = store.reader();
        let model = indri();
        let context = EvaluationContext::new(&model, &reader);

        let apple = term("apple").evaluate_scores(&context).unwrap().scores;
        let result = indri_and(vec![term("apple")]).evaluate_scores(&context).unwrap();

        for entry in apple.iter() {
            let score = result.scores.score_of(entry.doc_id).unwrap();
            assert!((score - entry.score).abs() < EPSILON);
        }
    }

    #[test]
    fn test_indri_and_rejects_bm25() {
        let store = make_body_store(&["apple"]);
        let reader = store.reader();
        let model = RetrievalModel::Bm25 {
            k1: 1.2,
            b: 0.75,
            k3: 0.0,
        };
        let context = EvaluationContext::new(&model, &reader);

        match indri_and(vec![term("apple")]).evaluate_scores(&context) {
            Err(EvaluationError::IncompatibleModel{operator: "#AND", model: "BM25"}) => {}
            other => panic!("expected incompatible model error, got {:?}", other),
        }
    }
}
