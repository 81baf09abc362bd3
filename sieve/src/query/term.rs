use crate::errors::EvaluationError;
use crate::posting::InvertedList;
use crate::store::IndexReader;
use crate::query::EvaluationContext;


/// Fetches the postings of an analyzed term
///
/// Terms missing from the index come back as an empty list in the requested
/// field.
pub fn evaluate<R: IndexReader + ?Sized>(term: &str, field: &str, context: &EvaluationContext<R>) -> Result<InvertedList, EvaluationError> {
    Ok(context.index.inverted_list(term, field)?)
}


#[cfg(test)]
mod tests {
    use crate::retrieval_model::RetrievalModel;
    use crate::test_utils::make_body_store;
    use crate::query::{QueryOperator, EvaluationContext};

    #[test]
    fn test_term() {
        let store = make_body_store(&["apple pie", "pie", "apple apple"]);
        let reader = store.reader();
        let context = EvaluationContext::new(&RetrievalModel::UnrankedBoolean, &reader);

        let list = QueryOperator::new_term("apple", None).evaluate_inverted_list(&context).unwrap();

        assert_eq!(list.field, "body");
        assert_eq!(list.document_frequency, 2);
        assert_eq!(list.collection_term_frequency, 3);
        assert_eq!(list.postings[1].positions, vec![1, 2]);
    }

    #[test]
    fn test_missing_term() {
        let store = make_body_store(&["apple pie"]);
        let reader = store.reader();
        let context = EvaluationContext::new(&RetrievalModel::UnrankedBoolean, &reader);

        let list = QueryOperator::new_term("banana", Some("title")).evaluate_inverted_list(&context).unwrap();

        assert!(list.is_empty());
        assert_eq!(list.document_frequency, 0);
        assert_eq!(list.field, "title");
    }
}
