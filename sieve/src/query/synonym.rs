use crate::errors::EvaluationError;
use crate::cursor::{DaatCursor, min_doc_id};
use crate::posting::InvertedList;
use crate::store::IndexReader;
use crate::query::{QueryOperator, EvaluationContext, evaluate_argument_lists, check_min_arity};


/// Merges the arguments into one virtual term
///
/// A document matched by any argument gets one posting holding the summed
/// term frequency and the union of the positions.
pub fn evaluate<R: IndexReader + ?Sized>(args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<InvertedList, EvaluationError> {
    check_min_arity("#SYN", args, 1, "at least 1")?;
    let lists = evaluate_argument_lists("#SYN", args, context)?;

    let mut result = InvertedList::new(&lists[0].field);
    let mut cursors = lists.iter().map(DaatCursor::new).collect::<Vec<_>>();

    while let Some(doc_id) = min_doc_id(&cursors) {
        let mut term_frequency = 0;
        let mut positions = Vec::new();

        for cursor in cursors.iter_mut() {
            if let Some(posting) = cursor.entry_for(doc_id) {
                term_frequency += posting.term_frequency;
                positions.extend_from_slice(&posting.positions);
                cursor.advance();
            }
        }

        positions.sort();
        positions.dedup();

        result.append_posting(doc_id, term_frequency, positions);
    }

    Ok(result)
}
