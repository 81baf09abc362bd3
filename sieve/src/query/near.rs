use crate::errors::EvaluationError;
use crate::cursor::{DaatCursor, next_common_doc_id};
use crate::posting::InvertedList;
use crate::store::IndexReader;
use crate::query::{QueryOperator, EvaluationContext, evaluate_argument_lists, check_min_arity};


/// Finds ordered, non-overlapping windows in one document
///
/// Each argument's position must come after the previous argument's
/// position by at most `distance`. Positions used by a window are consumed.
/// Returns the position of the first argument of every window found.
pub fn find_windows(position_lists: &[&[u32]], distance: u32) -> Vec<u32> {
    let mut pointers = vec![0; position_lists.len()];
    let mut matches = Vec::new();

    'windows: loop {
        let mut i = 0;

        while i + 1 < position_lists.len() {
            let earlier = match position_lists[i].get(pointers[i]) {
                Some(position) => *position as i64,
                None => break 'windows,
            };
            let later = match position_lists[i + 1].get(pointers[i + 1]) {
                Some(position) => *position as i64,
                None => break 'windows,
            };

            let gap = later - earlier;
            if gap <= 0 {
                // The later term is not ahead yet
                pointers[i + 1] += 1;
                i = 0;
            } else if gap > distance as i64 {
                // The earlier term has to catch up
                pointers[i] += 1;
                i = 0;
            } else {
                i += 1;
            }
        }

        matches.push(position_lists[0][pointers[0]]);

        for pointer in pointers.iter_mut() {
            *pointer += 1;
        }
    }

    matches
}


/// `#NEAR/distance`: documents where the arguments appear in order, each
/// within `distance` positions of the one before
pub fn evaluate<R: IndexReader + ?Sized>(distance: u32, args: &[QueryOperator], context: &EvaluationContext<R>) -> Result<InvertedList, EvaluationError> {
    check_min_arity("#NEAR", args, 2, "at least 2")?;
    if distance < 1 {
        return Err(EvaluationError::InvalidDistance(distance));
    }

    let lists = evaluate_argument_lists("#NEAR", args, context)?;

    let mut result = InvertedList::new(&lists[0].field);
    let mut cursors = lists.iter().map(DaatCursor::new).collect::<Vec<_>>();

    while let Some(doc_id) = next_common_doc_id(&mut cursors) {
        let windows = {
            let position_lists = cursors.iter()
                .filter_map(|cursor| cursor.entry())
                .map(|posting| &posting.positions[..])
                .collect::<Vec<_>>();

            find_windows(&position_lists, distance)
        };

        if !windows.is_empty() {
            result.append_posting(doc_id, windows.len() as u32, windows);
        }

        cursors[0].advance();
    }

    Ok(result)
}
