//! Forward-only cursors used to merge posting and score lists

use crate::posting::{DocId, Posting, InvertedList};
use crate::score_list::{ScoreList, ScoreListEntry};


/// A list whose entries are ordered by ascending document id
pub trait DocSequence {
    type Entry;

    fn len(&self) -> usize;
    fn entry(&self, index: usize) -> &Self::Entry;
    fn doc_id_at(&self, index: usize) -> DocId;
}


impl DocSequence for InvertedList {
    type Entry = Posting;

    #[inline]
    fn len(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    fn entry(&self, index: usize) -> &Posting {
        &self.postings[index]
    }

    #[inline]
    fn doc_id_at(&self, index: usize) -> DocId {
        self.postings[index].doc_id
    }
}


impl DocSequence for ScoreList {
    type Entry = ScoreListEntry;

    #[inline]
    fn len(&self) -> usize {
        ScoreList::len(self)
    }

    #[inline]
    fn entry(&self, index: usize) -> &ScoreListEntry {
        &self.entries()[index]
    }

    #[inline]
    fn doc_id_at(&self, index: usize) -> DocId {
        self.entries()[index].doc_id
    }
}


/// Points at the next unread entry of one operator argument
///
/// Cursors never rewind. Operators create one per argument at the start of
/// an evaluation and drop them when it finishes.
#[derive(Debug)]
pub struct DaatCursor<'a, S: DocSequence + 'a> {
    source: &'a S,
    next_index: usize,
}


impl<'a, S: DocSequence + 'a> DaatCursor<'a, S> {
    pub fn new(source: &'a S) -> DaatCursor<'a, S> {
        DaatCursor {
            source: source,
            next_index: 0,
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next_index >= self.source.len()
    }

    #[inline]
    pub fn doc_id(&self) -> Option<DocId> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.source.doc_id_at(self.next_index))
        }
    }

    #[inline]
    pub fn entry(&self) -> Option<&'a S::Entry> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.source.entry(self.next_index))
        }
    }

    /// Returns the current entry if it belongs to `doc_id`
    #[inline]
    pub fn entry_for(&self, doc_id: DocId) -> Option<&'a S::Entry> {
        match self.doc_id() {
            Some(current) if current == doc_id => self.entry(),
            _ => None,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.next_index += 1;
        }
    }

    /// Moves forward until the current document is at least `target`
    ///
    /// Returns the document the cursor ends up on, or `None` if the list ran out.
    pub fn skip_to(&mut self, target: DocId) -> Option<DocId> {
        loop {
            match self.doc_id() {
                Some(doc_id) if doc_id < target => self.next_index += 1,
                other => return other,
            }
        }
    }
}


/// The smallest document id any cursor is currently on
pub fn min_doc_id<S: DocSequence>(cursors: &[DaatCursor<S>]) -> Option<DocId> {
    cursors.iter().filter_map(|cursor| cursor.doc_id()).min()
}


/// Moves the cursors onto the next document that every list contains
///
/// Candidates come from the first cursor; the others skip forward to meet
/// them. The caller advances the first cursor once it has finished with the
/// returned document. Returns `None` as soon as any list is exhausted.
pub fn next_common_doc_id<S: DocSequence>(cursors: &mut [DaatCursor<S>]) -> Option<DocId> {
    let (first, rest) = match cursors.split_first_mut() {
        Some(split) => split,
        None => return None,
    };

    'candidates: loop {
        let candidate = first.doc_id()?;

        for cursor in rest.iter_mut() {
            let doc_id = cursor.skip_to(candidate)?;

            if doc_id > candidate {
                first.advance();
                continue 'candidates;
            }
        }

        return Some(candidate);
    }
}


#[cfg(test)]
mod tests {
    use crate::posting::{Posting, InvertedList};
    use crate::score_list::ScoreList;

    use super::{DaatCursor, min_doc_id, next_common_doc_id};

    fn make_list(doc_ids: &[u32]) -> InvertedList {
        InvertedList::from_postings("body", doc_ids.iter().map(|doc_id| Posting::new(*doc_id, vec![1])).collect())
    }

    #[test]
    fn test_cursor_walks_list() {
        let list = make_list(&[2, 5]);
        let mut cursor = DaatCursor::new(&list);

        assert_eq!(cursor.doc_id(), Some(2));
        cursor.advance();
        assert_eq!(cursor.doc_id(), Some(5));
        cursor.advance();
        assert_eq!(cursor.doc_id(), None);
        assert!(cursor.is_exhausted());

        // Advancing an exhausted cursor is a no-op
        cursor.advance();
        assert!(cursor.entry().is_none());
    }

    #[test]
    fn test_skip_to() {
        let list = make_list(&[1, 4, 7, 10]);
        let mut cursor = DaatCursor::new(&list);

        assert_eq!(cursor.skip_to(5), Some(7));
        assert_eq!(cursor.skip_to(7), Some(7));
        assert_eq!(cursor.skip_to(11), None);
    }

    #[test]
    fn test_entry_for() {
        let mut scores = ScoreList::new();
        scores.add(3, 1.5);
        let cursor = DaatCursor::new(&scores);

        assert_eq!(cursor.entry_for(3).map(|entry| entry.score), Some(1.5));
        assert!(cursor.entry_for(4).is_none());
    }

    #[test]
    fn test_min_doc_id() {
        let a = make_list(&[4, 8]);
        let b = make_list(&[3]);
        let c = make_list(&[]);
        let cursors = vec![DaatCursor::new(&a), DaatCursor::new(&b), DaatCursor::new(&c)];

        assert_eq!(min_doc_id(&cursors), Some(3));
    }

    #[test]
    fn test_next_common_doc_id() {
        let a = make_list(&[1, 3, 5, 7, 9]);
        let b = make_list(&[3, 4, 9]);
        let c = make_list(&[0, 3, 9, 12]);
        let mut cursors = vec![DaatCursor::new(&a), DaatCursor::new(&b), DaatCursor::new(&c)];

        let mut common = Vec::new();
        while let Some(doc_id) = next_common_doc_id(&mut cursors) {
            common.push(doc_id);
            cursors[0].advance();
        }

        assert_eq!(common, vec![3, 9]);
    }

    #[test]
    fn test_next_common_doc_id_stops_on_empty_list() {
        let a = make_list(&[1, 2]);
        let b = make_list(&[]);
        let mut cursors = vec![DaatCursor::new(&a), DaatCursor::new(&b)];

        assert_eq!(next_common_doc_id(&mut cursors), None);
    }
}
