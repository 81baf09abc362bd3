use std::slice::Iter;

use crate::posting::DocId;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreListEntry {
    pub doc_id: DocId,
    pub score: f64,
}


/// Document scores in insertion order
///
/// Score-producing operators append in ascending document order, which is
/// what lets a parent walk the list with a cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreList {
    entries: Vec<ScoreListEntry>,
}


impl ScoreList {
    pub fn new() -> ScoreList {
        ScoreList {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, doc_id: DocId, score: f64) {
        debug_assert!(self.entries.last().map_or(true, |last| last.doc_id != doc_id),
                      "document {} scored twice", doc_id);

        self.entries.push(ScoreListEntry {
            doc_id: doc_id,
            score: score,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScoreListEntry] {
        &self.entries
    }

    pub fn iter(&self) -> Iter<ScoreListEntry> {
        self.entries.iter()
    }

    /// Looks up the score of a document, if it is in the list
    pub fn score_of(&self, doc_id: DocId) -> Option<f64> {
        self.entries.iter().find(|entry| entry.doc_id == doc_id).map(|entry| entry.score)
    }
}


impl<'a> IntoIterator for &'a ScoreList {
    type Item = &'a ScoreListEntry;
    type IntoIter = Iter<'a, ScoreListEntry>;

    fn into_iter(self) -> Iter<'a, ScoreListEntry> {
        self.entries.iter()
    }
}
