use serde::{Serialize, Deserialize};


pub type DocId = u32;


/// Occurrences of one term within one document
///
/// Positions are 1-based token offsets in strictly increasing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_frequency: u32,
    pub positions: Vec<u32>,
}


impl Posting {
    pub fn new(doc_id: DocId, positions: Vec<u32>) -> Posting {
        Posting {
            doc_id: doc_id,
            term_frequency: positions.len() as u32,
            positions: positions,
        }
    }
}


/// The postings of a single (term, field) pair, ordered by document id
///
/// Every list-producing operator builds a fresh one; an empty list simply
/// means nothing matched.
#[derive(Debug, Clone, PartialEq)]
pub struct InvertedList {
    pub field: String,
    pub document_frequency: u64,
    pub collection_term_frequency: u64,
    pub postings: Vec<Posting>,
}


impl InvertedList {
    pub fn new(field: &str) -> InvertedList {
        InvertedList {
            field: field.to_string(),
            document_frequency: 0,
            collection_term_frequency: 0,
            postings: Vec::new(),
        }
    }

    /// Builds a list from postings that are already sorted by document id
    pub fn from_postings(field: &str, postings: Vec<Posting>) -> InvertedList {
        let mut list = InvertedList::new(field);

        for posting in postings {
            list.push(posting);
        }

        list
    }

    pub fn append_posting(&mut self, doc_id: DocId, term_frequency: u32, positions: Vec<u32>) {
        self.push(Posting {
            doc_id: doc_id,
            term_frequency: term_frequency,
            positions: positions,
        });
    }

    fn push(&mut self, posting: Posting) {
        debug_assert!(self.postings.last().map_or(true, |last| last.doc_id < posting.doc_id),
                      "postings must be appended in ascending document order");

        self.document_frequency += 1;
        self.collection_term_frequency += posting.term_frequency as u64;
        self.postings.push(posting);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
