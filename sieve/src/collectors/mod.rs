pub mod top_score;

use crate::posting::DocId;


/// A document that a query matched, with its score
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMatch {
    pub doc_id: DocId,
    pub external_id: String,
    pub score: f64,
}


impl DocumentMatch {
    pub fn new(doc_id: DocId, external_id: String, score: f64) -> DocumentMatch {
        DocumentMatch {
            doc_id: doc_id,
            external_id: external_id,
            score: score,
        }
    }
}


pub trait Collector {
    fn collect(&mut self, doc: DocumentMatch);
}
