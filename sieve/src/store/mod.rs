pub mod memory;

use crate::errors::IndexError;
use crate::posting::{DocId, InvertedList};


/// Read-only access to a pre-built inverted index
///
/// Handles are passed explicitly into every evaluation and may be shared
/// by queries evaluated on different threads.
pub trait IndexReader: Sync {
    /// Postings of a term in a field. Unknown terms give an empty list.
    fn inverted_list(&self, term: &str, field: &str) -> Result<InvertedList, IndexError>;

    /// Number of documents that have the field
    fn doc_count(&self, field: &str) -> Result<u64, IndexError>;

    /// Number of tokens in the field across all documents
    fn total_field_term_count(&self, field: &str) -> Result<u64, IndexError>;

    fn doc_length(&self, field: &str, doc_id: DocId) -> Result<u64, IndexError>;

    fn external_id(&self, doc_id: DocId) -> Result<String, IndexError>;
}
