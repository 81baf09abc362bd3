use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use roaring::RoaringBitmap;
use serde::{Serialize, Deserialize};

use crate::errors::IndexError;
use crate::posting::{DocId, Posting, InvertedList};
use crate::store::IndexReader;
use crate::token::Token;


#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryIndexStoreField {
    pub docs: RoaringBitmap,
    pub terms: BTreeMap<String, Vec<Posting>>,
    pub lengths: BTreeMap<DocId, u64>,
    pub num_tokens: u64,
}


impl MemoryIndexStoreField {
    pub fn new() -> MemoryIndexStoreField {
        MemoryIndexStoreField::default()
    }
}


/// An index held entirely in memory
///
/// Documents are added as already analyzed token streams and get dense
/// internal ids starting from 0. The whole store serializes to JSON so a
/// pre-built snapshot can be opened later.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryIndexStore {
    fields: BTreeMap<String, MemoryIndexStoreField>,
    external_ids: Vec<String>,
}


impl MemoryIndexStore {
    pub fn new() -> MemoryIndexStore {
        MemoryIndexStore::default()
    }

    /// Opens a JSON snapshot of a store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<MemoryIndexStore, IndexError> {
        let file = File::open(path)?;
        let store = serde_json::from_reader(BufReader::new(file))?;

        Ok(store)
    }

    /// Writes the store as a JSON snapshot that `open` can read back
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IndexError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;

        Ok(())
    }

    pub fn reader<'a>(&'a self) -> MemoryIndexStoreReader<'a> {
        MemoryIndexStoreReader {
            store: self,
        }
    }

    pub fn num_docs(&self) -> usize {
        self.external_ids.len()
    }

    pub fn insert_document(&mut self, external_id: &str, fields: HashMap<String, Vec<Token>>) -> DocId {
        let doc_id = self.external_ids.len() as DocId;

        for (field_name, tokens) in fields {
            let field = self.fields.entry(field_name).or_insert_with(MemoryIndexStoreField::new);
            field.docs.insert(doc_id);
            field.num_tokens += tokens.len() as u64;
            field.lengths.insert(doc_id, tokens.len() as u64);

            // Group positions by term
            let mut term_positions: BTreeMap<String, Vec<u32>> = BTreeMap::new();
            for token in tokens {
                term_positions.entry(token.term).or_insert_with(Vec::new).push(token.position);
            }

            for (term, mut positions) in term_positions {
                positions.sort();
                positions.dedup();

                field.terms.entry(term).or_insert_with(Vec::new).push(Posting::new(doc_id, positions));
            }
        }

        self.external_ids.push(external_id.to_string());
        doc_id
    }
}


#[derive(Debug, Clone, Copy)]
pub struct MemoryIndexStoreReader<'a> {
    store: &'a MemoryIndexStore,
}


impl<'a> MemoryIndexStoreReader<'a> {
    fn check_doc_id(&self, doc_id: DocId) -> Result<(), IndexError> {
        if (doc_id as usize) < self.store.external_ids.len() {
            Ok(())
        } else {
            Err(IndexError::UnknownDocument(doc_id))
        }
    }
}


impl<'a> IndexReader for MemoryIndexStoreReader<'a> {
    fn inverted_list(&self, term: &str, field: &str) -> Result<InvertedList, IndexError> {
        let postings = self.store.fields.get(field)
            .and_then(|field| field.terms.get(term))
            .cloned()
            .unwrap_or_else(Vec::new);

        Ok(InvertedList::from_postings(field, postings))
    }

    fn doc_count(&self, field: &str) -> Result<u64, IndexError> {
        Ok(self.store.fields.get(field).map_or(0, |field| field.docs.len()))
    }

    fn total_field_term_count(&self, field: &str) -> Result<u64, IndexError> {
        Ok(self.store.fields.get(field).map_or(0, |field| field.num_tokens))
    }

    fn doc_length(&self, field: &str, doc_id: DocId) -> Result<u64, IndexError> {
        self.check_doc_id(doc_id)?;

        // Documents without the field have length 0
        Ok(self.store.fields.get(field)
            .and_then(|field| field.lengths.get(&doc_id))
            .cloned()
            .unwrap_or(0))
    }

    fn external_id(&self, doc_id: DocId) -> Result<String, IndexError> {
        self.store.external_ids.get(doc_id as usize)
            .cloned()
            .ok_or(IndexError::UnknownDocument(doc_id))
    }
}
