use crate::store::memory::MemoryIndexStore;
use crate::token::Token;


/// Splits pre-analyzed text on whitespace, numbering positions from 1
pub fn tokens(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, term)| Token::new(term, i as u32 + 1))
        .collect()
}


/// A store with one "body" field per document, ids assigned in order
pub fn make_body_store(bodies: &[&str]) -> MemoryIndexStore {
    let mut store = MemoryIndexStore::new();

    for (i, body) in bodies.iter().enumerate() {
        store.insert_document(&format!("doc-{}", i), hashmap! {
            "body".to_string() => tokens(body),
        });
    }

    store
}
