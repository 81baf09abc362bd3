use std::io::{self, Write};

use sieve::{Collector, DocumentMatch, IndexError, IndexReader, ScoreList, TopScoreCollector};


/// Ranks a score list, keeping the best `cap` documents
pub fn rank<R: IndexReader + ?Sized>(scores: &ScoreList, index: &R, cap: usize) -> Result<Vec<DocumentMatch>, IndexError> {
    let mut collector = TopScoreCollector::new(cap);

    for entry in scores.iter() {
        let external_id = index.external_id(entry.doc_id)?;
        collector.collect(DocumentMatch::new(entry.doc_id, external_id, entry.score));
    }

    Ok(collector.into_sorted_vec())
}


/// Writes one query's ranking in trec_eval format
///
/// A query with no matches gets a single placeholder row so that every
/// query appears in the output.
pub fn write_trec<W: Write>(writer: &mut W, query_id: &str, docs: &[DocumentMatch], run_id: &str) -> io::Result<()> {
    if docs.is_empty() {
        return writeln!(writer, "{} Q0 dummy 1 0 {}", query_id, run_id);
    }

    for (i, doc) in docs.iter().enumerate() {
        writeln!(writer, "{} Q0 {} {} {} {}", query_id, doc.external_id, i + 1, doc.score, run_id)?;
    }

    Ok(())
}
