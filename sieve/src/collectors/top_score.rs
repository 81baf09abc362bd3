use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::collectors::{Collector, DocumentMatch};


/// Upper bound on the heap space reserved up front. Larger caps grow on demand.
const MAX_INITIAL_CAPACITY: usize = 1024;


/// An f64 that cannot be NaN.
/// Documents are ordered by score but NaN cannot be ordered, so scores are
/// converted into RealF64 first and NaN scores are rejected
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
struct RealF64(f64);

impl RealF64 {
    fn new(val: f64) -> Option<RealF64> {
        if val.is_nan() {
            None
        } else {
            Some(RealF64(val))
        }
    }
}

impl Eq for RealF64 {}

impl Ord for RealF64 {
    fn cmp(&self, other: &RealF64) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}


#[derive(Debug, Clone)]
struct RankedDocument {
    score: RealF64,
    doc: DocumentMatch,
}


impl Ord for RankedDocument {
    /// Greater means ranked lower: lower score first, then higher external id
    fn cmp(&self, other: &RankedDocument) -> Ordering {
        other.score.cmp(&self.score)
            .then_with(|| self.doc.external_id.cmp(&other.doc.external_id))
    }
}

impl PartialEq for RankedDocument {
    fn eq(&self, other: &RankedDocument) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedDocument {}

impl PartialOrd for RankedDocument {
    fn partial_cmp(&self, other: &RankedDocument) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


/// Keeps the best `max_docs` documents seen
///
/// Documents rank by descending score. Ties are broken by ascending
/// external id so the ranking does not depend on internal ids.
pub struct TopScoreCollector {
    max_docs: usize,
    heap: BinaryHeap<RankedDocument>,
}


impl TopScoreCollector {
    pub fn new(max_docs: usize) -> TopScoreCollector {
        TopScoreCollector {
            max_docs: max_docs,
            heap: BinaryHeap::with_capacity(max_docs.saturating_add(1).min(MAX_INITIAL_CAPACITY)),
        }
    }

    /// The collected documents, best first
    pub fn into_sorted_vec(self) -> Vec<DocumentMatch> {
        self.heap.into_sorted_vec().into_iter().map(|ranked| ranked.doc).collect()
    }
}


impl Collector for TopScoreCollector {
    fn collect(&mut self, doc: DocumentMatch) {
        if self.max_docs == 0 {
            return;
        }

        let score = match RealF64::new(doc.score) {
            Some(score) => score,
            None => {
                warn!("ignoring document '{}' with NaN score", doc.external_id);
                return;
            }
        };

        self.heap.push(RankedDocument {
            score: score,
            doc: doc,
        });

        // Now reduce the heap size if it's too big
        if self.heap.len() > self.max_docs {
            self.heap.pop();
        }
    }
}


#[cfg(test)]
mod tests {
    use std::f64;

    use crate::collectors::{Collector, DocumentMatch};

    use super::TopScoreCollector;

    fn doc(doc_id: u32, external_id: &str, score: f64) -> DocumentMatch {
        DocumentMatch::new(doc_id, external_id.to_string(), score)
    }

    fn external_ids(collector: TopScoreCollector) -> Vec<String> {
        collector.into_sorted_vec().into_iter().map(|doc| doc.external_id).collect()
    }

    #[test]
    fn test_top_score_collector_inital_state() {
        let collector = TopScoreCollector::new(10);

        assert!(collector.into_sorted_vec().is_empty());
    }

    #[test]
    fn test_top_score_collector_collect() {
        let mut collector = TopScoreCollector::new(10);

        collector.collect(doc(0, "a", 1.0));
        collector.collect(doc(1, "b", 0.5));
        collector.collect(doc(2, "c", 2.0));

        assert_eq!(external_ids(collector), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_top_score_collector_truncate() {
        let mut collector = TopScoreCollector::new(2);

        collector.collect(doc(0, "a", 1.0));
        collector.collect(doc(1, "b", 0.5));
        collector.collect(doc(2, "c", 2.0));

        assert_eq!(external_ids(collector), vec!["c", "a"]);
    }

    #[test]
    fn test_ties_break_on_external_id() {
        let mut collector = TopScoreCollector::new(10);

        collector.collect(doc(0, "zeta", 1.0));
        collector.collect(doc(1, "alpha", 1.0));
        collector.collect(doc(2, "mu", 3.0));

        assert_eq!(external_ids(collector), vec!["mu", "alpha", "zeta"]);
    }

    #[test]
    fn test_truncate_keeps_lower_external_id_on_tie() {
        let mut collector = TopScoreCollector::new(1);

        collector.collect(doc(0, "b", 1.0));
        collector.collect(doc(1, "a", 1.0));

        assert_eq!(external_ids(collector), vec!["a"]);
    }

    #[test]
    fn test_nan_scores_are_ignored() {
        let mut collector = TopScoreCollector::new(10);

        collector.collect(doc(0, "a", f64::NAN));
        collector.collect(doc(1, "b", 1.0));

        assert_eq!(external_ids(collector), vec!["b"]);
    }

    #[test]
    fn test_zero_cap() {
        let mut collector = TopScoreCollector::new(0);

        collector.collect(doc(0, "a", 1.0));

        assert!(collector.into_sorted_vec().is_empty());
    }

    #[test]
    fn test_unbounded_cap() {
        let mut collector = TopScoreCollector::new(usize::MAX);

        collector.collect(doc(0, "a", 1.0));
        collector.collect(doc(1, "b", 2.0));

        assert_eq!(external_ids(collector), vec!["b", "a"]);
    }
}
