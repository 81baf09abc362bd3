use std::fmt;


/// Corpus statistics for the list being scored
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TermStatistics {
    /// Number of documents that have the field
    pub document_count: u64,
    /// Number of tokens in the field across the whole collection
    pub total_field_term_count: u64,
    pub document_frequency: u64,
    pub collection_term_frequency: u64,
}


#[derive(Debug, Clone, PartialEq)]
pub enum RetrievalModel {
    UnrankedBoolean,
    RankedBoolean,
    /// `k3` is accepted for completeness, no formula uses it
    Bm25 {
        k1: f64,
        b: f64,
        k3: f64,
    },
    Indri {
        mu: f64,
        lambda: f64,
    },
}


/// idf(term_docs, total_docs) = log((total_docs - term_docs + 0.5) / (term_docs + 0.5))
#[inline]
fn rsj_idf(term_docs: u64, total_docs: u64) -> f64 {
    ((total_docs as f64 - term_docs as f64 + 0.5) / (term_docs as f64 + 0.5)).ln()
}


/// mle(ctf, total_tokens) = ctf / total_tokens
#[inline]
fn mle(collection_term_frequency: u64, total_tokens: u64) -> f64 {
    if total_tokens == 0 {
        warn!("maximum likelihood estimate requested for a field with no tokens");
        return 0.0;
    }

    collection_term_frequency as f64 / total_tokens as f64
}


/// lambda * (tf + mu * mle) / (length + mu) + (1 - lambda) * mle
#[inline]
fn dirichlet(mu: f64, lambda: f64, term_frequency: u32, length: u64, mle: f64) -> f64 {
    lambda * (term_frequency as f64 + mu * mle) / (length as f64 + mu) + (1.0 - lambda) * mle
}


impl RetrievalModel {
    pub fn name(&self) -> &'static str {
        match *self {
            RetrievalModel::UnrankedBoolean => "UnrankedBoolean",
            RetrievalModel::RankedBoolean => "RankedBoolean",
            RetrievalModel::Bm25{..} => "BM25",
            RetrievalModel::Indri{..} => "Indri",
        }
    }

    pub fn is_boolean(&self) -> bool {
        match *self {
            RetrievalModel::UnrankedBoolean | RetrievalModel::RankedBoolean => true,
            _ => false,
        }
    }

    pub fn is_bm25(&self) -> bool {
        match *self {
            RetrievalModel::Bm25{..} => true,
            _ => false,
        }
    }

    pub fn is_indri(&self) -> bool {
        match *self {
            RetrievalModel::Indri{..} => true,
            _ => false,
        }
    }

    /// Whether scoring a posting needs the field statistics and document length
    pub fn needs_statistics(&self) -> bool {
        !self.is_boolean()
    }

    /// Whether a document that a term does not match still gets a non-zero score
    pub fn smooths_unmatched(&self) -> bool {
        self.is_indri()
    }

    /// Scores one posting of a list
    pub fn score(&self, term_frequency: u32, length: u64, stats: &TermStatistics) -> f64 {
        match *self {
            RetrievalModel::UnrankedBoolean => 1.0,
            RetrievalModel::RankedBoolean => term_frequency as f64,
            RetrievalModel::Bm25{k1, b, ..} => {
                if stats.document_count == 0 {
                    return 0.0;
                }

                let idf = rsj_idf(stats.document_frequency, stats.document_count);
                let average_length = stats.total_field_term_count as f64 / stats.document_count as f64;
                let tf = term_frequency as f64;

                idf * tf / (tf + k1 * ((1.0 - b) + b * length as f64 / average_length))
            }
            RetrievalModel::Indri{mu, lambda} => {
                let mle = mle(stats.collection_term_frequency, stats.total_field_term_count);

                dirichlet(mu, lambda, term_frequency, length, mle)
            }
        }
    }

    /// Score given to a document that the list does not contain
    pub fn default_score(&self, length: u64, collection_term_frequency: u64, total_field_term_count: u64) -> f64 {
        match *self {
            RetrievalModel::Indri{mu, lambda} => {
                let mle = mle(collection_term_frequency, total_field_term_count);

                dirichlet(mu, lambda, 0, length, mle)
            }
            _ => 0.0,
        }
    }
}


impl fmt::Display for RetrievalModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RetrievalModel::Bm25{k1, b, k3} => write!(f, "BM25(k1={}, b={}, k3={})", k1, b, k3),
            RetrievalModel::Indri{mu, lambda} => write!(f, "Indri(mu={}, lambda={})", mu, lambda),
            _ => write!(f, "{}", self.name()),
        }
    }
}
