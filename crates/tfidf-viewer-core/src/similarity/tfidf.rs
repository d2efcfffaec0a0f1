use std::collections::BTreeMap;

use super::normalize::{normalize, WeightedTermVector};
use super::VectorError;

/// Raw statistics the index reports for one term of one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermStats {
    /// Occurrences of the term in the document
    pub term_freq: u64,
    /// Number of documents in the corpus containing the term
    pub doc_freq: u64,
}

impl TermStats {
    pub fn new(term_freq: u64, doc_freq: u64) -> Self {
        TermStats {
            term_freq,
            doc_freq,
        }
    }
}

/// Per-document term statistics keyed by term.
///
/// Both frequencies live in the same entry and the map iterates in ascending
/// term order, so weights always come out sorted and correctly paired.
pub type TermStatistics = BTreeMap<String, TermStats>;

/// Weight of a single term: `(tf / max_freq) * log2(corpus / df)`
pub fn tfidf_weight(term_freq: u64, max_freq: u64, doc_freq: u64, corpus_doc_count: u64) -> f64 {
    let tf = term_freq as f64 / max_freq as f64;
    let idf = (corpus_doc_count as f64 / doc_freq as f64).log2();
    tf * idf
}

/// Convert a document's term statistics into a unit-length TF-IDF vector
pub fn to_tfidf(
    stats: &TermStatistics,
    corpus_doc_count: u64,
) -> Result<WeightedTermVector, VectorError> {
    if corpus_doc_count == 0 {
        return Err(VectorError::EmptyCorpus);
    }

    let max_freq = stats
        .values()
        .map(|s| s.term_freq)
        .max()
        .ok_or(VectorError::NoTerms)?;
    if max_freq == 0 {
        return Err(VectorError::ZeroNorm);
    }

    let mut weights = Vec::with_capacity(stats.len());
    for (term, s) in stats {
        if s.doc_freq == 0 {
            return Err(VectorError::ZeroDocumentFrequency { term: term.clone() });
        }
        weights.push((
            term.clone(),
            tfidf_weight(s.term_freq, max_freq, s.doc_freq, corpus_doc_count),
        ));
    }

    normalize(weights)
}
