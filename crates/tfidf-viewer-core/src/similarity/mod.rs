//! TF-IDF weighting and cosine similarity between two documents

mod calculation;

mod normalize;

mod tfidf;

pub use calculation::cosine_similarity;
pub use normalize::{euclidean_norm, normalize, WeightedTermVector};
pub use tfidf::{tfidf_weight, to_tfidf, TermStatistics, TermStats};

use thiserror::Error;

/// Numeric failures while building or comparing term vectors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("document has no terms")]
    NoTerms,

    #[error("corpus document count is zero")]
    EmptyCorpus,

    #[error("term {term:?} has a document frequency of zero")]
    ZeroDocumentFrequency { term: String },

    #[error("all term weights are zero")]
    ZeroNorm,
}
