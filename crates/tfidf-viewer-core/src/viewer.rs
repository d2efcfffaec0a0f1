//! Lookup and orchestration over an [`IndexClient`]
//!
//! A comparison issues two path lookups, two term-statistics fetches and a
//! single corpus-count fetch, then weights both documents and compares them.

use std::time::Instant;

use serde::Serialize;

use crate::error::{Result, TfidfError};
use crate::index::{DocumentId, IndexClient};
use crate::similarity::{to_tfidf, WeightedTermVector};
use crate::trace_time;

/// A document resolved from its path together with its weighted vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentVector {
    pub path: String,
    pub id: DocumentId,
    #[serde(rename = "terms")]
    pub vector: WeightedTermVector,
}

/// Result of comparing two documents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub similarity: f64,
    pub documents: [DocumentVector; 2],
}

/// Drives path resolution, weighting and comparison against one index client
pub struct Viewer<C: IndexClient> {
    client: C,
}

impl<C: IndexClient> Viewer<C> {
    pub fn new(client: C) -> Self {
        Viewer { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolve a file path to the first document the index returns for it
    pub fn resolve_path(&self, index: &str, path: &str) -> Result<DocumentId> {
        let hits = self.client.search_by_path(index, path)?;
        if hits.len() > 1 {
            tracing::debug!(path, hits = hits.len(), "multiple documents match, using first");
        }
        hits.into_iter()
            .next()
            .ok_or_else(|| TfidfError::PathNotFound {
                path: path.to_string(),
            })
    }

    /// Fetch one document's statistics and weight them against the corpus size
    pub fn document_vector(
        &self,
        index: &str,
        id: &DocumentId,
        corpus_doc_count: u64,
    ) -> Result<WeightedTermVector> {
        let stats = self.client.term_statistics(index, id)?;
        tracing::debug!(%id, terms = stats.len(), "fetched term statistics");
        to_tfidf(&stats, corpus_doc_count).map_err(|e| TfidfError::degenerate(id.as_str(), e))
    }

    /// Weighted vector for a single path
    pub fn vector_for_path(&self, index: &str, path: &str) -> Result<DocumentVector> {
        let id = self.resolve_path(index, path)?;
        let corpus = self.client.doc_count(index)?;
        let vector = self.document_vector(index, &id, corpus)?;
        Ok(DocumentVector {
            path: path.to_string(),
            id,
            vector,
        })
    }

    /// Compare two documents by path.
    ///
    /// Returns `Ok(None)` when the index does not exist; every other failure
    /// is returned as an error.
    pub fn compare(&self, index: &str, first: &str, second: &str) -> Result<Option<Comparison>> {
        match self.try_compare(index, first, second) {
            Ok(comparison) => Ok(Some(comparison)),
            Err(TfidfError::IndexNotFound { index }) => {
                tracing::warn!(%index, "index does not exist");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn try_compare(&self, index: &str, first: &str, second: &str) -> Result<Comparison> {
        let start = Instant::now();

        let first_id = self.resolve_path(index, first)?;
        let second_id = self.resolve_path(index, second)?;
        let corpus = self.client.doc_count(index)?;
        tracing::debug!(index, corpus, "corpus size");

        let first_vector = self.document_vector(index, &first_id, corpus)?;
        let second_vector = self.document_vector(index, &second_id, corpus)?;

        let similarity = first_vector
            .cosine_similarity(&second_vector)
            .map_err(|e| TfidfError::degenerate(format!("{} / {}", first_id, second_id), e))?;

        trace_time!(start, "compare", similarity = similarity);

        Ok(Comparison {
            similarity,
            documents: [
                DocumentVector {
                    path: first.to_string(),
                    id: first_id,
                    vector: first_vector,
                },
                DocumentVector {
                    path: second.to_string(),
                    id: second_id,
                    vector: second_vector,
                },
            ],
        })
    }
}
