//! Access to the external search index
//!
//! The viewer never talks to Elasticsearch directly; it goes through
//! [`IndexClient`] so the three queries it needs can be swapped for a fake.

mod elastic;
mod response;

pub use elastic::ElasticClient;
pub use response::{
    parse_cat_count, parse_error_reason, parse_error_type, parse_search_hits, parse_term_vectors,
};

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::similarity::TermStatistics;

/// Opaque document handle assigned by the index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Queries the viewer issues against the search index.
///
/// Every method returns [`crate::error::TfidfError::IndexNotFound`] when the
/// named index does not exist.
pub trait IndexClient {
    /// Documents whose path field matches `path`, in the order the index ranks them
    fn search_by_path(&self, index: &str, path: &str) -> Result<Vec<DocumentId>>;

    /// Term and document frequencies for every distinct term of the text field
    fn term_statistics(&self, index: &str, id: &DocumentId) -> Result<TermStatistics>;

    /// Total number of documents stored in the index
    fn doc_count(&self, index: &str) -> Result<u64>;
}

impl<T: IndexClient + ?Sized> IndexClient for &T {
    fn search_by_path(&self, index: &str, path: &str) -> Result<Vec<DocumentId>> {
        (**self).search_by_path(index, path)
    }

    fn term_statistics(&self, index: &str, id: &DocumentId) -> Result<TermStatistics> {
        (**self).term_statistics(index, id)
    }

    fn doc_count(&self, index: &str) -> Result<u64> {
        (**self).doc_count(index)
    }
}
