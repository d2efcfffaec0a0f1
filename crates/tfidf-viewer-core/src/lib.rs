//! tfidf-viewer core library
//!
//! TF-IDF weighting of documents held in an Elasticsearch index and cosine
//! similarity between two of them.

pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod similarity;
pub mod viewer;
