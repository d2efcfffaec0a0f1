//! CLI commands for tfidf-viewer

pub mod compare;
pub mod dispatch;
pub mod vector;
