//! Parsing of Elasticsearch response bodies

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, TfidfError};
use crate::similarity::{TermStatistics, TermStats};

use super::DocumentId;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct TermVectorsResponse {
    #[serde(default = "default_found")]
    found: bool,
    #[serde(default)]
    term_vectors: HashMap<String, FieldTermVector>,
}

fn default_found() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct FieldTermVector {
    #[serde(default)]
    terms: HashMap<String, TermEntry>,
}

#[derive(Debug, Deserialize)]
struct TermEntry {
    term_freq: u64,
    doc_freq: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct CatCountRow {
    count: CountValue,
}

/// `_cat` endpoints report numbers as strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountValue {
    Text(String),
    Number(u64),
}

/// Document ids of a `_search` response, in ranking order
pub fn parse_search_hits(body: &str) -> Result<Vec<DocumentId>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| TfidfError::malformed("search by path", e))?;
    Ok(response
        .hits
        .hits
        .into_iter()
        .map(|hit| DocumentId::new(hit.id))
        .collect())
}

/// Term statistics of one field of a `_termvectors` response.
///
/// A document that has no value for the field yields empty statistics.
pub fn parse_term_vectors(body: &str, field: &str) -> Result<TermStatistics> {
    let operation = "fetch term vectors";
    let mut response: TermVectorsResponse =
        serde_json::from_str(body).map_err(|e| TfidfError::malformed(operation, e))?;

    if !response.found {
        return Err(TfidfError::malformed(operation, "document not found"));
    }

    let Some(field_vector) = response.term_vectors.remove(field) else {
        return Ok(TermStatistics::new());
    };

    field_vector
        .terms
        .into_iter()
        .map(|(term, entry)| -> Result<(String, TermStats)> {
            let doc_freq = entry.doc_freq.ok_or_else(|| {
                TfidfError::malformed(operation, format!("no doc_freq for term {:?}", term))
            })?;
            Ok((term, TermStats::new(entry.term_freq, doc_freq)))
        })
        .collect()
}

/// Document count from a `_cat/count?format=json` response
pub fn parse_cat_count(body: &str) -> Result<u64> {
    let operation = "count documents";
    let rows: Vec<CatCountRow> =
        serde_json::from_str(body).map_err(|e| TfidfError::malformed(operation, e))?;
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| TfidfError::malformed(operation, "empty count response"))?;

    match row.count {
        CountValue::Number(n) => Ok(n),
        CountValue::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| TfidfError::malformed(operation, format!("invalid count {:?}", s))),
    }
}

/// Human-readable reason from an Elasticsearch error body, if there is one
pub fn parse_error_reason(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    if let Some(reason) = error.get("reason").and_then(|r| r.as_str()) {
        return Some(reason.to_string());
    }
    error.as_str().map(str::to_string)
}

/// Exception type from an Elasticsearch error body, e.g. `index_not_found_exception`
pub fn parse_error_type(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("type")?
        .as_str()
        .map(str::to_string)
}
