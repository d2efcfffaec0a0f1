//! Elasticsearch REST client
//!
//! Issues the three blocking requests the viewer needs:
//! - `POST /{index}/_search` with a `match` or `term` query on the path field
//! - `GET /{index}/_termvectors/{id}` with term statistics enabled
//! - `GET /_cat/count/{index}?format=json`
//!
//! Index names, ids and field names are percent-encoded into the URL, so an
//! id such as `a/b#1` reaches the right document. There is no retry and no
//! caching; every call goes over the wire.

use std::time::{Duration, Instant};

use serde_json::{Map, Value};
use ureq::http::Response;
use ureq::{Agent, Body};
use url::Url;

use super::response::{
    parse_cat_count, parse_error_reason, parse_error_type, parse_search_hits, parse_term_vectors,
};
use super::{DocumentId, IndexClient};
use crate::config::{PathQuery, ViewerConfig};
use crate::error::{Result, TfidfError};
use crate::similarity::TermStatistics;
use crate::trace_time;

/// Longest slice of an unparseable error body echoed back in messages
const MAX_REASON_CHARS: usize = 200;

/// Error type Elasticsearch reports for a missing index
const INDEX_NOT_FOUND_TYPE: &str = "index_not_found_exception";

/// Blocking Elasticsearch client
pub struct ElasticClient {
    agent: Agent,
    base_url: Url,
    path_field: String,
    path_query: PathQuery,
    text_field: String,
    user_agent: String,
}

impl ElasticClient {
    /// Create a client for the cluster and fields named in `config`
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| TfidfError::invalid_value("url", format!("{} ({})", config.url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(TfidfError::invalid_value("url", &config.url));
        }

        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .http_status_as_error(false)
            .build();

        Ok(Self {
            agent: Agent::new_with_config(agent_config),
            base_url,
            path_field: config.path_field.clone(),
            path_query: config.path_query,
            text_field: config.text_field.clone(),
            user_agent: format!(
                "tfidf-viewer/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Base URL extended by `segments`, each percent-encoded as one path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TfidfError::invalid_value("url", self.base_url.as_str()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request body looking `path` up in the configured path field
    fn path_query(&self, path: &str) -> Value {
        let mut field = Map::new();
        field.insert(self.path_field.clone(), Value::String(path.to_string()));

        let kind = match self.path_query {
            PathQuery::Match => "match",
            PathQuery::Term => "term",
        };
        let mut query = Map::new();
        query.insert(kind.to_string(), Value::Object(field));

        let mut body = Map::new();
        body.insert("query".to_string(), Value::Object(query));
        Value::Object(body)
    }

    fn get(&self, operation: &str, index: &str, url: &Url) -> Result<String> {
        tracing::debug!(%url, "GET");
        let result = self
            .agent
            .get(url.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", "application/json")
            .call();
        read_body(operation, index, result)
    }

    fn post_json(&self, operation: &str, index: &str, url: &Url, body: &Value) -> Result<String> {
        let payload = serde_json::to_string(body)?;
        tracing::debug!(%url, %payload, "POST");
        let result = self
            .agent
            .post(url.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(payload.as_str());
        read_body(operation, index, result)
    }
}

impl IndexClient for ElasticClient {
    fn search_by_path(&self, index: &str, path: &str) -> Result<Vec<DocumentId>> {
        let start = Instant::now();
        let url = self.endpoint(&[index, "_search"])?;
        let body = self.post_json("search by path", index, &url, &self.path_query(path))?;
        let ids = parse_search_hits(&body)?;
        trace_time!(start, "search_by_path", hits = ids.len());
        Ok(ids)
    }

    fn term_statistics(&self, index: &str, id: &DocumentId) -> Result<TermStatistics> {
        let start = Instant::now();
        let mut url = self.endpoint(&[index, "_termvectors", id.as_str()])?;
        url.query_pairs_mut()
            .append_pair("fields", &self.text_field)
            .append_pair("positions", "false")
            .append_pair("offsets", "false")
            .append_pair("payloads", "false")
            .append_pair("term_statistics", "true");
        let body = self.get("fetch term vectors", index, &url)?;
        let stats = parse_term_vectors(&body, &self.text_field)?;
        trace_time!(start, "term_statistics", terms = stats.len());
        Ok(stats)
    }

    fn doc_count(&self, index: &str) -> Result<u64> {
        let start = Instant::now();
        let mut url = self.endpoint(&["_cat", "count", index])?;
        url.query_pairs_mut().append_pair("format", "json");
        let body = self.get("count documents", index, &url)?;
        let count = parse_cat_count(&body)?;
        trace_time!(start, "doc_count", count = count);
        Ok(count)
    }
}

fn read_body(
    operation: &str,
    index: &str,
    result: std::result::Result<Response<Body>, ureq::Error>,
) -> Result<String> {
    let mut response = result.map_err(|e| TfidfError::transport(operation, e))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TfidfError::transport(operation, e))?;
    check_status(operation, index, status, &body)?;
    Ok(body)
}

/// Map a non-success status to the matching error.
///
/// Only a 404 whose body names `index_not_found_exception` means the index is
/// missing; any other 404 (an unknown route, say) is an HTTP failure.
fn check_status(operation: &str, index: &str, status: u16, body: &str) -> Result<()> {
    if (200..=299).contains(&status) {
        return Ok(());
    }
    if status == 404 && parse_error_type(body).as_deref() == Some(INDEX_NOT_FOUND_TYPE) {
        return Err(TfidfError::IndexNotFound {
            index: index.to_string(),
        });
    }
    Err(TfidfError::Http {
        operation: operation.to_string(),
        status,
        reason: parse_error_reason(body)
            .unwrap_or_else(|| body.chars().take(MAX_REASON_CHARS).collect()),
    })
}
