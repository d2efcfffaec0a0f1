use crate::cli::support::{
    animals, mount_count, mount_missing_index, mount_search, mount_terms, term_vectors, viewer,
};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// compare command
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_disjoint_documents() {
    let es = animals().await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/b.txt"])
        .assert()
        .success()
        .stdout("Similarity = 0.00000\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_identical_documents() {
    let es = animals().await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/c.txt"])
        .assert()
        .success()
        .stdout("Similarity = 1.00000\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_print_shows_both_vectors() {
    let es = animals().await;

    let output = viewer()
        .args([
            "--url",
            es.uri().as_str(),
            "compare",
            "news",
            "/data/a.txt",
            "/data/b.txt",
            "--print",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "TFIDF FILE /data/a.txt");
    assert!(lines[1].starts_with("cat 0.98985"));
    assert!(lines[2].starts_with("dog 0.14210"));
    assert!(lines[3].starts_with("----"));
    assert_eq!(lines[4], "TFIDF FILE /data/b.txt");
    assert_eq!(lines[5], "bird 1");
    assert_eq!(lines.last(), Some(&"Similarity = 0.00000"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output() {
    let es = animals().await;

    let output = viewer()
        .args([
            "--url",
            es.uri().as_str(),
            "--format",
            "json",
            "compare",
            "news",
            "/data/a.txt",
            "/data/c.txt",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["index"], "news");
    assert!((json["similarity"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(json["documents"][0]["path"], "/data/a.txt");
    assert_eq!(json["documents"][0]["id"], "1");
    assert_eq!(json["documents"][1]["id"], "3");
    assert!(json["documents"][0].get("terms").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_with_print_includes_terms() {
    let es = animals().await;

    let output = viewer()
        .args([
            "--url",
            es.uri().as_str(),
            "--format",
            "json",
            "compare",
            "news",
            "/data/a.txt",
            "/data/b.txt",
            "--print",
        ])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let terms = json["documents"][1]["terms"].as_array().unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0]["term"], "bird");
    assert_eq!(terms[0]["weight"], 1.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_path_is_data_error() {
    let es = animals().await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/zzz.txt"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File [/data/zzz.txt] not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_index_reports_and_prints_no_score() {
    let es = MockServer::start().await;
    mount_missing_index(&es, "archive").await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "archive", "/data/a.txt", "/data/b.txt"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Similarity").not())
        .stderr(predicate::str::contains("Index archive does not exist"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_index_json_envelope() {
    let es = MockServer::start().await;
    mount_missing_index(&es, "archive").await;

    let output = viewer()
        .args([
            "--url",
            es.uri().as_str(),
            "--format",
            "json",
            "compare",
            "archive",
            "/data/a.txt",
            "/data/b.txt",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let envelope = stderr.lines().last().unwrap();
    let json: serde_json::Value = serde_json::from_str(envelope).unwrap();
    assert_eq!(json["error"]["type"], "index_not_found");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ids_with_reserved_characters() {
    let es = MockServer::start().await;
    mount_search(&es, "/data/a.txt", &["a/b#1"]).await;
    mount_search(&es, "/data/b.txt", &["has space"]).await;
    Mock::given(method("GET"))
        .and(path("/news/_termvectors/a%2Fb%231"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(term_vectors("a/b#1", "text", &[("cat", 3, 2)])),
        )
        .expect(1)
        .mount(&es)
        .await;
    Mock::given(method("GET"))
        .and(path("/news/_termvectors/has%20space"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(term_vectors("has space", "text", &[("cat", 1, 2)])),
        )
        .expect(1)
        .mount(&es)
        .await;
    mount_count(&es, 10).await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/b.txt"])
        .assert()
        .success()
        .stdout("Similarity = 1.00000\n");

    es.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_untyped_not_found_is_not_a_missing_index() {
    let es = MockServer::start().await;
    mount_search(&es, "/data/a.txt", &["1"]).await;
    mount_search(&es, "/data/b.txt", &["2"]).await;
    mount_terms(&es, "1", &[("cat", 3, 2)]).await;
    mount_count(&es, 10).await;
    Mock::given(method("GET"))
        .and(path("/news/_termvectors/2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no handler found"))
        .mount(&es)
        .await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/b.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HTTP 404"))
        .stderr(predicate::str::contains("does not exist").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_first_search_hit_is_used() {
    let es = MockServer::start().await;
    mount_search(&es, "/data/dup.txt", &["7", "8"]).await;
    mount_search(&es, "/data/b.txt", &["2"]).await;
    mount_terms(&es, "7", &[("bird", 1, 4)]).await;
    mount_terms(&es, "8", &[("cat", 1, 2)]).await;
    mount_terms(&es, "2", &[("bird", 2, 4)]).await;
    mount_count(&es, 10).await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/dup.txt", "/data/b.txt"])
        .assert()
        .success()
        .stdout("Similarity = 1.00000\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_corpus_count_requested_once() {
    let es = MockServer::start().await;
    mount_search(&es, "/data/a.txt", &["1"]).await;
    mount_search(&es, "/data/b.txt", &["2"]).await;
    mount_terms(&es, "1", &[("cat", 3, 2)]).await;
    mount_terms(&es, "2", &[("bird", 2, 4)]).await;
    Mock::given(method("GET"))
        .and(path("/_cat/count/news"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"count": "10"}])),
        )
        .expect(1)
        .mount(&es)
        .await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/b.txt"])
        .assert()
        .success();

    es.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_degenerate_document_is_data_error() {
    let es = MockServer::start().await;
    mount_search(&es, "/data/a.txt", &["1"]).await;
    mount_search(&es, "/data/empty.txt", &["9"]).await;
    mount_terms(&es, "1", &[("cat", 3, 2)]).await;
    mount_terms(&es, "9", &[]).await;
    mount_count(&es, 10).await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/empty.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("degenerate term vector for 9"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_is_failure() {
    let es = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/news/_search"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "error": {"type": "cluster_block_exception", "reason": "cluster is read-only"},
            "status": 503
        })))
        .mount(&es)
        .await;

    viewer()
        .args(["--url", es.uri().as_str(), "compare", "news", "/data/a.txt", "/data/b.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HTTP 503: cluster is read-only"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_suppresses_error_message() {
    let es = animals().await;

    viewer()
        .args([
            "--url",
            es.uri().as_str(),
            "--quiet",
            "compare",
            "news",
            "/data/a.txt",
            "/data/zzz.txt",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
