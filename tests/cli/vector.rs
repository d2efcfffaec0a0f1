use crate::cli::support::{animals, mount_missing_index, viewer};
use predicates::prelude::*;
use wiremock::MockServer;

// ============================================================================
// vector command
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_vector_human_output() {
    let es = animals().await;

    viewer()
        .args(["--url", es.uri().as_str(), "vector", "news", "/data/b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "TFIDF FILE /data/b.txt\nbird 1\n",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vector_json_output() {
    let es = animals().await;

    let output = viewer()
        .args([
            "--url",
            es.uri().as_str(),
            "--format",
            "json",
            "vector",
            "news",
            "/data/a.txt",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["index"], "news");
    assert_eq!(json["path"], "/data/a.txt");
    assert_eq!(json["id"], "1");

    let terms = json["terms"].as_array().unwrap();
    assert_eq!(terms[0]["term"], "cat");
    assert_eq!(terms[1]["term"], "dog");
    let norm: f64 = terms
        .iter()
        .map(|t| t["weight"].as_f64().unwrap().powi(2))
        .sum::<f64>()
        .sqrt();
    assert!((norm - 1.0).abs() < 1e-9);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vector_missing_path() {
    let es = animals().await;

    viewer()
        .args(["--url", es.uri().as_str(), "vector", "news", "/data/nope.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File [/data/nope.txt] not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vector_missing_index() {
    let es = MockServer::start().await;
    mount_missing_index(&es, "archive").await;

    viewer()
        .args(["--url", es.uri().as_str(), "vector", "archive", "/data/a.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Index archive does not exist"));
}
