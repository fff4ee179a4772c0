//! Wire-contract tests for `/api/projects` and `/healthz`.

use std::io::Write;

use folium_catalog::{Catalog, CatalogConfig};
use reqwest::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use serde_json::Value;

use crate::common::TestServer;

#[tokio::test]
async fn test_projects_is_camel_case_json_array() {
    let server = TestServer::spawn_builtin().await;

    let body: Value = reqwest::get(server.url("/api/projects"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let records = body.as_array().expect("top-level JSON array");
    assert_eq!(records.len(), 3);

    let first = records[0].as_object().expect("project object");
    for key in [
        "id",
        "title",
        "description",
        "imageUrl",
        "repoUrl",
        "liveUrl",
        "techStack",
        "featured",
        "tabs",
    ] {
        assert!(first.contains_key(key), "missing wire key {key}");
    }
    assert!(first["techStack"].is_array());
    assert!(first["tabs"].is_object());
    assert!(first["tabs"]["Overview"].is_string());
}

#[tokio::test]
async fn test_projects_twice_yields_identical_bodies() {
    let server = TestServer::spawn_builtin().await;

    let first: Value = reqwest::get(server.url("/api/projects"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = reqwest::get(server.url("/api/projects"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second, "collection is fixed for the process lifetime");
}

#[tokio::test]
async fn test_projects_order_matches_catalog_order() {
    let server = TestServer::spawn_builtin().await;

    let body: Value = reqwest::get(server.url("/api/projects"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let served: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    let expected: Vec<u64> = Catalog::builtin()
        .iter()
        .map(|p| u32::from(p.id) as u64)
        .collect();
    assert_eq!(served, expected);
}

#[tokio::test]
async fn test_file_backed_collection_is_served() {
    let source = Catalog::builtin();
    let json = serde_json::to_string(source.projects()).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let catalog = Catalog::from_json_file(file.path()).unwrap();
    let server = TestServer::spawn(CatalogConfig::default(), catalog).await;

    let body: Value = reqwest::get(server.url("/api/projects"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), source.len());
}

#[tokio::test]
async fn test_healthz_reports_collection_size() {
    let server = TestServer::spawn_builtin().await;

    let body: Value = reqwest::get(server.url("/healthz"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["projects"], 3);
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_cors_grants_only_the_configured_origin() {
    let mut config = CatalogConfig::default();
    config.cors.allowed_origin = "https://portfolio.example".to_string();
    let server = TestServer::spawn(config, Catalog::builtin()).await;

    let client = reqwest::Client::new();

    let granted = client
        .get(server.url("/api/projects"))
        .header(ORIGIN, "https://portfolio.example")
        .send()
        .await
        .unwrap();
    assert_eq!(
        granted.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://portfolio.example"
    );

    let denied = client
        .get(server.url("/api/projects"))
        .header(ORIGIN, "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert!(!denied.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));
}
