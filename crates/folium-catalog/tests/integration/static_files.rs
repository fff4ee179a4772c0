//! Static-asset serving under `/files` (the resume download path).

use folium_catalog::{Catalog, CatalogConfig};
use reqwest::StatusCode;

use crate::common::TestServer;

#[tokio::test]
async fn test_resume_is_downloadable_byte_for_byte() {
    let assets = tempfile::tempdir().unwrap();
    let resume = b"%PDF-1.4 resume body";
    std::fs::write(assets.path().join("FoliumResume.pdf"), resume).unwrap();

    let mut config = CatalogConfig::default();
    config.assets.dir = assets.path().to_path_buf();
    let server = TestServer::spawn(config, Catalog::builtin()).await;

    let response = reqwest::get(server.url("/files/FoliumResume.pdf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/pdf"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), resume);
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let assets = tempfile::tempdir().unwrap();
    let mut config = CatalogConfig::default();
    config.assets.dir = assets.path().to_path_buf();
    let server = TestServer::spawn(config, Catalog::builtin()).await;

    let response = reqwest::get(server.url("/files/absent.pdf")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
