//! Fetch failure leaves a quiet, empty, fully navigable browser.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use folium_browser::{BrowserSession, CatalogClient, FetchStatus, ProjectSource};
use folium_core::ProjectId;

use crate::common::{FailingSource, HYDRATE_TIMEOUT};

/// Serves an arbitrary axum app and returns its base URL.
async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    format!("http://{addr}")
}

fn assert_navigable_while_empty(session: &BrowserSession) {
    let view = session.page_view();
    assert_eq!(view.page, 1);
    assert!(view.cards.is_empty());
    assert!(!view.prev_enabled);
    assert!(!view.next_enabled);

    // Every interaction stays a harmless no-op.
    session.next_page();
    session.prev_page();
    session.select(ProjectId::new(1));
    session.dismiss();
    assert_eq!(session.page_view().page, 1);
    assert!(session.detail_view().is_none());
}

#[tokio::test]
async fn test_failing_source_shows_empty_collection() {
    let session = BrowserSession::mount(Arc::new(FailingSource));
    let status = session.wait_hydrated(HYDRATE_TIMEOUT).await.unwrap();
    assert_eq!(status, FetchStatus::Failed);
    assert_navigable_while_empty(&session);
}

#[tokio::test]
async fn test_unreachable_catalog_fails_quietly() {
    // Reserved TEST-NET-1 address; nothing listens there.
    let client = CatalogClient::with_timeout("http://192.0.2.1:9", Duration::from_millis(100))
        .expect("build client");
    let session = BrowserSession::mount(Arc::new(client));

    let status = session.wait_hydrated(HYDRATE_TIMEOUT).await.unwrap();
    assert_eq!(status, FetchStatus::Failed);
    assert_navigable_while_empty(&session);
}

#[tokio::test]
async fn test_non_json_body_is_a_failed_fetch() {
    let base_url = spawn_app(Router::new().route("/api/projects", get(|| async { "not json" }))).await;
    let client = CatalogClient::with_timeout(&base_url, Duration::from_secs(2)).expect("build client");

    let err = client.list_projects().await.unwrap_err();
    assert!(!err.is_transient(), "a bad body will not improve on retry");

    let session = BrowserSession::mount(Arc::new(
        CatalogClient::with_timeout(&base_url, Duration::from_secs(2)).expect("build client"),
    ));
    let status = session.wait_hydrated(HYDRATE_TIMEOUT).await.unwrap();
    assert_eq!(status, FetchStatus::Failed);
    assert_navigable_while_empty(&session);
}

#[tokio::test]
async fn test_server_error_status_is_a_failed_fetch() {
    let base_url = spawn_app(Router::new().route(
        "/api/projects",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let client = CatalogClient::with_timeout(&base_url, Duration::from_secs(2)).expect("build client");

    let err = client.list_projects().await.unwrap_err();
    assert!(err.is_transient(), "a flaky upstream could recover");

    let session = BrowserSession::mount(Arc::new(client));
    let status = session.wait_hydrated(HYDRATE_TIMEOUT).await.unwrap();
    assert_eq!(status, FetchStatus::Failed);
}
