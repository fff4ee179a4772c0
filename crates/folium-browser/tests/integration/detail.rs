//! Detail view over a live catalog: selection, tabs, and dismissal.

use folium_browser::{BrowserSession, FetchStatus};
use folium_core::{ProjectId, TabCategory};

use crate::common::{client_for, seven_projects, spawn_catalog, HYDRATE_TIMEOUT};

async fn hydrated_session() -> BrowserSession {
    let base_url = spawn_catalog(seven_projects()).await;
    let session = BrowserSession::mount(client_for(&base_url));
    let status = session.wait_hydrated(HYDRATE_TIMEOUT).await.unwrap();
    assert_eq!(status, FetchStatus::Loaded);
    session
}

#[tokio::test]
async fn test_missing_tab_renders_empty_not_error() {
    let session = hydrated_session().await;

    // Project 5 has no Challenges content.
    session.select(ProjectId::new(5));
    let detail = session.detail_view().unwrap();
    assert_eq!(detail.active_tab, TabCategory::Overview);
    assert!(detail.tab_content.is_some());

    session.set_active_tab(TabCategory::Challenges);
    let detail = session.detail_view().unwrap();
    assert_eq!(detail.tab_content, None, "empty content, not a failure");
    assert_eq!(detail.id, ProjectId::new(5), "the view stays open");

    session.set_active_tab(TabCategory::Outcomes);
    let detail = session.detail_view().unwrap();
    assert_eq!(detail.tab_content.as_deref(), Some("Outcome notes."));
}

#[tokio::test]
async fn test_tab_clicks_never_dismiss_but_backdrop_does() {
    let session = hydrated_session().await;
    session.select(ProjectId::new(2));

    for tab in TabCategory::ALL {
        session.set_active_tab(tab);
        assert!(session.detail_view().is_some(), "tab {tab} must not dismiss");
    }

    session.dismiss();
    assert!(session.detail_view().is_none());
    session.dismiss();
    assert!(session.detail_view().is_none(), "second dismissal is harmless");
}

#[tokio::test]
async fn test_selecting_across_pages_resets_tab() {
    let session = hydrated_session().await;

    session.select(ProjectId::new(1));
    session.set_active_tab(TabCategory::Outcomes);

    session.next_page();
    session.select(ProjectId::new(6));
    let detail = session.detail_view().unwrap();
    assert_eq!(detail.id, ProjectId::new(6));
    assert_eq!(
        detail.active_tab,
        TabCategory::Overview,
        "a fresh selection starts on Overview"
    );
}

#[tokio::test]
async fn test_selecting_unknown_id_is_noop() {
    let session = hydrated_session().await;
    session.select(ProjectId::new(99));
    assert!(session.detail_view().is_none());
}
