//! Pagination over a live catalog: seven projects, page size three.

use folium_browser::{BrowserSession, FetchStatus, ProjectSource};

use crate::common::{client_for, seven_projects, spawn_catalog, HYDRATE_TIMEOUT};

#[tokio::test]
async fn test_seven_projects_browse_end_to_end() {
    let base_url = spawn_catalog(seven_projects()).await;
    let session = BrowserSession::mount(client_for(&base_url));

    let status = session.wait_hydrated(HYDRATE_TIMEOUT).await.unwrap();
    assert_eq!(status, FetchStatus::Loaded);

    // Page 1: first three cards, Previous disabled, Next enabled.
    let page1 = session.page_view();
    assert_eq!(page1.page, 1);
    assert_eq!(page1.page_count, 3);
    assert_eq!(titles(&page1), vec!["Project 1", "Project 2", "Project 3"]);
    assert!(!page1.prev_enabled);
    assert!(page1.next_enabled);

    // Page 2: next three, both controls enabled.
    session.next_page();
    let page2 = session.page_view();
    assert_eq!(titles(&page2), vec!["Project 4", "Project 5", "Project 6"]);
    assert!(page2.prev_enabled);
    assert!(page2.next_enabled);

    // Page 3: the remainder card, Next disabled.
    session.next_page();
    let page3 = session.page_view();
    assert_eq!(titles(&page3), vec!["Project 7"]);
    assert!(page3.prev_enabled);
    assert!(!page3.next_enabled);

    // Walking past the end changes nothing.
    session.next_page();
    assert_eq!(session.page_view().page, 3);

    // And back to the start.
    session.prev_page();
    session.prev_page();
    let back = session.page_view();
    assert_eq!(back.page, 1);
    assert!(!back.prev_enabled);
}

#[tokio::test]
async fn test_fetch_twice_yields_identical_collections() {
    let base_url = spawn_catalog(seven_projects()).await;
    let client = client_for(&base_url);

    let first = client.list_projects().await.unwrap();
    let second = client.list_projects().await.unwrap();
    assert_eq!(first, second, "same order, same content, every time");
}

#[tokio::test]
async fn test_badges_survive_the_wire() {
    let base_url = spawn_catalog(seven_projects()).await;
    let session = BrowserSession::mount(client_for(&base_url));
    session.wait_hydrated(HYDRATE_TIMEOUT).await.unwrap();

    let card = &session.page_view().cards[0];
    assert_eq!(card.badges.len(), 2);
    assert_eq!(card.badges[0].label, "Rust");
    assert_ne!(card.badges[0].style, folium_browser::badge::FALLBACK_STYLE);
    assert_eq!(card.badges[1].style, folium_browser::badge::FALLBACK_STYLE);
    assert!(!card.badges[1].blurb.is_empty());
}

fn titles(page: &folium_browser::PageView) -> Vec<&str> {
    page.cards.iter().map(|c| c.title.as_str()).collect()
}
