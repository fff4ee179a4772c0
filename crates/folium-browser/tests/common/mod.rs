//! Common fixtures for browser integration tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folium_browser::{CatalogClient, Error, ProjectSource, Result};
use folium_catalog::{routes, Catalog, CatalogConfig};
use folium_core::{Project, ProjectId, TabCategory};

/// Generous bound for a localhost fetch to resolve.
pub const HYDRATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Seven projects: two full pages of three and one remainder card, with a
/// spread of known and unknown technologies and deliberately uneven tabs.
pub fn seven_projects() -> Vec<Project> {
    (1..=7u32)
        .map(|id| {
            let mut project = Project::new(
                ProjectId::new(id),
                format!("Project {id}"),
                format!("Description for project {id}."),
            )
            .with_tech_stack(["Rust", "mystery-tech"])
            .with_tab(TabCategory::Overview, format!("Overview of project {id}."));
            if id != 5 {
                // Project 5 has no Challenges content on purpose.
                project = project.with_tab(TabCategory::Challenges, "Challenge notes.");
            }
            project.with_tab(TabCategory::Outcomes, "Outcome notes.")
        })
        .collect()
}

/// Spawns a catalog service for the given records and returns its base URL.
pub async fn spawn_catalog(projects: Vec<Project>) -> String {
    let catalog = Catalog::new(projects).expect("valid test collection");
    let app = routes::app(&CatalogConfig::default(), Arc::new(catalog)).expect("build app");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    format!("http://{addr}")
}

/// Client for a spawned catalog with a short timeout.
pub fn client_for(base_url: &str) -> Arc<CatalogClient> {
    Arc::new(CatalogClient::with_timeout(base_url, HYDRATE_TIMEOUT).expect("build client"))
}

/// A source that always fails with a non-transient error.
pub struct FailingSource;

#[async_trait]
impl ProjectSource for FailingSource {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        Err(Error::decode("canned failure"))
    }
}
