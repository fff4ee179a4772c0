//! Handlers for the service and browsing commands.
//!
//! `serve` runs the catalog in-process until shutdown. `projects` and
//! `show` are one-shot clients: fetch the collection from a running
//! catalog, steer a [`BrowserState`] to the requested view, and print it.

use std::path::Path;

use folium_browser::{BrowserState, CatalogClient, ProjectSource};
use folium_catalog::{Catalog, CatalogConfig};
use folium_core::{ProjectId, TabCategory};
use tracing::info;

use crate::error::{Error, Result};
use crate::render;

/// Runs the catalog service until ctrl-c or SIGTERM.
pub async fn cmd_serve(config_path: Option<&Path>) -> Result<()> {
    let config = CatalogConfig::load(config_path)?;
    let catalog = match config.projects_file.as_deref() {
        Some(path) => Catalog::from_json_file(path)?,
        None => {
            info!("No projects file configured; serving the builtin collection");
            Catalog::builtin()
        }
    };
    folium_catalog::server::run(config, catalog).await?;
    Ok(())
}

/// Prints one page of the project grid.
pub async fn cmd_projects(page: usize, url: &str) -> Result<()> {
    if page == 0 {
        return Err(Error::usage("pages are numbered from 1"));
    }

    let mut state = hydrated_state(url).await?;
    for _ in 1..page {
        state.next_page();
    }

    // Paging clamps at the last page, so landing short means the page
    // does not exist.
    let view = state.page_view();
    if view.page != page {
        return Err(Error::usage(format!(
            "page {page} is out of range for {} project(s)",
            state.len()
        )));
    }

    print!("{}", render::render_page(&view));
    Ok(())
}

/// Prints one project's detail view.
pub async fn cmd_show(id: u32, tab: Option<&str>, url: &str) -> Result<()> {
    let mut state = hydrated_state(url).await?;

    // Selection resets the tab to Overview, so apply the tab flag after.
    state.select(ProjectId::new(id));
    if let Some(name) = tab {
        state.set_active_tab(name.parse::<TabCategory>()?);
    }

    match state.detail_view() {
        Some(view) => {
            print!("{}", render::render_detail(&view));
            Ok(())
        }
        None => Err(Error::usage(format!(
            "no project with id {id} in the catalog"
        ))),
    }
}

/// Fetches the full collection from `url` into a fresh browser state.
async fn hydrated_state(url: &str) -> Result<BrowserState> {
    let client = CatalogClient::new(url)?;
    let projects = client.list_projects().await?;
    let mut state = BrowserState::new();
    state.apply_fetch(Ok(projects));
    Ok(state)
}

// ============================================================================
// Tests
// ============================================================================
