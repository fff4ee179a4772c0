//! Where project records come from.
//!
//! The browser is written against [`ProjectSource`], not against HTTP:
//! anything that can produce the full collection once can back a session.
//! Production uses [`CatalogClient`] over the catalog service; tests plug in
//! canned sources.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use folium_core::Project;

use crate::error::{Error, Result};

/// Default end-to-end timeout for the one fetch a session performs.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A one-shot supplier of the complete project collection.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetches every project record, in catalog order.
    async fn list_projects(&self) -> Result<Vec<Project>>;
}

/// HTTP implementation of [`ProjectSource`] against a catalog service.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client for a catalog at `base_url` (scheme and authority,
    /// e.g. `http://127.0.0.1:4170`) with the default timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Creates a client with an explicit fetch timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The catalog base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ProjectSource for CatalogClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self
            .client
            .get(format!("{}/api/projects", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        response.json::<Vec<Project>>().await.map_err(|e| {
            if e.is_decode() {
                Error::decode(e.to_string())
            } else {
                Error::Http(e)
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
