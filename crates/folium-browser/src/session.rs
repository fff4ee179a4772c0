//! One browser visit, from mount to teardown.
//!
//! [`BrowserSession::mount`] issues the session's single fetch and hands
//! back a cheap-clone handle over the shared [`BrowserState`]. All view
//! operations stay synchronous; the only async edges are the fetch itself
//! and [`wait_hydrated`](BrowserSession::wait_hydrated) for callers that
//! want to render after hydration rather than before.
//!
//! A detached session guarantees the late fetch resolution writes nothing:
//! the spawned task drops the outcome when the liveness flag is down, and
//! the state machine's own guard covers any double resolution.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

use folium_core::{ProjectId, TabCategory};

use crate::error::Result;
use crate::source::ProjectSource;
use crate::state::{BrowserState, FetchStatus};
use crate::view::{DetailView, PageView};

/// Handle to a mounted browser session.
///
/// Cheap to clone (Arc internals); every clone observes and drives the same
/// view state.
#[derive(Clone)]
pub struct BrowserSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    state: Mutex<BrowserState>,
    live: AtomicBool,
    fetch_tx: watch::Sender<FetchStatus>,
}

impl BrowserSession {
    /// Mounts a session: fresh empty state, exactly one fetch in flight.
    ///
    /// The session is usable immediately; rendering before hydration shows
    /// page 1 of an empty collection.
    pub fn mount(source: Arc<dyn ProjectSource>) -> Self {
        let (fetch_tx, _rx) = watch::channel(FetchStatus::Pending);
        let session = Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(BrowserState::new()),
                live: AtomicBool::new(true),
                fetch_tx,
            }),
        };

        tracing::debug!("Browser session mounted; fetch issued");
        let task = session.clone();
        tokio::spawn(async move {
            let outcome = source.list_projects().await;
            task.resolve(outcome);
        });

        session
    }

    /// Marks the session dead. A fetch resolving after this point is
    /// dropped before it can touch the state.
    pub fn detach(&self) {
        self.inner.live.store(false, Ordering::Release);
        tracing::debug!("Browser session detached");
    }

    /// Whether the session is still mounted.
    pub fn is_live(&self) -> bool {
        self.inner.live.load(Ordering::Acquire)
    }

    /// Waits until the fetch resolves, up to `timeout`.
    ///
    /// Returns the resolved status ([`FetchStatus::Loaded`] or
    /// [`FetchStatus::Failed`]; failure is a rendering state here, not an
    /// error), or an error message on timeout.
    pub async fn wait_hydrated(&self, timeout: Duration) -> std::result::Result<FetchStatus, String> {
        let mut rx = self.inner.fetch_tx.subscribe();
        let deadline = tokio::time::sleep(timeout);
        tokio::pin!(deadline);

        loop {
            let status = *rx.borrow_and_update();
            if !status.is_pending() {
                return Ok(status);
            }
            tokio::select! {
                _ = &mut deadline => {
                    return Err(format!("session not hydrated after {timeout:?}"));
                }
                result = rx.changed() => {
                    if result.is_err() {
                        return Err("session fetch channel closed".to_string());
                    }
                }
            }
        }
    }

    fn resolve(&self, outcome: Result<Vec<folium_core::Project>>) {
        if !self.is_live() {
            tracing::debug!("Dropping fetch resolution for detached session");
            return;
        }
        let mut state = self.state();
        state.apply_fetch(outcome);
        let status = state.fetch_status();
        drop(state);
        self.inner.fetch_tx.send_replace(status);
    }

    fn state(&self) -> MutexGuard<'_, BrowserState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ------------------------------------------------------------------------
    // Synchronous view operations
    // ------------------------------------------------------------------------

    /// Fetch outcome so far.
    pub fn fetch_status(&self) -> FetchStatus {
        self.state().fetch_status()
    }

    /// Renders the current page.
    pub fn page_view(&self) -> PageView {
        self.state().page_view()
    }

    /// Renders the open detail view, if any.
    pub fn detail_view(&self) -> Option<DetailView> {
        self.state().detail_view()
    }

    /// Advances one page when possible.
    pub fn next_page(&self) {
        self.state().next_page();
    }

    /// Steps back one page when possible.
    pub fn prev_page(&self) {
        self.state().prev_page();
    }

    /// Opens the detail view for a known id.
    pub fn select(&self, id: ProjectId) {
        self.state().select(id);
    }

    /// Closes the detail view.
    pub fn dismiss(&self) {
        self.state().dismiss();
    }

    /// Switches the detail tab.
    pub fn set_active_tab(&self, tab: TabCategory) {
        self.state().set_active_tab(tab);
    }
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("live", &self.is_live())
            .field("fetch", &self.fetch_status())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
