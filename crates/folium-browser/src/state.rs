//! Local view state for the project browser.
//!
//! Everything after the single startup fetch is local: which page of cards
//! is visible, which project's detail view is open, which tab it shows.
//! All transitions are synchronous `&mut self` methods with no-op semantics
//! at the boundaries: walking past the last page, selecting an unknown id,
//! and dismissing twice are all harmless.

use folium_core::{Project, ProjectId, TabCategory};

use crate::error::Result;

/// Cards shown per page.
pub const PAGE_SIZE: usize = 3;

/// Outcome of the session's one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Fetch issued, no resolution yet. The browser renders an empty page.
    Pending,
    /// Snapshot arrived and was applied.
    Loaded,
    /// Fetch failed; the browser keeps rendering the empty collection.
    Failed,
}

impl FetchStatus {
    /// Returns `true` before the fetch resolves.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchStatus::Pending)
    }

    /// Returns `true` once a snapshot has been applied.
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchStatus::Loaded)
    }

    /// Returns `true` when the one fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchStatus::Failed)
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStatus::Pending => write!(f, "pending"),
            FetchStatus::Loaded => write!(f, "loaded"),
            FetchStatus::Failed => write!(f, "failed"),
        }
    }
}

/// The browser's complete view state.
///
/// Pages are 1-based. A freshly constructed state renders page 1 of an
/// empty collection, so rendering before hydration needs no special case.
#[derive(Debug)]
pub struct BrowserState {
    projects: Vec<Project>,
    fetch: FetchStatus,
    current_page: usize,
    selected: Option<ProjectId>,
    active_tab: TabCategory,
}

impl BrowserState {
    /// Empty, un-hydrated state: page 1, nothing selected, Overview tab.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            fetch: FetchStatus::Pending,
            current_page: 1,
            selected: None,
            active_tab: TabCategory::default(),
        }
    }

    // ------------------------------------------------------------------------
    // Hydration
    // ------------------------------------------------------------------------

    /// Applies the resolution of the startup fetch.
    ///
    /// Guarded: only a `Pending` state accepts a resolution. A second
    /// resolution, or one arriving after the session was torn down, is a
    /// no-op rather than a stale write.
    ///
    /// Failure is absorbed, not surfaced: one warning on the diagnostic
    /// channel, and the browser keeps serving the empty collection with no
    /// retry.
    pub fn apply_fetch(&mut self, outcome: Result<Vec<Project>>) {
        if !self.fetch.is_pending() {
            tracing::debug!(status = %self.fetch, "Ignoring late fetch resolution");
            return;
        }
        match outcome {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "Applying project snapshot");
                self.projects = projects;
                self.fetch = FetchStatus::Loaded;
                self.clamp_page();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Project fetch failed; rendering empty collection");
                self.fetch = FetchStatus::Failed;
            }
        }
    }

    /// Pulls the page back into range after the collection changes size.
    /// Today the collection is written exactly once, so this only matters
    /// if a snapshot is smaller than the page the user already reached.
    fn clamp_page(&mut self) {
        let last = self.page_count().max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }

    /// Fetch outcome so far.
    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch
    }

    // ------------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------------

    /// Current 1-based page number.
    pub fn page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages; 0 for an empty collection.
    pub fn page_count(&self) -> usize {
        self.projects.len().div_ceil(PAGE_SIZE)
    }

    /// The records visible on the current page: the slice
    /// `[(page-1)*3, page*3)` clipped to the collection bounds.
    pub fn visible_projects(&self) -> &[Project] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        if start >= self.projects.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.projects.len());
        &self.projects[start..end]
    }

    /// Whether a further page exists.
    pub fn can_next(&self) -> bool {
        self.current_page * PAGE_SIZE < self.projects.len()
    }

    /// Whether a previous page exists.
    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Advances one page when [`can_next`](Self::can_next); no-op otherwise.
    pub fn next_page(&mut self) {
        if self.can_next() {
            self.current_page += 1;
        }
    }

    /// Steps back one page when [`can_prev`](Self::can_prev); no-op otherwise.
    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.current_page -= 1;
        }
    }

    // ------------------------------------------------------------------------
    // Selection and tabs
    // ------------------------------------------------------------------------

    /// Opens the detail view for a project.
    ///
    /// Only ids present in the snapshot select; an unknown id changes
    /// nothing. A fresh selection always starts on the Overview tab, even
    /// when re-selecting the same project.
    pub fn select(&mut self, id: ProjectId) {
        if self.projects.iter().any(|p| p.id == id) {
            self.selected = Some(id);
            self.active_tab = TabCategory::Overview;
        }
    }

    /// Closes the detail view. Covers both the close control and the
    /// outside click; idempotent.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    /// Switches the detail tab. Never touches the selection; interactions
    /// inside the detail view must not dismiss it.
    pub fn set_active_tab(&mut self, tab: TabCategory) {
        self.active_tab = tab;
    }

    /// Currently selected id, if a detail view is open.
    pub fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    /// The selected record, if a detail view is open.
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected
            .and_then(|id| self.projects.iter().find(|p| p.id == id))
    }

    /// Tab currently shown in the detail view.
    pub fn active_tab(&self) -> TabCategory {
        self.active_tab
    }

    // ------------------------------------------------------------------------
    // Snapshot access
    // ------------------------------------------------------------------------

    /// The full snapshot, in served order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the snapshot is empty (un-hydrated, failed, or genuinely
    /// empty collection).
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
