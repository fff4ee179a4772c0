//! Render-model projections of the browser state.
//!
//! Pure read-side views: everything a renderer needs for the card grid and
//! the detail modal, with badge styling resolved and links already in their
//! `Option` form. No styling decisions live here beyond the badge classes.

use folium_core::{ProjectId, TabCategory};

use crate::badge::{badge_for, TechBadge};
use crate::state::BrowserState;

/// One card on the project grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Record id, for selection on click.
    pub id: ProjectId,
    /// Card title.
    pub title: String,
    /// Short description under the title.
    pub description: String,
    /// Whether the card gets featured emphasis.
    pub featured: bool,
    /// Card image, when the record has one.
    pub image_link: Option<String>,
    /// Resolved badges, one per tech-stack entry, in record order.
    pub badges: Vec<TechBadge>,
}

/// The visible page of cards plus pagination control state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Current 1-based page.
    pub page: usize,
    /// Total pages; 0 when the collection is empty.
    pub page_count: usize,
    /// Cards on this page, at most three.
    pub cards: Vec<CardView>,
    /// Whether the Previous control is enabled.
    pub prev_enabled: bool,
    /// Whether the Next control is enabled.
    pub next_enabled: bool,
}

/// The detail view of the selected project.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Selected record id.
    pub id: ProjectId,
    /// Project title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Resolved badges in record order.
    pub badges: Vec<TechBadge>,
    /// Tab currently shown.
    pub active_tab: TabCategory,
    /// Content of the active tab; `None` renders as empty, not as an error.
    pub tab_content: Option<String>,
    /// Repository link, when applicable.
    pub repo_link: Option<String>,
    /// Live-site link, when applicable.
    pub live_link: Option<String>,
    /// Detail image, when the record has one.
    pub image_link: Option<String>,
}

impl BrowserState {
    /// Projects the current page for rendering.
    pub fn page_view(&self) -> PageView {
        let cards = self
            .visible_projects()
            .iter()
            .map(|p| CardView {
                id: p.id,
                title: p.title.clone(),
                description: p.description.clone(),
                featured: p.featured,
                image_link: p.image_link().map(str::to_string),
                badges: p.tech_stack.iter().map(|t| badge_for(t)).collect(),
            })
            .collect();

        PageView {
            page: self.page(),
            page_count: self.page_count(),
            cards,
            prev_enabled: self.can_prev(),
            next_enabled: self.can_next(),
        }
    }

    /// Projects the open detail view, or `None` when nothing is selected.
    pub fn detail_view(&self) -> Option<DetailView> {
        let project = self.selected_project()?;
        Some(DetailView {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            badges: project.tech_stack.iter().map(|t| badge_for(t)).collect(),
            active_tab: self.active_tab(),
            tab_content: project
                .tab_content(self.active_tab())
                .map(str::to_string),
            repo_link: project.repo_link().map(str::to_string),
            live_link: project.live_link().map(str::to_string),
            image_link: project.image_link().map(str::to_string),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
