//! Portfolio project records.
//!
//! A [`Project`] is one read-only portfolio entry: display metadata, an
//! ordered technology list, optional links, and categorized long-form text
//! keyed by [`TabCategory`]. Records are constructed once when a catalog is
//! built and never mutated afterwards.
//!
//! # Wire format
//!
//! Projects serialize to camelCase JSON (`imageUrl`, `repoUrl`, `liveUrl`,
//! `techStack`), with `tabs` as an object whose keys are the exact category
//! names:
//!
//! ```rust
//! use folium_core::{Project, ProjectId, TabCategory};
//!
//! let project = Project::new(ProjectId::new(1), "Folium", "Portfolio platform.")
//!     .with_tech_stack(["Rust", "Axum"])
//!     .with_tab(TabCategory::Overview, "A catalog service and browser.");
//!
//! let json = serde_json::to_value(&project).unwrap();
//! assert_eq!(json["techStack"][0], "Rust");
//! assert_eq!(json["tabs"]["Overview"], "A catalog service and browser.");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tabs::TabCategory;

/// Stable numeric identifier for a project record.
///
/// Assigned by the catalog that serves the record; unique within one served
/// collection and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    /// Creates a project id from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProjectId> for u32 {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl FromStr for ProjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// One portfolio entry.
///
/// `repo_url`, `live_url`, and `image_url` use the empty string to mean
/// "not applicable"; the field is always present on the wire. Use the
/// `*_link` accessors to get the `Option` view of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier, unique within the served collection.
    pub id: ProjectId,
    /// Display title. Never empty in a validated record.
    pub title: String,
    /// Short display description. Never empty in a validated record.
    pub description: String,
    /// Card/detail image: absolute URL or a path under the static-asset
    /// host. Empty when the project has no image.
    #[serde(default)]
    pub image_url: String,
    /// Source repository URL; empty when not applicable.
    #[serde(default)]
    pub repo_url: String,
    /// Live deployment URL; empty when not applicable.
    #[serde(default)]
    pub live_url: String,
    /// Technologies in display order. Duplicates are permitted.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Whether the record gets visual emphasis. Not used for sorting.
    #[serde(default)]
    pub featured: bool,
    /// Long-form detail text per tab category. Categories absent from the
    /// map simply have no content for that tab.
    #[serde(default)]
    pub tabs: BTreeMap<TabCategory, String>,
}

impl Project {
    /// Creates a project with the required display fields; everything else
    /// starts empty and is filled in with the `with_*` builders.
    pub fn new<T, D>(id: ProjectId, title: T, description: D) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image_url: String::new(),
            repo_url: String::new(),
            live_url: String::new(),
            tech_stack: Vec::new(),
            featured: false,
            tabs: BTreeMap::new(),
        }
    }

    /// Sets the card/detail image URL.
    pub fn with_image_url<S: Into<String>>(mut self, url: S) -> Self {
        self.image_url = url.into();
        self
    }

    /// Sets the source repository URL.
    pub fn with_repo_url<S: Into<String>>(mut self, url: S) -> Self {
        self.repo_url = url.into();
        self
    }

    /// Sets the live deployment URL.
    pub fn with_live_url<S: Into<String>>(mut self, url: S) -> Self {
        self.live_url = url.into();
        self
    }

    /// Sets the ordered technology list.
    pub fn with_tech_stack<I, S>(mut self, techs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = techs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the featured flag.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Attaches detail text for one tab category.
    pub fn with_tab<S: Into<String>>(mut self, category: TabCategory, text: S) -> Self {
        self.tabs.insert(category, text.into());
        self
    }

    /// Checks the record's display invariants.
    ///
    /// `title` and `description` must be non-empty; everything else is
    /// optional by design. Tab keys need no check here; the type only
    /// admits the three recognized categories.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation_field("title", "must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::validation_field("description", "must not be empty"));
        }
        Ok(())
    }

    /// Image URL, or `None` when the record has no image.
    pub fn image_link(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }

    /// Repository URL, or `None` when not applicable.
    pub fn repo_link(&self) -> Option<&str> {
        non_empty(&self.repo_url)
    }

    /// Live-site URL, or `None` when not applicable.
    pub fn live_link(&self) -> Option<&str> {
        non_empty(&self.live_url)
    }

    /// Detail text for one category, or `None` when the category has no
    /// content. Missing content is an ordinary state, not an error.
    pub fn tab_content(&self, category: TabCategory) -> Option<&str> {
        self.tabs.get(&category).map(String::as_str)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

// ============================================================================
// Tests
// ============================================================================
