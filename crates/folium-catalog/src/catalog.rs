//! Immutable, validated project collection.
//!
//! A [`Catalog`] is built once at startup, from the compiled-in demo
//! collection or from a user-authored JSON file, validated up front, and
//! never mutated afterwards. Handlers share it through an `Arc` and read it
//! without locking.

use std::collections::BTreeSet;
use std::path::Path;

use folium_core::{Project, ProjectId, TabCategory};

use crate::error::{Error, Result};

/// The served collection of portfolio projects.
///
/// Input order is the canonical served order; nothing downstream re-sorts.
/// Every record has passed [`Project::validate`] and ids are unique.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog from records, validating each one and rejecting
    /// duplicate ids. The input order becomes the served order.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for project in &projects {
            project.validate()?;
            if !seen.insert(project.id) {
                return Err(folium_core::Error::DuplicateId { id: project.id }.into());
            }
        }
        Ok(Self { projects })
    }

    /// The compiled-in demo collection: three projects, one featured with
    /// detail text on every tab, one with partial tabs, one with none.
    ///
    /// Serves as the out-of-the-box collection when no projects file is
    /// configured.
    pub fn builtin() -> Self {
        let projects = vec![
            Project::new(
                ProjectId::new(1),
                "Folium",
                "Portfolio catalog service and browser, with a React frontend.",
            )
            .with_image_url("/images/folium.png")
            .with_repo_url("https://github.com/folium-dev/folium")
            .with_live_url("https://folium-dev.github.io")
            .with_tech_stack(["Rust", "Axum", "React", "Tailwind"])
            .with_featured(true)
            .with_tab(
                TabCategory::Overview,
                "A read-only portfolio platform: an HTTP catalog of project \
                 records and a paginated browser over them.",
            )
            .with_tab(
                TabCategory::Challenges,
                "Keeping the browser responsive before the catalog answers, \
                 and ignoring a fetch that lands after the view is gone.",
            )
            .with_tab(
                TabCategory::Outcomes,
                "One fetch per visit, three cards per page, and a detail view \
                 that survives clicks anywhere inside it.",
            ),
            Project::new(
                ProjectId::new(2),
                "Desk Timer",
                "A focus timer for the desktop, built on .NET WinForms.",
            )
            .with_image_url("/images/timer.png")
            .with_repo_url("https://github.com/folium-dev/desk-timer")
            .with_tech_stack(["C#", ".NET", "WinForms", "Windows"]),
            Project::new(
                ProjectId::new(3),
                "Paper Trail",
                "Full-stack Django app for tracking a reading list with notes.",
            )
            .with_image_url("/images/paper-trail.png")
            .with_repo_url("https://github.com/folium-dev/paper-trail")
            .with_tech_stack(["Python", "Django", "SQLite", "HTML", "CSS", "JavaScript"])
            .with_tab(
                TabCategory::Overview,
                "Shelves, notes, and reading progress over a small SQLite schema.",
            )
            .with_tab(
                TabCategory::Outcomes,
                "Daily-driver for two years; the schema has not needed a migration since.",
            ),
        ];

        // The tests below re-run Self::new over this data.
        Self { projects }
    }

    /// Loads a catalog from a JSON array of project records.
    ///
    /// Read once at startup when the configuration names a projects file.
    /// There is no reload path; edit the file and restart.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let projects: Vec<Project> = serde_json::from_str(&contents)
            .map_err(|e| Error::malformed(path, e.to_string()))?;
        tracing::info!(path = %path.display(), count = projects.len(), "Loaded projects file");
        Self::new(projects)
    }

    /// All records in served order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up one record by id.
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterates records in served order.
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
