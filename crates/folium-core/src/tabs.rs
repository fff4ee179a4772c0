//! Detail-view tab categories.
//!
//! A project's long-form text is split across a fixed, small set of
//! categories. The set is closed: a `tabs` mapping may only use these three
//! names as keys, and anything else on the wire is a malformed record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Category of long-form detail text attached to a project.
///
/// Declaration order is the canonical display order, and `Ord` follows it,
/// so a `BTreeMap<TabCategory, String>` iterates (and serializes) tabs in
/// the order a detail view presents them.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TabCategory {
    /// What the project is and how it is put together.
    #[default]
    Overview,
    /// What was hard and how it was handled.
    Challenges,
    /// What shipped and what it demonstrates.
    Outcomes,
}

impl TabCategory {
    /// All categories in canonical display order.
    pub const ALL: [TabCategory; 3] = [
        TabCategory::Overview,
        TabCategory::Challenges,
        TabCategory::Outcomes,
    ];

    /// Returns the display name, which is also the exact wire key used in a
    /// project's `tabs` object.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TabCategory::Overview => "Overview",
            TabCategory::Challenges => "Challenges",
            TabCategory::Outcomes => "Outcomes",
        }
    }
}

impl fmt::Display for TabCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabCategory {
    type Err = Error;

    /// Parses a category name case-insensitively.
    ///
    /// The wire format is exact (`"Overview"` etc.); the relaxed parse is for
    /// human input such as CLI flags.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(TabCategory::Overview),
            "challenges" => Ok(TabCategory::Challenges),
            "outcomes" => Ok(TabCategory::Outcomes),
            _ => Err(Error::UnknownTab {
                name: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
