//! Tech-badge styling lookup.
//!
//! Maps a technology name to a display style class and a one-line blurb.
//! The lookup is total: names the table does not know get a neutral badge,
//! so an unrecognized technology can never break a card render.

use folium_core::normalize_tech;

/// Neutral style for technologies the table does not recognize.
pub const FALLBACK_STYLE: &str = "bg-gray-200 text-gray-800";

/// Neutral blurb for technologies the table does not recognize.
pub const FALLBACK_BLURB: &str = "Technology tag";

/// Display data for one technology badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechBadge {
    /// The name as authored in the record, trimmed.
    pub label: String,
    /// Style class for the badge chip.
    pub style: &'static str,
    /// One-line description shown on hover.
    pub blurb: &'static str,
}

/// Looks up badge styling for a technology name.
///
/// Matching is case-insensitive and ignores surrounding or doubled
/// whitespace; the returned label preserves the authored casing.
pub fn badge_for(tech: &str) -> TechBadge {
    let (style, blurb) = match normalize_tech(tech).as_str() {
        "react" => ("bg-blue-100 text-blue-800", "A JavaScript library for building UIs"),
        "tailwind" => ("bg-teal-100 text-teal-800", "Utility-first CSS framework"),
        "asp.net core" => ("bg-purple-100 text-purple-800", "Cross-platform web framework"),
        "c#" => ("bg-purple-100 text-purple-800", "Modern object-oriented language"),
        "python" => ("bg-yellow-100 text-yellow-800", "Versatile high-level language"),
        "django" => ("bg-green-100 text-green-800", "High-level Python web framework"),
        "javascript" => ("bg-yellow-200 text-yellow-900", "Language for web development"),
        "html" => ("bg-red-100 text-red-800", "Markup language for documents"),
        "css" => ("bg-indigo-100 text-indigo-800", "Style sheet language"),
        "sqlite" => ("bg-gray-300 text-gray-900", "Lightweight SQL database"),
        ".net" => ("bg-blue-200 text-blue-900", "Microsoft development platform"),
        "winforms" => ("bg-orange-100 text-orange-800", "Windows desktop UI framework"),
        "windows" => ("bg-sky-100 text-sky-800", "Microsoft operating system"),
        "rust" => ("bg-orange-200 text-orange-900", "Systems language focused on safety"),
        "axum" => ("bg-rose-100 text-rose-800", "Ergonomic Rust web framework"),
        "tokio" => ("bg-emerald-100 text-emerald-800", "Async runtime for Rust"),
        _ => (FALLBACK_STYLE, FALLBACK_BLURB),
    };
    TechBadge {
        label: tech.trim().to_string(),
        style,
        blurb,
    }
}

// ============================================================================
// Tests
// ============================================================================
