//! Technology-name normalization.
//!
//! Badge styling and any other per-technology lookup key off a canonical
//! form of the display name, so `"React"` and `" REACT "` resolve to the
//! same entry while the display string keeps its original casing.

/// Canonical lookup form of a technology name: trimmed, ASCII-lowercased,
/// with runs of internal whitespace collapsed to single spaces.
///
/// ```rust
/// use folium_core::normalize_tech;
///
/// assert_eq!(normalize_tech("  ASP.NET   Core "), "asp.net core");
/// assert_eq!(normalize_tech("React"), "react");
/// ```
pub fn normalize_tech(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for ch in word.chars() {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
