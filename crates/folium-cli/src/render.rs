//! Plain-text rendering of browser views.
//!
//! The CLI prints the same projections a graphical frontend renders:
//! [`PageView`] as a card list with a pager line, [`DetailView`] as one
//! card plus the active tab's text.

use folium_browser::{DetailView, PageView, TechBadge};

/// Renders one page of project cards.
pub fn render_page(view: &PageView) -> String {
    if view.cards.is_empty() {
        return "No projects to show.\n".to_string();
    }

    let mut out = String::new();
    for card in &view.cards {
        let marker = if card.featured { " (featured)" } else { "" };
        out.push_str(&format!("#{} {}{marker}\n", card.id, card.title));
        out.push_str(&format!("    {}\n", card.description));
        if let Some(tech) = tech_line(&card.badges) {
            out.push_str(&format!("    {tech}\n"));
        }
        out.push('\n');
    }
    out.push_str(&format!("Page {} of {}\n", view.page, view.page_count));
    out
}

/// Renders the detail view of one project.
pub fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    out.push_str(&format!("#{} {}\n", view.id, view.title));
    out.push_str(&format!("    {}\n", view.description));
    if let Some(tech) = tech_line(&view.badges) {
        out.push_str(&format!("    {tech}\n"));
    }
    if let Some(repo) = &view.repo_link {
        out.push_str(&format!("    repo: {repo}\n"));
    }
    if let Some(live) = &view.live_link {
        out.push_str(&format!("    live: {live}\n"));
    }
    if let Some(image) = &view.image_link {
        out.push_str(&format!("    image: {image}\n"));
    }

    out.push_str(&format!("\n[{}]\n", view.active_tab));
    match &view.tab_content {
        Some(text) => out.push_str(&format!("{text}\n")),
        None => out.push_str("(nothing recorded under this tab)\n"),
    }
    out
}

fn tech_line(badges: &[TechBadge]) -> Option<String> {
    if badges.is_empty() {
        return None;
    }
    let labels: Vec<&str> = badges.iter().map(|b| b.label.as_str()).collect();
    Some(format!("tech: {}", labels.join(", ")))
}

// ============================================================================
// Tests
// ============================================================================
