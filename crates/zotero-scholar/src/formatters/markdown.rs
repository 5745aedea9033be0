//! Markdown output formatting.

use crate::models::{ResultItem, SelectedItem};
use crate::notify::Notification;
use crate::state::ViewState;

/// Heading of the citation section in the detail block.
pub const ADDITIONAL_INFO_HEADING: &str = "Additional Information from Semantic Scholar";

/// Format a list of search results as Markdown.
#[must_use]
pub fn format_results_markdown(items: &[ResultItem]) -> String {
    if items.is_empty() {
        return "No articles found.\n".to_string();
    }

    let mut output = format!("# Articles ({} results)\n\n", items.len());

    for item in items {
        output.push_str(&format_item_markdown(item));
        output.push('\n');
    }

    output
}

/// Format one search result: title, then creator surnames.
#[must_use]
pub fn format_item_markdown(item: &ResultItem) -> String {
    let mut output = format!("### {}\n", item.title_or_default());

    let names = item.creator_names();
    if !names.is_empty() {
        output.push_str(&format!("{names}\n"));
    }

    output
}

/// Format the detail block of the selected item.
#[must_use]
pub fn format_selected_markdown(selected: &SelectedItem) -> String {
    let item = &selected.item;
    let mut output = format!("## {}\n\n", item.title_or_default());

    let names = item.creator_names();
    if !names.is_empty() {
        output.push_str(&format!("{names}\n\n"));
    }

    if let Some(meta) = &selected.metadata {
        output.push_str(&format!("### {ADDITIONAL_INFO_HEADING}\n\n"));
        output.push_str(&format!("Citations: {}\n", meta.citations_display()));
        output.push_str(&format!("Influential Citations: {}\n", meta.influential_display()));

        let mut extra = Vec::new();
        if let Some(year) = meta.year {
            extra.push(format!("**Year**: {year}"));
        }
        if let Some(venue) = meta.venue.as_deref().filter(|v| !v.is_empty()) {
            extra.push(format!("**Venue**: {venue}"));
        }
        if let Some(url) = &meta.url {
            extra.push(format!("[S2]({url})"));
        }
        if !extra.is_empty() {
            output.push_str(&format!("\n{}\n", extra.join(" | ")));
        }
    }

    output
}

/// Format the whole view: loading line, results, then the detail block.
#[must_use]
pub fn format_view_markdown(state: &ViewState) -> String {
    let mut output = String::new();

    if state.is_loading() {
        output.push_str("_Searching..._\n\n");
    }

    if !state.results().is_empty() || !state.is_loading() {
        output.push_str(&format_results_markdown(state.results()));
    }

    if let Some(selected) = state.selected() {
        output.push_str("\n---\n\n");
        output.push_str(&format_selected_markdown(selected));
    }

    output
}

/// Format a notification as a single line.
#[must_use]
pub fn format_notification(notification: &Notification) -> String {
    if notification.description.is_empty() {
        notification.title.clone()
    } else {
        format!("{}: {}", notification.title, notification.description)
    }
}
