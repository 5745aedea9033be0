//! UI Rendering
//!
//! Draws the search screen from [`App`] state. Nothing here mutates state.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::formatters::ADDITIONAL_INFO_HEADING;
use crate::models::{SelectedItem, SupplementalMetadata};
use crate::notify::Notification;
use crate::tui::app::{App, Focus};

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;
const ERROR: Color = Color::Red;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let selected = app.controller.state().selected();
    let detail_height = selected
        .map_or(0, |selected| detail_height(selected, area.width))
        .min(area.height.saturating_sub(FIXED_ROWS));

    let [title, input, results, detail, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(detail_height),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(frame, title);
    render_input(frame, app, input);
    render_results(frame, app, results);
    if let Some(selected) = selected {
        render_detail(frame, selected, detail);
    }
    render_footer(frame, app, footer);
    render_notifications(frame, app, area, Instant::now());
}

fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" zotero-scholar ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("Zotero search with Semantic Scholar citations", Style::default().fg(MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let focused = app.focus == Focus::Input;

    let mut spans = vec![Span::raw("> ")];
    if state.query().is_empty() && !focused {
        spans.push(Span::styled("Search for articles", Style::default().fg(MUTED)));
    } else {
        spans.push(Span::raw(state.query()));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(ACCENT)));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(border_style(focused));
    if state.is_loading() {
        block = block.title_bottom(
            Line::from(format!(" {} Searching ", app.spinner())).alignment(Alignment::Right),
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let focused = app.focus == Focus::Results;

    let items: Vec<ListItem> = state
        .results()
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    item.title_or_default().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(item.creator_names()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Articles ({}) ", state.results().len()))
        .border_style(border_style(focused));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if focused && !state.results().is_empty() {
        list_state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Rows taken by the citation section below the wrapped title and creators.
const META_ROWS: u16 = 4;

/// Rows the layout reserves for everything but the detail panel.
const FIXED_ROWS: u16 = 1 + 3 + 3 + 1;

/// Rows needed by the detail panel at `width`, borders included.
///
/// The title and creators wrap, so their height depends on the width.
fn detail_height(selected: &SelectedItem, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let header = u16::try_from(detail_header(selected).line_count(inner)).unwrap_or(u16::MAX);
    let meta = if selected.is_enriched() { META_ROWS } else { 0 };
    header.saturating_add(meta).saturating_add(2)
}

fn detail_header(selected: &SelectedItem) -> Paragraph<'_> {
    let item = &selected.item;
    Paragraph::new(vec![
        Line::from(Span::styled(
            item.title_or_default(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(item.creator_names()),
    ])
    .wrap(Wrap { trim: true })
}

fn detail_meta(meta: &SupplementalMetadata) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(ADDITIONAL_INFO_HEADING, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("Citations: {}", meta.citations_display())),
        Line::from(format!("Influential Citations: {}", meta.influential_display())),
    ])
}

/// The citation section has its own fixed slot at the bottom of the panel so
/// a long title can only clip itself.
fn render_detail(frame: &mut Frame, selected: &SelectedItem, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Selected ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let meta_rows = if selected.is_enriched() { META_ROWS.min(inner.height) } else { 0 };
    let [header, meta] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(meta_rows)]).areas(inner);

    frame.render_widget(detail_header(selected), header);
    if let Some(metadata) = &selected.metadata {
        frame.render_widget(detail_meta(metadata), meta);
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hint = match app.focus {
        Focus::Input => "[Enter] Search  [Tab] Results  [Esc] Dismiss  [Ctrl+Q] Quit",
        Focus::Results => "[↑/↓] Move  [Enter] Details  [Tab] Search  [Esc] Dismiss  [Ctrl+Q] Quit",
    };
    frame.render_widget(Paragraph::new(Span::styled(hint, Style::default().fg(MUTED))), area);
}

/// Stack active notifications in the bottom-right corner, newest lowest.
fn render_notifications(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let mut bottom = area.bottom().saturating_sub(2);

    for notification in app.controller.notifications().active(now).collect::<Vec<_>>().into_iter().rev() {
        let toast = toast_area(notification, area, bottom);
        if toast.height == 0 || toast.y < area.y {
            break;
        }
        render_toast(frame, notification, toast);
        bottom = toast.y;
    }
}

fn toast_area(notification: &Notification, area: Rect, bottom: u16) -> Rect {
    let text_width = notification.title.chars().count().max(notification.description.chars().count());
    let width = u16::try_from(text_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width.saturating_sub(4));
    let height = 4; // title + description + 2 for borders

    let x = area.right().saturating_sub(width + 2);
    let y = bottom.saturating_sub(height);
    Rect::new(x, y, width, height.min(bottom.saturating_sub(area.y)))
}

fn render_toast(frame: &mut Frame, notification: &Notification, area: Rect) {
    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(ERROR));
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            notification.title.as_str(),
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(notification.description.as_str()),
    ])
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}

fn border_style(focused: bool) -> Style {
    if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::client::{CitationLookup, ItemSearch};
    use crate::controller::{Completion, SearchController, Services, completion_channel};
    use crate::error::{ClientError, ClientResult};
    use crate::models::{ResultItem, SupplementalMetadata};

    struct Unreachable;

    #[async_trait::async_trait]
    impl ItemSearch for Unreachable {
        async fn search_items(&self, _query: &str) -> ClientResult<Vec<ResultItem>> {
            Err(ClientError::status(500, "unused"))
        }
    }

    #[async_trait::async_trait]
    impl CitationLookup for Unreachable {
        async fn paper_metadata(&self, _key: &str) -> ClientResult<SupplementalMetadata> {
            Err(ClientError::status(500, "unused"))
        }
    }

    fn app() -> App {
        let services = Services::new(Arc::new(Unreachable), Arc::new(Unreachable));
        let controller = SearchController::new(services, Duration::from_secs(5));
        let (tx, _rx) = completion_channel();
        App::new(controller, tx)
    }

    fn draw(app: &App) -> String {
        draw_at(app, 100, 30)
    }

    fn draw_at(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_results_and_enriched_detail() {
        let mut app = app();
        let state = app.controller.state_mut();
        state.set_query("graph theory");
        let ticket = state.begin_search();
        app.apply(Completion::Search {
            ticket,
            outcome: Ok(vec![ResultItem::new("A1", "Graphs", &["Euler"])]),
        });
        let ticket = app.controller.state_mut().select_index(0).unwrap();
        app.apply(Completion::Enrichment {
            ticket,
            outcome: Ok(SupplementalMetadata::with_counts(42, 7)),
        });

        let screen = draw(&app);
        assert!(screen.contains("graph theory"));
        assert!(screen.contains("Graphs"));
        assert!(screen.contains("Euler"));
        assert!(screen.contains(ADDITIONAL_INFO_HEADING));
        assert!(screen.contains("Citations: 42"));
        assert!(screen.contains("Influential Citations: 7"));
    }

    #[test]
    fn test_renders_spinner_while_loading() {
        let mut app = app();
        app.controller.state_mut().begin_search();
        assert!(draw(&app).contains("Searching"));
    }

    #[test]
    fn test_renders_error_toast() {
        let mut app = app();
        app.controller.notifications_mut().error("Error fetching articles", "connection refused");
        let screen = draw(&app);
        assert!(screen.contains("Error fetching articles"));
        assert!(screen.contains("connection refused"));
    }

    #[test]
    fn test_long_title_keeps_citation_counts_visible() {
        let title = "A Comprehensive Survey of Spectral Methods in Algebraic Graph Theory \
                     With Applications That Wraps Across Lines";
        let creators = ["Euler", "Cayley", "Kirchhoff", "Sylvester", "Hamilton", "Tutte", "Erdos", "Renyi"];

        let mut app = app();
        let ticket = app.controller.state_mut().select(ResultItem::new("A1", title, &creators));
        app.apply(Completion::Enrichment {
            ticket,
            outcome: Ok(SupplementalMetadata::with_counts(42, 7)),
        });

        let screen = draw_at(&app, 80, 30);
        assert!(screen.contains("A Comprehensive Survey"));
        assert!(screen.contains("Citations: 42"));
        assert!(screen.contains("Influential Citations: 7"));
    }

    #[test]
    fn test_detail_height_grows_with_wrapping() {
        let item = ResultItem::new("A1", "word ".repeat(40).trim(), &["Euler"]);
        let selected = SelectedItem::new(item).with_metadata(SupplementalMetadata::with_counts(1, 0));

        assert!(detail_height(&selected, 40) > detail_height(&selected, 400));
        assert_eq!(detail_height(&selected, 400), 2 + 2 + META_ROWS);
    }

    #[test]
    fn test_huge_error_body_does_not_overflow_toast() {
        let mut app = app();
        app.controller.notifications_mut().error("Error fetching articles", "x".repeat(65_533));

        let screen = draw(&app);
        assert!(screen.contains("Error fetching articles"));
    }
}
