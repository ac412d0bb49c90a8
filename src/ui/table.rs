//! Product table, pagination line and summary/preview band.

use crate::format::{format_date, format_price, or_na};
use crate::ui::app::App;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use crate::view::{PageItem, PageWindow, SortKey, ViewState};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

const PREVIEW_CHARS: usize = 160;

pub fn render_table(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if let Some(error) = app.load_error() {
        let message = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let view = app.view().current_view();
    if view.rows.is_empty() {
        let text = if app.is_loading() {
            "Loading products..."
        } else {
            "No products found"
        };
        let message = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let header_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("ID"),
        Cell::from(column_title(app.view(), SortKey::Title)),
        Cell::from("Slug"),
        Cell::from(column_title(app.view(), SortKey::Price)),
        Cell::from("Category"),
        Cell::from("Image"),
        Cell::from(column_title(app.view(), SortKey::CreationAt)),
    ])
    .style(header_style);

    let rows = view.rows.iter().enumerate().map(|(offset, product)| {
        Row::new(vec![
            Cell::from((view.start_index + offset + 1).to_string()),
            Cell::from(product.id.to_string()),
            Cell::from(product.title.clone()),
            Cell::from(or_na(product.slug.as_deref()).to_string()),
            Cell::from(format_price(product.price)),
            Cell::from(or_na(product.category_name()).to_string()),
            Cell::from(image_name(product.thumbnail().as_deref())),
            Cell::from(format_date(product.creation_at.as_deref())),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT))
        .highlight_symbol("› ");

    let mut state = TableState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Last path segment of the thumbnail URL; the full URL is in the detail dialog.
fn image_name(url: Option<&str>) -> String {
    match url.and_then(|u| u.trim_end_matches('/').rsplit('/').next()) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "N/A".to_string(),
    }
}

/// Column header with ▲/▼ when the column is the active sort key.
fn column_title(view: &ViewState, key: SortKey) -> String {
    let heading = match key {
        SortKey::Title => "Title",
        SortKey::Price => "Price",
        SortKey::CreationAt => "Created",
    };
    match view.sort_key() {
        Some(active) if active == key => {
            format!("{heading} {}", view.sort_direction().arrow())
        }
        _ => heading.to_string(),
    }
}

pub fn render_pager(frame: &mut Frame<'_>, area: Rect, window: &PageWindow) {
    frame.render_widget(
        Paragraph::new(pager_line(window)).alignment(Alignment::Center),
        area,
    );
}

fn pager_line(window: &PageWindow) -> Line<'static> {
    let enabled = Style::default().fg(HEADER_TEXT);
    let disabled = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
    let nav = |label: &'static str, on: bool| Span::styled(label, if on { enabled } else { disabled });

    let mut spans = vec![nav("‹ Prev ", window.has_previous())];
    for item in &window.items {
        match item {
            PageItem::Page { number, active: true } => spans.push(Span::styled(
                format!(" [{number}] "),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            PageItem::Page { number, .. } => {
                spans.push(Span::styled(format!(" {number} "), enabled));
            }
            PageItem::Ellipsis => spans.push(Span::styled(" … ", disabled)),
        }
    }
    spans.push(nav(" Next ›", window.has_next()));
    Line::from(spans)
}

/// Summary line plus a short description of the selected row.
pub fn render_info(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let view = app.view().current_view();
    let mut lines = vec![Line::from(vec![
        Span::styled(view.summary(), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!(
                "  │  Page {}/{}  │  {} per page",
                view.current_page,
                view.total_pages,
                app.view().page_size()
            ),
            Style::default().fg(MUTED_TEXT),
        ),
    ])];

    if let Some(product) = app.selected_product() {
        lines.push(Line::from(Span::styled(
            preview(&product.description),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn preview(description: &str) -> String {
    let flat = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(PREVIEW_CHARS).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::page_window;

    #[test]
    fn pager_marks_active_page_and_gaps() {
        let line = pager_line(&page_window(20, 10));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[10]"));
        assert!(text.contains(" 1 "));
        assert!(text.contains(" 20 "));
        assert_eq!(text.matches('…').count(), 2);
    }

    #[test]
    fn preview_flattens_and_truncates() {
        assert_eq!(preview("a\n  b"), "a b");
        let long = "x".repeat(PREVIEW_CHARS + 10);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS + 1);
    }

    #[test]
    fn image_name_takes_file_part() {
        assert_eq!(image_name(Some("https://i.imgur.com/QkIa5tT.jpeg")), "QkIa5tT.jpeg");
        assert_eq!(image_name(Some("")), "N/A");
        assert_eq!(image_name(None), "N/A");
    }

    #[test]
    fn active_sort_column_gets_arrow() {
        let mut view = ViewState::default();
        view.apply_sort(SortKey::Price);
        assert_eq!(column_title(&view, SortKey::Price), "Price ▲");
        assert_eq!(column_title(&view, SortKey::Title), "Title");
    }
}
