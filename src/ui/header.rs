use crate::ui::app::{App, InputMode};
use crate::ui::theme::{
    ACCENT, FIELD_FOCUS, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    app: &'a App,
}

impl<'a> Header<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let view = self.app.view();

        let status = if self.app.is_loading() {
            Span::styled("⟳ Loading", Style::default().fg(STATUS_WARN))
        } else {
            Span::styled(
                format!("{} products", view.all().len()),
                Style::default().fg(MUTED_TEXT),
            )
        };
        let sort = match view.sort_key() {
            Some(key) => format!("Sort: {} {}", key.label(), view.sort_direction().arrow()),
            None => "Sort: none".to_string(),
        };

        let title_line = Line::from(vec![
            Span::styled(
                "  Product Catalog",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            status,
            Span::styled("  │  ", separator_style),
            Span::styled(sort, text_style),
        ]);

        let searching = self.app.mode() == InputMode::Search;
        let query = self.app.search_input();
        let search_value = if query.is_empty() && !searching {
            Span::styled("press / to search by title", Style::default().fg(MUTED_TEXT))
        } else if searching {
            Span::styled(
                format!("{query}▏"),
                Style::default().fg(HEADER_TEXT).bg(FIELD_FOCUS),
            )
        } else {
            Span::styled(query.to_string(), text_style)
        };
        let search_line = Line::from(vec![
            Span::styled("  Search: ", Style::default().fg(MUTED_TEXT)),
            search_value,
        ]);

        Paragraph::new(vec![title_line, search_line]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
