use crate::ui::app::{App, InputMode};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, app: &App) -> Paragraph<'static> {
        let hints = hints_for(app);
        let version = format!("v{} ", VERSION);

        // char count, not bytes: hints contain arrows
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(app: &App) -> &'static str {
    if app.form().is_visible() {
        " Tab: Next field │ Enter: Newline/Next │ Ctrl+S: Save │ Esc: Cancel"
    } else if app.confirm().is_visible() {
        " y: Delete │ n/Esc: Cancel"
    } else if app.detail().is_visible() {
        " e: Edit │ x: Delete │ r: Refresh │ Esc: Close"
    } else if app.mode() == InputMode::Search {
        " Type to filter │ Enter: Done │ Esc: Clear"
    } else {
        " /: Search │ t/p/d: Sort │ ←/→: Page │ +/-: Page size │ Enter: Details │ n: New │ e: Edit │ x: Delete │ s: Export │ r: Reload │ q: Quit"
    }
}
