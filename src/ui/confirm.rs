//! Delete confirmation dialog.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible { id: u64, title: String },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn pending_id(&self) -> Option<u64> {
        match self {
            Self::Visible { id, .. } => Some(*id),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    AskDelete { id: u64, title: String },
    Dismiss,
}

impl Intent for ConfirmIntent {}

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::AskDelete { id, title } => ConfirmDialogState::Visible { id, title },
            ConfirmIntent::Dismiss => ConfirmDialogState::Hidden,
        }
    }
}

pub fn render_confirm_dialog(frame: &mut Frame<'_>, area: Rect, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible { id, title } = state else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            "Are you sure you want to delete this product?",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("#{id} {title}"),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: Delete  n/Esc: Cancel",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4) as u16;
    let rect = centered_rect_by_size(area, width, lines.len() as u16 + 2);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled("Delete", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
