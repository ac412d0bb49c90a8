use crate::form::FormField;
use crate::ui::form::state::FormDialogState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, FIELD_FOCUS, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 72;

pub fn render_form_dialog(frame: &mut Frame<'_>, area: Rect, state: &FormDialogState) {
    let FormDialogState::Visible {
        mode,
        form,
        focused,
        errors,
    } = state
    else {
        return;
    };

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let is_focused = field == *focused;
        let label_style = if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let value = form.field(field);
        let value_style = if is_focused {
            Style::default().fg(HEADER_TEXT).bg(FIELD_FOCUS)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let mut value_lines: Vec<&str> = value.split('\n').collect();
        if !field.is_multiline() {
            value_lines.truncate(1);
        }
        let last = value_lines.len() - 1;
        for (idx, text) in value_lines.into_iter().enumerate() {
            let cursor = if is_focused && idx == last { "▏" } else { "" };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{text}{cursor}"), value_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    for error in errors {
        lines.push(Line::from(Span::styled(
            format!("• {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    if !errors.is_empty() {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Tab/Shift+Tab: Field  Enter: Newline/Next  Ctrl+S: Save  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(mode.title(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
