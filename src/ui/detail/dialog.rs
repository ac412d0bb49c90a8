use crate::format::{clean_image_url, format_date_time, format_price, or_na};
use crate::ui::detail::state::DetailDialogState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 80;

pub fn render_detail_dialog(frame: &mut Frame<'_>, area: Rect, state: &DetailDialogState) {
    let DetailDialogState::Visible { product } = state else {
        return;
    };

    let label = |name: &'static str| Span::styled(format!("{name:<12}"), Style::default().fg(MUTED_TEXT));
    let value = |text: String| Span::styled(text, Style::default().fg(HEADER_TEXT));

    let description = if product.description.trim().is_empty() {
        "No description".to_string()
    } else {
        product.description.clone()
    };

    let mut lines = vec![
        Line::from(vec![label("Category"), value(or_na(product.category_name()).to_string())]),
        Line::from(vec![label("Slug"), value(or_na(product.slug.as_deref()).to_string())]),
        Line::from(vec![label("Price"), value(format_price(product.price))]),
        Line::from(vec![label("Created"), value(format_date_time(product.creation_at.as_deref()))]),
        Line::from(vec![label("Updated"), value(format_date_time(product.updated_at.as_deref()))]),
        Line::from(""),
        Line::from(label("Description")),
    ];
    lines.extend(description.lines().map(|l| Line::from(value(format!("  {l}")))));
    lines.push(Line::from(""));
    lines.push(Line::from(label("Images")));
    if product.images.is_empty() {
        lines.push(Line::from(value("  No images".to_string())));
    } else {
        lines.extend(
            product
                .images
                .iter()
                .map(|url| Line::from(value(format!("  {}", clean_image_url(url))))),
        );
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "e: Edit  x: Delete  r: Refresh  Esc: Close",
        Style::default().fg(MUTED_TEXT),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!("#{} {}", product.id, product.title),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
