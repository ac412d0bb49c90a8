use crate::ui::app::App;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::detail::render_detail_dialog;
use crate::ui::footer::Footer;
use crate::ui::form::render_form_dialog;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::notice::NoticeBoard;
use crate::ui::table::{render_info, render_pager, render_table};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const NOTICE_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app).widget(), header);

    frame.render_widget(Clear, body);
    let (table, pager, info) = body_regions(body);
    render_table(frame, table, app);
    render_pager(frame, pager, &app.view().page_window());
    render_info(frame, info, app);

    frame.render_widget(Footer::new().widget(footer, app), footer);

    // at most one dialog is open at a time; confirmation sits on top
    render_detail_dialog(frame, body, app.detail());
    render_form_dialog(frame, body, app.form());
    render_confirm_dialog(frame, body, app.confirm());

    render_notices(frame, area, app.notices());
}

/// Stacks notices in the top-right corner, newest at the bottom.
fn render_notices(frame: &mut Frame<'_>, area: Rect, notices: &NoticeBoard) {
    let width = NOTICE_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let mut y = area.y;

    for notice in notices.iter() {
        let rows = notice
            .message
            .lines()
            .map(|line| line.chars().count().div_ceil(inner_width).max(1))
            .sum::<usize>() as u16;
        let height = rows.saturating_add(2);
        if y + height > area.y + area.height {
            break;
        }

        let rect = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        let style = Style::default().fg(notice.level.color());
        let lines: Vec<Line> = notice
            .message
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect();

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            rect,
        );
        y += height;
    }
}
