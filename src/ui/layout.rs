use ratatui::layout::Rect;

/// Header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(4);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into table, pagination line and summary/preview lines.
pub fn body_regions(body: Rect) -> (Rect, Rect, Rect) {
    let info_height = 3.min(body.height);
    let pager_height = 1.min(body.height.saturating_sub(info_height));
    let table_height = body.height.saturating_sub(info_height + pager_height);
    let table = Rect {
        height: table_height,
        ..body
    };
    let pager = Rect {
        y: body.y + table_height,
        height: pager_height,
        ..body
    };
    let info = Rect {
        y: body.y + table_height + pager_height,
        height: info_height,
        ..body
    };
    (table, pager, info)
}

/// Rect of the given size centred in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
