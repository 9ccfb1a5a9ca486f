use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub date: Rect,
    pub currency: Rect,
    pub table: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let controls_height = 3.min(area.height.saturating_sub(header_height + footer_height));
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
    let controls = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: controls_height,
    };
    let table = Rect {
        x: area.x,
        y: controls.y + controls_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + controls_height + footer_height),
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(controls);

    Regions {
        header,
        date: columns[0],
        currency: columns[1],
        table,
        footer,
    }
}

/// Number of grid rows visible in the table region (minus borders and header row).
pub fn table_page_size(area: Rect) -> usize {
    layout_regions(area).table.height.saturating_sub(3).max(1) as usize
}

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
