use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER};

use super::state::DropdownState;

/// Closed dropdown field showing the active filter.
pub fn currency_field_widget(selected: &str, focused: bool) -> Paragraph<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(selected.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled(" ▾", Style::default().fg(ACCENT)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(" Select currency ", Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

/// Option list popup, centered over `area`.
pub fn render_currency_dropdown(frame: &mut Frame<'_>, state: &DropdownState, area: Rect) {
    let DropdownState::Open {
        options,
        highlighted,
    } = state
    else {
        return;
    };

    let visible = area.height.saturating_sub(2).max(1) as usize;
    let first = highlighted.saturating_sub(visible.saturating_sub(1));
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(idx, option)| {
            let line = Line::from(format!(" {} ", option));
            if idx == *highlighted {
                line.style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .fg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line.style(Style::default().fg(HEADER_TEXT))
            }
        })
        .collect();

    let width = options
        .iter()
        .map(|option| option.chars().count())
        .max()
        .unwrap_or(0)
        .saturating_add(6)
        .max(20) as u16;
    let height = (lines.len() as u16).saturating_add(2);
    let popup = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Currency", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}
