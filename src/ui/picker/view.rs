use chrono::{Datelike, NaiveDate};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::rates::format_date;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT};

use super::state::DatePickerState;

/// Date field: the committed date, or the browsing cursor while open.
pub fn date_picker_widget(
    state: &DatePickerState,
    selected: NaiveDate,
    focused: bool,
) -> Paragraph<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(" Select date ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let line = match state.cursor() {
        Some(cursor) => Line::from(vec![
            Span::styled(" ◀ ", Style::default().fg(ACCENT)),
            Span::styled(
                format_date(Some(cursor)),
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶ ", Style::default().fg(ACCENT)),
            Span::styled(
                format!("{}  ←/→ day  ↑/↓ week  PgUp/PgDn month  t today", cursor.weekday()),
                Style::default().fg(HINT_TEXT),
            ),
        ]),
        None => Line::from(vec![
            Span::raw(" "),
            Span::styled(format_date(Some(selected)), Style::default().fg(HEADER_TEXT)),
        ]),
    };

    Paragraph::new(line).block(block)
}
