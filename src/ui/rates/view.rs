use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, STATUS_ERROR, STRIPE_BACKGROUND,
};

use super::state::RatesViewState;

pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Rates area: error text, spinner, or the grid.
///
/// `offset` is the first grid row shown; `spinner_tick` animates loading.
pub fn render_rates_table(
    frame: &mut Frame<'_>,
    state: &RatesViewState,
    area: Rect,
    offset: usize,
    spinner_tick: usize,
    focused: bool,
) {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(
            format!(" Rates ({}) ", state.grid_data.len()),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let mut lines = Vec::new();
    if state.has_error() {
        lines.push(Line::from(Span::styled(
            state.error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    if state.is_loading {
        let frame_str = SPINNER_FRAMES[spinner_tick % SPINNER_FRAMES.len()];
        lines.push(Line::from(vec![
            Span::styled(frame_str, Style::default().fg(ACCENT)),
            Span::styled(" Loading rates...", Style::default().fg(HEADER_TEXT)),
        ]));
    }
    if !state.shows_table() {
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    if state.grid_data.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No rates for this selection",
                Style::default().fg(HINT_TEXT),
            )))
            .alignment(Alignment::Center)
            .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Country", "Code", "Rate"]).style(
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    let rows = state
        .grid_data
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, row)| {
            let style = if idx % 2 == 1 {
                Style::default().fg(HEADER_TEXT).bg(STRIPE_BACKGROUND)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Row::new(vec![
                Cell::from(row.country.clone()),
                Cell::from(row.code.clone()),
                Cell::from(format!("{}", row.rate)),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, area);
}
