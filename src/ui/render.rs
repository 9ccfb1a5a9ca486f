use crate::ui::app::{App, Focus};
use crate::ui::dropdown::{currency_field_widget, render_currency_dropdown};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::picker::date_picker_widget;
use crate::ui::rates::render_rates_table;
use crate::ui::theme::STATUS_ERROR;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);
    let rates = app.rates();

    frame.render_widget(Header::new().widget(rates), regions.header);
    frame.render_widget(
        date_picker_widget(app.picker(), rates.selected_date, app.focus() == Focus::Date),
        regions.date,
    );
    frame.render_widget(
        currency_field_widget(&rates.selected_currency_code, app.focus() == Focus::Currency),
        regions.currency,
    );
    render_rates_table(
        frame,
        rates,
        regions.table,
        app.table_offset(),
        app.spinner_tick(),
        app.focus() == Focus::Table,
    );
    frame.render_widget(Footer::new().widget(regions.footer, app.focus()), regions.footer);

    if let Some(error) = app.last_command_error() {
        let line = Rect {
            x: regions.table.x + 1,
            y: regions.table.y + regions.table.height.saturating_sub(1),
            width: regions.table.width.saturating_sub(2),
            height: regions.table.height.min(1),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR))),
            line,
        );
    }

    render_currency_dropdown(frame, app.dropdown(), regions.table);
}
