use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
};

use crate::{
    app::state::{AppState, DayFocus},
    domain::format::{date_line, format_number, format_temp, format_time},
    domain::summary::{current_summary, daily_summary},
    domain::weather::{DailyOutlook, ForecastBundle, Units, convert_temp},
    ui::theme,
};

use super::shared::panel_block;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let background = state.scene_params.background;
    let block = panel_block("Details", background);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Style::default().fg(theme::text(background));
    let dim = Style::default().fg(theme::text_dim(background));

    let Some(bundle) = &state.weather else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Waiting for forecast", dim))),
            inner,
        );
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            heading(bundle, state.day_focus),
            text.add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    let rows = stat_rows(bundle, state.day_focus, state.units)
        .into_iter()
        .map(|[label_a, value_a, label_b, value_b]| {
            Row::new(vec![
                Cell::from(label_a).style(dim),
                Cell::from(value_a).style(text),
                Cell::from(label_b).style(dim),
                Cell::from(value_b).style(text),
            ])
        })
        .collect::<Vec<_>>();
    let widths = [
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Min(0),
    ];
    frame.render_widget(Table::new(rows, widths).column_spacing(1), chunks[1]);

    let summary = summary_text(bundle, state.day_focus);
    if !summary.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(summary, dim)))
                .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }
}

fn heading(bundle: &ForecastBundle, focus: DayFocus) -> String {
    match focused_day(bundle, focus) {
        Some(day) => date_line(day.date),
        None => "Now".to_string(),
    }
}

fn focused_day(bundle: &ForecastBundle, focus: DayFocus) -> Option<&DailyOutlook> {
    match focus {
        DayFocus::Current => None,
        DayFocus::Day(idx) => bundle.daily.get(idx),
    }
}

fn stat_rows(bundle: &ForecastBundle, focus: DayFocus, units: Units) -> Vec<[String; 4]> {
    match focused_day(bundle, focus) {
        Some(day) => vec![
            [
                "High".to_string(),
                temp_value(day.high, units),
                "Low".to_string(),
                temp_value(day.low, units),
            ],
            [
                "Sunrise".to_string(),
                format_time(day.sunrise),
                "Sunset".to_string(),
                format_time(day.sunset),
            ],
            [
                "Rain".to_string(),
                format!("{} mm", format_number(day.precipitation_sum, 1)),
                "Chance".to_string(),
                format!("{}%", format_number(day.precipitation_probability, 0)),
            ],
            [
                "Gusts".to_string(),
                format!("{} km/h", format_number(day.wind_gusts_max, 0)),
                "UV max".to_string(),
                format_number(day.uv_index_max, 0),
            ],
        ],
        None => {
            let current = &bundle.current;
            let today = bundle.today();
            vec![
                [
                    "Humidity".to_string(),
                    format!("{}%", format_number(current.humidity, 0)),
                    "Wind".to_string(),
                    format!("{} km/h", format_number(current.wind_speed, 0)),
                ],
                [
                    "Pressure".to_string(),
                    format!("{} hPa", format_number(current.pressure, 0)),
                    "Gusts".to_string(),
                    format!("{} km/h", format_number(current.wind_gusts, 0)),
                ],
                [
                    "Cloud".to_string(),
                    format!("{}%", format_number(current.cloud_cover, 0)),
                    "Visibility".to_string(),
                    format!("{} km", format_number(current.visibility.map(|v| v / 1000.0), 1)),
                ],
                [
                    "Sunrise".to_string(),
                    format_time(today.and_then(|d| d.sunrise)),
                    "Sunset".to_string(),
                    format_time(today.and_then(|d| d.sunset)),
                ],
            ]
        }
    }
}

fn temp_value(value: Option<f32>, units: Units) -> String {
    format!(
        "{}{}",
        format_temp(value.map(|t| convert_temp(t, units))),
        units.suffix()
    )
}

fn summary_text(bundle: &ForecastBundle, focus: DayFocus) -> String {
    match focused_day(bundle, focus) {
        Some(day) => daily_summary(day),
        None => current_summary(&bundle.current),
    }
}
