use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::{
    app::state::{AppState, DayFocus},
    domain::format::{format_temp, weekday_short},
    domain::weather::{Units, convert_temp},
    scene::classify::{is_rainy_code, is_snowy_code},
    ui::theme,
};

use super::shared::panel_block;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let background = state.scene_params.background;
    let block = panel_block("7 days", background);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(theme::text_dim(background));
    let Some(bundle) = &state.weather else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Waiting for forecast", dim))),
            inner,
        );
        return;
    };
    if bundle.daily.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("No daily data", dim))),
            inner,
        );
        return;
    }

    let focused = focused_index(state.day_focus);
    let days = bundle.daily.iter().take(7).collect::<Vec<_>>();

    let names = Row::new(
        days.iter()
            .enumerate()
            .map(|(idx, day)| {
                let label = if idx == 0 {
                    "Today".to_string()
                } else {
                    weekday_short(day.date)
                };
                Cell::from(label).style(name_style(idx, focused, state))
            })
            .collect::<Vec<_>>(),
    );
    let glyphs = Row::new(
        days.iter()
            .enumerate()
            .map(|(idx, day)| {
                Cell::from(day_glyph(day.weather_code)).style(body_style(idx, focused, state))
            })
            .collect::<Vec<_>>(),
    );
    let highs = Row::new(
        days.iter()
            .enumerate()
            .map(|(idx, day)| {
                Cell::from(temp_label(day.high, state.units))
                    .style(body_style(idx, focused, state).add_modifier(Modifier::BOLD))
            })
            .collect::<Vec<_>>(),
    );
    let lows = Row::new(
        days.iter()
            .enumerate()
            .map(|(idx, day)| {
                let style = if focused == Some(idx) {
                    body_style(idx, focused, state)
                } else {
                    dim
                };
                Cell::from(temp_label(day.low, state.units)).style(style)
            })
            .collect::<Vec<_>>(),
    );

    let widths = vec![Constraint::Ratio(1, 7); days.len()];
    frame.render_widget(Table::new([names, glyphs, highs, lows], widths), inner);
}

fn focused_index(focus: DayFocus) -> Option<usize> {
    match focus {
        DayFocus::Current => None,
        DayFocus::Day(idx) => Some(idx),
    }
}

fn name_style(idx: usize, focused: Option<usize>, state: &AppState) -> Style {
    let background = state.scene_params.background;
    if focused == Some(idx) {
        Style::default()
            .fg(theme::accent(background))
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if idx == 0 {
        Style::default()
            .fg(theme::text(background))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::text_dim(background))
    }
}

fn body_style(idx: usize, focused: Option<usize>, state: &AppState) -> Style {
    let background = state.scene_params.background;
    if focused == Some(idx) {
        Style::default().fg(theme::accent(background))
    } else {
        Style::default().fg(theme::text(background))
    }
}

fn temp_label(value: Option<f32>, units: Units) -> String {
    format!("{}°", format_temp(value.map(|t| convert_temp(t, units))))
}

fn day_glyph(code: Option<u8>) -> &'static str {
    let Some(code) = code else {
        return "·";
    };
    match code {
        0 | 1 => "☀",
        2 | 3 => "☁",
        45 | 48 => "≡",
        95 | 96 | 99 => "⚡",
        _ if is_snowy_code(code) => "❄",
        _ if is_rainy_code(code) || code == 66 || code == 67 => "☂",
        _ => "·",
    }
}
