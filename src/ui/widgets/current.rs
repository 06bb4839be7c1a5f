use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    domain::format::{format_number, format_temp},
    domain::summary::current_summary,
    domain::weather::{ForecastBundle, Units, convert_temp},
    scene::classify::condition_from_code,
    ui::theme,
};

use super::shared::panel_block;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let background = state.scene_params.background;
    let block = panel_block("Now", background);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Style::default().fg(theme::text(background));
    let dim = Style::default().fg(theme::text_dim(background));

    let Some(bundle) = &state.weather else {
        let label = if state.loading_message.is_empty() {
            "Loading..."
        } else {
            state.loading_message.as_str()
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, dim))), inner);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            temp_text(bundle, state.units),
            Style::default()
                .fg(theme::accent(background))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            condition_from_code(bundle.current.weather_code).to_string(),
            text,
        )),
        Line::from(Span::styled(feels_text(bundle, state.units), dim)),
    ];
    if let Some(range) = high_low_text(bundle, state.units) {
        lines.push(Line::from(Span::styled(range, dim)));
    }
    lines.push(Line::from(Span::styled(wind_humidity_text(bundle), dim)));
    let summary = current_summary(&bundle.current);
    if !summary.is_empty() {
        lines.push(Line::from(Span::styled(summary, dim)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn temp_text(bundle: &ForecastBundle, units: Units) -> String {
    let temp = bundle.current.temperature.map(|t| convert_temp(t, units));
    format!("{}{}", format_temp(temp), units.suffix())
}

fn feels_text(bundle: &ForecastBundle, units: Units) -> String {
    let feels = bundle
        .current
        .apparent_temperature
        .map(|t| convert_temp(t, units));
    format!("Feels like {}{}", format_temp(feels), units.suffix())
}

fn high_low_text(bundle: &ForecastBundle, units: Units) -> Option<String> {
    let high = bundle.today_high()?;
    let low = bundle.today_low()?;
    Some(format!(
        "H {}°  L {}°",
        format_temp(Some(convert_temp(high, units))),
        format_temp(Some(convert_temp(low, units)))
    ))
}

fn wind_humidity_text(bundle: &ForecastBundle) -> String {
    format!(
        "Wind {} km/h  Humidity {}%",
        format_number(bundle.current.wind_speed, 0),
        format_number(bundle.current.humidity, 0)
    )
}
