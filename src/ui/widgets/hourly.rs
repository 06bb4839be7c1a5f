use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::{
    app::state::AppState,
    domain::format::format_temp,
    domain::weather::{ForecastBundle, HourlySample, Units, convert_temp},
    ui::theme,
};

use super::shared::{panel_block, sparkline_blocks};

const COLUMN_WIDTH: u16 = 6;
const SPARK_HOURS: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let background = state.scene_params.background;
    let block = panel_block("Hourly", background);
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

    let slice = visible_samples(bundle, inner.width);
    if slice.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("No hourly data", dim))),
            inner,
        );
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let has_now = bundle.current.time.is_some();
    let times = Row::new(
        slice
            .iter()
            .enumerate()
            .map(|(idx, sample)| {
                if idx == 0 && has_now {
                    Cell::from("Now").style(
                        Style::default()
                            .fg(theme::accent(background))
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Cell::from(sample.time.format("%H:%M").to_string()).style(dim)
                }
            })
            .collect::<Vec<_>>(),
    );
    let temps = Row::new(
        slice
            .iter()
            .map(|sample| {
                let temp = sample.temperature.map(|t| convert_temp(t, state.units));
                Cell::from(format!("{}°", format_temp(temp)))
            })
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(theme::text(background))
            .add_modifier(Modifier::BOLD),
    );

    let widths = vec![Constraint::Length(COLUMN_WIDTH); slice.len()];
    frame.render_widget(Table::new([times, temps], widths), chunks[0]);

    let spark = sparkline_blocks(
        &spark_values(bundle, state.units),
        usize::from(chunks[1].width),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            spark,
            Style::default().fg(theme::accent(background)),
        ))),
        chunks[1],
    );
}

fn visible_samples(bundle: &ForecastBundle, width: u16) -> Vec<&HourlySample> {
    let show = usize::from(width / COLUMN_WIDTH).clamp(1, 6);
    bundle
        .hourly
        .iter()
        .skip(bundle.hourly_start())
        .take(show)
        .collect()
}

fn spark_values(bundle: &ForecastBundle, units: Units) -> Vec<f32> {
    bundle
        .hourly
        .iter()
        .skip(bundle.hourly_start())
        .take(SPARK_HOURS)
        .filter_map(|sample| sample.temperature)
        .map(|t| convert_temp(t, units))
        .collect()
}
