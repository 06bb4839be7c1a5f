use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::state::AppState, data::neo::NeoFlyby, ui::theme};

use super::shared::panel_block;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let background = state.scene_params.background;
    let block = panel_block("NASA flybys", background);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Style::default().fg(theme::text(background));
    let dim = Style::default().fg(theme::text_dim(background));

    if state.neo.loading {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Checking near-Earth objects...", dim))),
            inner,
        );
        return;
    }
    if let Some(error) = &state.neo.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Rgb(254, 202, 202)),
            ))),
            inner,
        );
        return;
    }
    if state.neo.flybys.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("No close approaches this week", dim))),
            inner,
        );
        return;
    }

    let mut lines = Vec::new();
    for flyby in &state.neo.flybys {
        lines.push(title_line(flyby, text, dim));
        if state.neo.expanded {
            for detail in detail_lines(flyby) {
                lines.push(Line::from(Span::styled(format!("  {detail}"), dim)));
            }
        }
    }
    if !state.neo.expanded {
        lines.push(Line::from(Span::styled("n expand", dim)));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn title_line(flyby: &NeoFlyby, text: Style, dim: Style) -> Line<'static> {
    let mut spans = Vec::new();
    if flyby.hazardous {
        spans.push(Span::styled(
            "⚠ ",
            Style::default()
                .fg(Color::Rgb(253, 224, 71))
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(flyby.name.clone(), text.add_modifier(Modifier::BOLD)));
    spans.push(Span::styled(format!("  {}", miss_text(flyby)), dim));
    Line::from(spans)
}

fn miss_text(flyby: &NeoFlyby) -> String {
    match flyby.miss_km {
        Some(km) if km >= 1_000_000.0 => format!("{:.2}M km", km / 1_000_000.0),
        Some(km) => format!("{} km", group_thousands(km.round() as u64)),
        None => "-- km".to_string(),
    }
}

fn detail_lines(flyby: &NeoFlyby) -> Vec<String> {
    let mut lines = vec![flyby.approach_label.clone()];
    if let Some(kph) = flyby.speed_kph {
        lines.push(format!("{} km/h", group_thousands(kph.round() as u64)));
    }
    if let (Some(min), Some(max)) = (flyby.diameter_min_km, flyby.diameter_max_km) {
        lines.push(format!("{min:.2}-{max:.2} km across"));
    }
    if let Some(h) = flyby.magnitude_h {
        lines.push(format!("H {h:.1}"));
    }
    if let Some(body) = &flyby.orbiting_body {
        lines.push(format!("orbits {body}"));
    }
    lines
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
