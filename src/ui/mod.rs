pub mod theme;
pub mod widgets;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    domain::format::date_line,
    scene::classify::condition_from_code,
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        widgets::backdrop::Backdrop {
            stack: &state.scene,
            background: state.scene_params.background,
        },
        area,
    );

    if area.width < 60 || area.height < 20 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 60x20.")
            .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], state);

    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    widgets::current::render(frame, mid[0], state);
    widgets::hourly::render(frame, mid[1], state);

    widgets::daily::render(frame, chunks[2], state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[3]);
    widgets::detail::render(frame, bottom[0], state);
    widgets::neo::render(frame, bottom[1], state);

    render_footer(frame, chunks[4], state);
    render_error_badge(frame, area, state);

    if state.search.active {
        widgets::search::render(frame, centered_rect(50, 50, area), state);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let background = state.scene_params.background;
    let text = Style::default()
        .fg(theme::text(background))
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme::text_dim(background));

    let Some(bundle) = &state.weather else {
        let label = if state.mode == AppMode::Loading {
            state.loading_message.as_str()
        } else {
            "skycast"
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, text))), area);
        return;
    };

    let date = bundle
        .current
        .time
        .map(|t| t.date())
        .unwrap_or_else(|| Local::now().date_naive());
    let top = Line::from(vec![
        Span::styled(bundle.location.clone(), text),
        Span::styled(format!("  {}", date_line(date)), dim),
    ]);
    let sub = Line::from(vec![
        Span::styled(
            condition_from_code(bundle.current.weather_code).to_string(),
            Style::default().fg(theme::text(background)),
        ),
        Span::styled(
            format!("  updated {}", bundle.fetched_at.format("%H:%M")),
            dim,
        ),
    ]);
    frame.render_widget(Paragraph::new(vec![top, sub]), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let dim = Style::default().fg(theme::text_dim(state.scene_params.background));
    let hints = "q quit   / search   r refresh   f/c units   ←/→ day   n flybys";
    frame.render_widget(Paragraph::new(Line::from(Span::styled(hints, dim))), area);
}

fn render_error_badge(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(message) = &state.last_error else {
        return;
    };
    let text = format!("⚠ {message}");
    let width = (text.chars().count() as u16 + 2).min(area.width);
    let badge_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1,
    };
    let badge = Paragraph::new(Line::from(text)).style(
        Style::default()
            .fg(Color::Rgb(254, 202, 202))
            .bg(Color::Rgb(127, 29, 29))
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(badge, badge_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
