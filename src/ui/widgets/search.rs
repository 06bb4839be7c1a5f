use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::state::{AppState, SearchState};

const POPUP_SURFACE: Color = Color::Rgb(15, 23, 42);
const POPUP_TEXT: Color = Color::Rgb(226, 232, 240);
const POPUP_MUTED: Color = Color::Rgb(148, 163, 184);
const POPUP_BORDER: Color = Color::Rgb(71, 85, 105);
const POPUP_ACCENT: Color = Color::Rgb(125, 211, 252);

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let panel_style = Style::default().fg(POPUP_TEXT).bg(POPUP_SURFACE);
    let block = Block::default()
        .title("Search city")
        .borders(Borders::ALL)
        .style(panel_style)
        .border_style(Style::default().fg(POPUP_BORDER).bg(POPUP_SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(inner);

    render_query_line(frame, chunks[0], &state.search);

    let items = suggestion_items(&state.search);
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                empty_list_text(&state.search),
                Style::default().fg(POPUP_MUTED),
            ))),
            chunks[1],
        );
    } else {
        let selected = state.search.selected.min(items.len() - 1);
        let mut list_state = ListState::default().with_selected(Some(selected));
        let list = List::new(items)
            .style(panel_style)
            .highlight_style(
                Style::default()
                    .fg(POPUP_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    frame.render_widget(
        Paragraph::new(status_text(&state.search)).style(Style::default().fg(POPUP_MUTED)),
        chunks[2],
    );
}

fn render_query_line(frame: &mut Frame, area: Rect, search: &SearchState) {
    let query_line = Paragraph::new(vec![Line::from(vec![
        Span::styled("Search: ", Style::default().fg(POPUP_MUTED)),
        Span::styled(
            format!("{}▌", search.query),
            Style::default()
                .fg(POPUP_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ])])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(query_line, area);
}

fn suggestion_items(search: &SearchState) -> Vec<ListItem<'static>> {
    search
        .suggestions
        .iter()
        .map(|location| ListItem::new(location.suggestion_line()))
        .collect()
}

fn empty_list_text(search: &SearchState) -> &'static str {
    if search.loading {
        "Searching..."
    } else if search.query.is_empty() {
        "Type a city name"
    } else {
        "No matches yet"
    }
}

fn status_text(search: &SearchState) -> &'static str {
    if search.loading {
        "Searching..."
    } else {
        "Enter search · ↑/↓ choose · Esc close"
    }
}
