use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

use crate::scene::Background;
use crate::ui::theme;

/// Transparent bordered panel. Only foreground colors are set so the
/// backdrop gradient stays visible behind the content.
pub(super) fn panel_block(title: &'static str, background: Background) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(theme::text(background))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::text_dim(background)))
}

#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub(super) fn sparkline_blocks(values: &[f32], width: usize) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(0.001);
    (0..width)
        .map(|idx| {
            let src = (idx * values.len() / width).min(values.len().saturating_sub(1));
            let norm = ((values[src] - min) / span).clamp(0.0, 1.0);
            BARS[(norm * (BARS.len() - 1) as f32).round() as usize]
        })
        .collect()
}
