//! Full-screen animated backdrop: the gradient sky plus every mounted
//! effect layer, painted back to front before the panels go on top.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::scene::engine::LayerStyle;
use crate::scene::surface::Surface;
use crate::scene::{Background, SceneStack};
use crate::ui::theme::{self, Gradient};

pub struct Backdrop<'a> {
    pub stack: &'a SceneStack,
    pub background: Background,
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let gradient = theme::gradient(self.background);
        paint_gradient(area, buf, &gradient);
        for (surface, style) in self.stack.layers() {
            paint_layer(area, buf, surface, style, &gradient);
        }
    }
}

fn paint_gradient(area: Rect, buf: &mut Buffer, gradient: &Gradient) {
    for y in area.top()..area.bottom() {
        let color = theme::to_color(theme::row_rgb(gradient, row_ratio(area, y)));
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(color);
            }
        }
    }
}

fn row_ratio(area: Rect, y: u16) -> f32 {
    if area.height <= 1 {
        0.0
    } else {
        f32::from(y - area.top()) / f32::from(area.height - 1)
    }
}

/// A lit cell's glyph is tinted toward the layer color in proportion to
/// its alpha, against the gradient color of its row. The cell background
/// is left alone so the sky shows through.
fn paint_layer(
    area: Rect,
    buf: &mut Buffer,
    surface: &Surface,
    style: LayerStyle,
    gradient: &Gradient,
) {
    for (x, y, cell) in surface.lit() {
        if x >= area.width || y >= area.height {
            continue;
        }
        let strength = (cell.alpha * style.opacity).clamp(0.0, 1.0);
        let row = theme::row_rgb(gradient, row_ratio(area, area.y + y));
        let fg = theme::lerp_rgb(row, style.color, strength);
        if let Some(buf_cell) = buf.cell_mut((area.x + x, area.y + y)) {
            let bg = buf_cell.bg;
            buf_cell
                .set_symbol(&cell.glyph.to_string())
                .set_fg(theme::to_color(fg))
                .set_bg(bg);
        }
    }
}
