//! Gradient palettes and text colors, one set per backdrop.

use ratatui::style::Color;

use crate::scene::Background;

/// Vertical gradient, top to bottom, with an optional middle stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub top: (u8, u8, u8),
    pub via: Option<(u8, u8, u8)>,
    pub bottom: (u8, u8, u8),
}

pub fn gradient(background: Background) -> Gradient {
    match background {
        Background::SnowyDay => Gradient {
            top: (241, 245, 249),
            via: Some((186, 230, 253)),
            bottom: (203, 213, 225),
        },
        Background::SnowyNight => Gradient {
            top: (15, 23, 42),
            via: Some((30, 58, 138)),
            bottom: (30, 27, 75),
        },
        Background::RainyDay => Gradient {
            top: (226, 232, 240),
            via: Some((56, 189, 248)),
            bottom: (71, 85, 105),
        },
        Background::RainyNight => Gradient {
            top: (55, 48, 163),
            via: Some((15, 23, 42)),
            bottom: (0, 0, 0),
        },
        Background::WindyDay => Gradient {
            top: (226, 232, 240),
            via: Some((165, 243, 252)),
            bottom: (148, 163, 184),
        },
        Background::WindyNight => Gradient {
            top: (15, 23, 42),
            via: Some((8, 51, 68)),
            bottom: (2, 6, 23),
        },
        Background::ClearDay => Gradient {
            top: (125, 211, 252),
            via: Some((34, 211, 238)),
            bottom: (37, 99, 235),
        },
        Background::ClearNight => Gradient {
            top: (49, 46, 129),
            via: None,
            bottom: (15, 23, 42),
        },
    }
}

/// Color at position `t` down the gradient, 0 at the top row and 1 at the
/// bottom. Three-stop gradients place the middle stop at the halfway line.
pub fn row_rgb(gradient: &Gradient, t: f32) -> (u8, u8, u8) {
    match gradient.via {
        Some(via) if t < 0.5 => lerp_rgb(gradient.top, via, t * 2.0),
        Some(via) => lerp_rgb(via, gradient.bottom, (t - 0.5) * 2.0),
        None => lerp_rgb(gradient.top, gradient.bottom, t),
    }
}

pub fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    (channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

pub fn to_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Primary text color readable against the gradient.
pub fn text(background: Background) -> Color {
    if background.is_day() {
        Color::Rgb(15, 23, 42)
    } else {
        Color::Rgb(241, 245, 249)
    }
}

/// Secondary labels and borders.
pub fn text_dim(background: Background) -> Color {
    if background.is_day() {
        Color::Rgb(51, 65, 85)
    } else {
        Color::Rgb(148, 163, 184)
    }
}

/// Highlight for the selected day and search matches.
pub fn accent(background: Background) -> Color {
    if background.is_day() {
        Color::Rgb(7, 89, 133)
    } else {
        Color::Rgb(125, 211, 252)
    }
}
