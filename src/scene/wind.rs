#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

//! Wind gust streaks.
//!
//! Each gust is a long shallow arc, bowed by a sine wobble at its control
//! point, sweeping from west to east. A gust that clears the east edge
//! reseeds fully off-screen to the west at a fresh row, so streaks always
//! enter mid-flight rather than popping into view.

use rand::Rng;

use crate::scene::classify::WindParams;
use crate::scene::engine::{EffectEngine, LayerStyle, population};
use crate::scene::surface::Surface;

const FLOOR: usize = 10;
const CELLS_PER_GUST: u32 = 110;
const EDGE: f32 = 4.0;

#[derive(Debug, Clone)]
struct Gust {
    x: f32,
    y: f32,
    len: f32,
    arc: f32,
    heavy: bool,
    base_speed: f32,
    wobble_phase: f32,
    wobble_speed: f32,
    wobble_amp: f32,
}

#[derive(Debug)]
pub struct WindEngine {
    params: WindParams,
    style: LayerStyle,
    surface: Surface,
    gusts: Vec<Gust>,
}

impl WindEngine {
    pub fn new(params: WindParams, style: LayerStyle) -> Self {
        Self {
            params,
            style,
            surface: Surface::new(0, 0),
            gusts: Vec::new(),
        }
    }

    pub fn params(&self) -> WindParams {
        self.params
    }

    pub fn gust_count(&self) -> usize {
        self.gusts.len()
    }

    fn reseed(&mut self) {
        let mut rng = rand::rng();
        let count = population(
            self.surface.area(),
            CELLS_PER_GUST,
            self.params.intensity,
            FLOOR,
        );
        let w = f32::from(self.surface.width()).max(1.0);
        let h = f32::from(self.surface.height()).max(1.0);
        self.gusts = (0..count)
            .map(|_| Gust {
                x: rng.random_range(0.0..w),
                y: rng.random_range(0.0..h),
                len: rng.random_range(10.0..26.0),
                arc: rng.random_range(0.6..1.7),
                heavy: rng.random_bool(0.4),
                base_speed: rng.random_range(0.11..0.24),
                wobble_phase: rng.random_range(0.0..std::f32::consts::TAU),
                wobble_speed: rng.random_range(0.01..0.03),
                wobble_amp: rng.random_range(0.2..0.8),
            })
            .collect();
    }
}

impl EffectEngine for WindEngine {
    fn resize(&mut self, width: u16, height: u16) {
        self.surface = Surface::new(width, height);
        self.reseed();
    }

    fn tick(&mut self) {
        if self.surface.is_empty() {
            return;
        }
        self.surface.fade(self.style.trail_alpha);

        let w = f32::from(self.surface.width());
        let h = f32::from(self.surface.height());
        let speed = self.params.speed;
        let mut rng = rand::rng();

        for gust in &mut self.gusts {
            gust.wobble_phase += gust.wobble_speed;
            gust.x += (gust.base_speed + speed * 0.09) * 1.2;
            gust.y += (speed - 1.0) * 0.01;

            if gust.x > w + EDGE {
                gust.x = -(gust.len + EDGE);
                gust.y = rng.random_range(0.0..h);
            } else if gust.y > h + EDGE {
                gust.y = -EDGE / 2.0;
            } else if gust.y < -EDGE {
                gust.y = h + EDGE / 2.0;
            }

            stamp_gust(&mut self.surface, gust);
        }
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn style(&self) -> LayerStyle {
        self.style
    }
}

/// Stamps the gust's quadratic arc: start at the gust position, end a full
/// length east and `arc` rows south, bowed through a wobbling control
/// point at 40% of the length.
fn stamp_gust(surface: &mut Surface, gust: &Gust) {
    let wobble = gust.wobble_phase.sin() * gust.wobble_amp;
    let (sx, sy) = (gust.x, gust.y);
    let (cx, cy) = (gust.x + gust.len * 0.4, gust.y + wobble);
    let (ex, ey) = (gust.x + gust.len, gust.y + gust.arc);

    let steps = gust.len.ceil().max(2.0);
    let mut prev_y = sy;
    for i in 0..=steps as u32 {
        let t = i as f32 / steps;
        let u = 1.0 - t;
        let x = u * u * sx + 2.0 * u * t * cx + t * t * ex;
        let y = u * u * sy + 2.0 * u * t * cy + t * t * ey;
        let glyph = gust_glyph(y - prev_y, gust.heavy);
        surface.stamp(x, y, glyph, 1.0);
        prev_y = y;
    }
}

fn gust_glyph(dy: f32, heavy: bool) -> char {
    if dy > 0.3 {
        '╲'
    } else if dy < -0.3 {
        '╱'
    } else if heavy {
        '━'
    } else {
        '─'
    }
}
