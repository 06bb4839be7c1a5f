#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

//! Sun rays.
//!
//! Rays fan out from the top-left corner across a quarter turn, each long
//! enough to cross the whole viewport. Positions are fixed; only the alpha
//! pulses, bouncing between 0.1 and 0.8 on a per-ray direction. Intensity
//! controls the ray count, not the brightness.

use rand::Rng;

use crate::scene::classify::SunParams;
use crate::scene::engine::{EffectEngine, LayerStyle};
use crate::scene::surface::Surface;

const FLOOR: usize = 10;
const PULSE_STEP: f32 = 0.005;
const PULSE_MIN: f32 = 0.1;
const PULSE_MAX: f32 = 0.8;
// Terminal cells are roughly twice as tall as wide.
const ROW_ASPECT: f32 = 0.55;

#[derive(Debug, Clone)]
struct Ray {
    angle: f32,
    alpha: f32,
    dir: f32,
}

#[derive(Debug)]
pub struct SunEngine {
    params: SunParams,
    style: LayerStyle,
    surface: Surface,
    rays: Vec<Ray>,
}

impl SunEngine {
    pub fn new(params: SunParams, style: LayerStyle) -> Self {
        Self {
            params,
            style,
            surface: Surface::new(0, 0),
            rays: Vec::new(),
        }
    }

    pub fn params(&self) -> SunParams {
        self.params
    }

    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    fn reseed(&mut self) {
        let mut rng = rand::rng();
        let count = FLOOR.max((self.params.intensity * 20.0) as usize);
        let span = (count.saturating_sub(1)).max(1) as f32;
        self.rays = (0..count)
            .map(|i| Ray {
                angle: std::f32::consts::FRAC_PI_2 * (i as f32 / span),
                alpha: rng.random_range(0.2..0.7),
                dir: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
            })
            .collect();
    }
}

impl EffectEngine for SunEngine {
    fn resize(&mut self, width: u16, height: u16) {
        self.surface = Surface::new(width, height);
        self.reseed();
    }

    fn tick(&mut self) {
        if self.surface.is_empty() {
            return;
        }
        // Rays never trail; each frame redraws the fan at its new alpha.
        self.surface.clear();

        let w = f32::from(self.surface.width());
        let h = f32::from(self.surface.height());
        let reach = (w * w + h * h).sqrt();

        for ray in &mut self.rays {
            ray.alpha += ray.dir * PULSE_STEP;
            if ray.alpha > PULSE_MAX {
                ray.dir = -1.0;
            }
            if ray.alpha < PULSE_MIN {
                ray.dir = 1.0;
            }

            let glyph = ray_glyph(ray.angle);
            let (dx, dy) = (ray.angle.cos(), ray.angle.sin() * ROW_ASPECT);
            let mut step = 0.0_f32;
            while step < reach {
                let x = dx * step;
                let y = dy * step;
                if x > w && y > h {
                    break;
                }
                let alpha = ray.alpha * taper(step / reach);
                if alpha < 0.02 {
                    break;
                }
                self.surface.stamp(x, y, glyph, alpha);
                step += 1.0;
            }
        }
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn style(&self) -> LayerStyle {
        self.style
    }
}

/// Alpha falloff along a ray: full at the origin, 40% three-tenths of the
/// way out, fading to nothing at the tip.
fn taper(t: f32) -> f32 {
    if t < 0.3 {
        1.0 + (0.4 - 1.0) * (t / 0.3)
    } else {
        0.4 * (1.0 - (t - 0.3) / 0.7)
    }
}

fn ray_glyph(angle: f32) -> char {
    use std::f32::consts::PI;
    if angle < PI / 8.0 {
        '─'
    } else if angle < 3.0 * PI / 8.0 {
        '╲'
    } else {
        '│'
    }
}
