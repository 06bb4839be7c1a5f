#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! Drifting snowfall.
//!
//! Flakes fall slowly while weaving sideways on a per-flake sine phase;
//! the wind knob adds a constant lean. Wrap rules match the rain layer,
//! with a tighter margin since flakes are single cells.

use rand::Rng;

use crate::scene::classify::SnowParams;
use crate::scene::engine::{EffectEngine, LayerStyle, population};
use crate::scene::surface::Surface;

const FLOOR: usize = 50;
const CELLS_PER_FLAKE: u32 = 56;
const EDGE: f32 = 1.0;

#[derive(Debug, Clone)]
struct Flake {
    x: f32,
    y: f32,
    size: f32,
    speed: f32,
    drift_phase: f32,
    drift_speed: f32,
    drift_amp: f32,
}

#[derive(Debug)]
pub struct SnowEngine {
    params: SnowParams,
    style: LayerStyle,
    surface: Surface,
    flakes: Vec<Flake>,
}

impl SnowEngine {
    pub fn new(params: SnowParams, style: LayerStyle) -> Self {
        Self {
            params,
            style,
            surface: Surface::new(0, 0),
            flakes: Vec::new(),
        }
    }

    pub fn params(&self) -> SnowParams {
        self.params
    }

    pub fn flake_count(&self) -> usize {
        self.flakes.len()
    }

    fn reseed(&mut self) {
        let mut rng = rand::rng();
        let count = population(
            self.surface.area(),
            CELLS_PER_FLAKE,
            self.params.intensity,
            FLOOR,
        );
        let w = f32::from(self.surface.width()).max(1.0);
        let h = f32::from(self.surface.height()).max(1.0);
        self.flakes = (0..count)
            .map(|_| Flake {
                x: rng.random_range(0.0..w),
                y: rng.random_range(0.0..h),
                size: rng.random_range(0.0..1.0),
                speed: rng.random_range(0.02..0.075),
                drift_phase: rng.random_range(0.0..std::f32::consts::TAU),
                drift_speed: rng.random_range(0.004..0.012),
                drift_amp: rng.random_range(0.07..0.19),
            })
            .collect();
    }
}

impl EffectEngine for SnowEngine {
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
        let lean = self.params.wind * 0.01;
        let mut rng = rand::rng();

        for flake in &mut self.flakes {
            flake.drift_phase += flake.drift_speed;
            flake.x += flake.drift_phase.sin() * flake.drift_amp + lean;
            flake.y += flake.speed;

            if flake.y > h + EDGE {
                flake.y = -EDGE;
                flake.x = rng.random_range(0.0..w);
            } else if flake.x > w + EDGE {
                flake.x = -EDGE;
            } else if flake.x < -EDGE {
                flake.x = w + EDGE;
            }

            self.surface
                .stamp(flake.x, flake.y, flake_glyph(flake.size), 1.0);
        }
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn style(&self) -> LayerStyle {
        self.style
    }
}

fn flake_glyph(size: f32) -> char {
    if size < 0.45 {
        '·'
    } else if size < 0.8 {
        '•'
    } else {
        '❄'
    }
}
