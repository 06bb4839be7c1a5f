#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! Falling rain streaks.
//!
//! Each drop is a short vertical streak with a per-drop fall speed and a
//! lateral drift seeded from the wind knob. Drops leaving the bottom rejoin
//! above the top edge at a fresh column; drops blown past a side edge wrap
//! to the opposite side.

use rand::Rng;

use crate::scene::classify::RainParams;
use crate::scene::engine::{EffectEngine, LayerStyle, population};
use crate::scene::surface::Surface;

const FLOOR: usize = 20;
const CELLS_PER_DROP: u32 = 50;
const EDGE: f32 = 2.0;

#[derive(Debug, Clone)]
struct Drop {
    x: f32,
    y: f32,
    len: f32,
    speed: f32,
    drift: f32,
    heavy: bool,
}

#[derive(Debug)]
pub struct RainEngine {
    params: RainParams,
    style: LayerStyle,
    surface: Surface,
    drops: Vec<Drop>,
}

impl RainEngine {
    pub fn new(params: RainParams, style: LayerStyle) -> Self {
        Self {
            params,
            style,
            surface: Surface::new(0, 0),
            drops: Vec::new(),
        }
    }

    pub fn params(&self) -> RainParams {
        self.params
    }

    pub fn drop_count(&self) -> usize {
        self.drops.len()
    }

    fn reseed(&mut self) {
        let mut rng = rand::rng();
        let count = population(
            self.surface.area(),
            CELLS_PER_DROP,
            self.params.intensity,
            FLOOR,
        );
        let w = f32::from(self.surface.width()).max(1.0);
        let h = f32::from(self.surface.height()).max(1.0);
        let wind = self.params.wind;
        self.drops = (0..count)
            .map(|_| Drop {
                x: rng.random_range(0.0..w),
                y: rng.random_range(0.0..h),
                len: rng.random_range(1.0..2.4),
                speed: rng.random_range(0.15..0.42),
                drift: wind * 0.11 + rng.random_range(-0.035..0.035),
                heavy: rng.random_bool(0.35),
            })
            .collect();
    }
}

impl EffectEngine for RainEngine {
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
        let mut rng = rand::rng();

        for drop in &mut self.drops {
            drop.x += drop.drift;
            drop.y += drop.speed;

            if drop.y > h + EDGE {
                drop.y = -EDGE;
                drop.x = rng.random_range(0.0..w);
            } else if drop.x > w + EDGE {
                drop.x = -EDGE;
            } else if drop.x < -EDGE {
                drop.x = w + EDGE;
            }

            let glyph = streak_glyph(drop.drift, drop.heavy);
            let rows = drop.len.round().max(1.0);
            let slant = drop.drift * 2.0 / rows;
            for i in 0..rows as u32 {
                let step = i as f32;
                self.surface
                    .stamp(drop.x + slant * step, drop.y + step, glyph, 1.0);
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

fn streak_glyph(drift: f32, heavy: bool) -> char {
    if drift > 0.12 {
        '╲'
    } else if drift < -0.12 {
        '╱'
    } else if heavy {
        '┃'
    } else {
        '│'
    }
}
