#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! Twinkling night stars.
//!
//! Stars hold their position for the life of the layer and only oscillate
//! in brightness, each on its own sine phase. They keep to the upper 70%
//! of the sky so the horizon stays readable. Density and twinkle speed
//! come from the composition layer, which dims star cover under clouds.

use rand::Rng;

use crate::scene::compose::StarParams;
use crate::scene::engine::{EffectEngine, LayerStyle, population};
use crate::scene::surface::Surface;

const FLOOR: usize = 80;
const CELLS_PER_STAR: u32 = 50;
const SKY_BAND: f32 = 0.7;

#[derive(Debug, Clone)]
struct Star {
    x: f32,
    y: f32,
    size: f32,
    phase: f32,
    speed: f32,
}

#[derive(Debug)]
pub struct StarEngine {
    params: StarParams,
    style: LayerStyle,
    surface: Surface,
    stars: Vec<Star>,
}

impl StarEngine {
    pub fn new(params: StarParams, style: LayerStyle) -> Self {
        Self {
            params,
            style,
            surface: Surface::new(0, 0),
            stars: Vec::new(),
        }
    }

    pub fn params(&self) -> StarParams {
        self.params
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    fn reseed(&mut self) {
        let mut rng = rand::rng();
        let count = population(
            self.surface.area(),
            CELLS_PER_STAR,
            self.params.density,
            FLOOR,
        );
        let w = f32::from(self.surface.width()).max(1.0);
        let h = f32::from(self.surface.height()).max(1.0);
        let twinkle = self.params.twinkle_speed;
        self.stars = (0..count)
            .map(|_| Star {
                x: rng.random_range(0.0..w),
                y: rng.random_range(0.0..h * SKY_BAND),
                size: rng.random_range(0.0..1.0),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
                speed: twinkle + rng.random_range(0.0..twinkle.max(f32::EPSILON)),
            })
            .collect();
    }
}

impl EffectEngine for StarEngine {
    fn resize(&mut self, width: u16, height: u16) {
        self.surface = Surface::new(width, height);
        self.reseed();
    }

    fn tick(&mut self) {
        if self.surface.is_empty() {
            return;
        }
        self.surface.clear();

        for star in &mut self.stars {
            star.phase += star.speed;
            let alpha = 0.5 + 0.5 * star.phase.sin();
            self.surface
                .stamp(star.x, star.y, star_glyph(star.size), alpha);
        }
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn style(&self) -> LayerStyle {
        self.style
    }
}

fn star_glyph(size: f32) -> char {
    if size < 0.55 {
        '·'
    } else if size < 0.85 {
        '✦'
    } else {
        '✧'
    }
}
