#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! Slow-moving cloud banks.
//!
//! Each puff is a soft elliptical blob: alpha peaks at the center and
//! falls to zero at the rim, drawn in shade glyphs. Puffs drift on both
//! axes and wrap only once fully past an edge, so banks slide off one side
//! of the sky and return on the other.

use rand::Rng;

use crate::scene::classify::CloudParams;
use crate::scene::engine::{EffectEngine, LayerStyle, population};
use crate::scene::surface::Surface;

const FLOOR: usize = 10;
const CELLS_PER_PUFF: u32 = 75;

#[derive(Debug, Clone)]
struct Puff {
    x: f32,
    y: f32,
    rx: f32,
    ry: f32,
    drift_x: f32,
    drift_y: f32,
    peak: f32,
}

#[derive(Debug)]
pub struct CloudEngine {
    params: CloudParams,
    style: LayerStyle,
    surface: Surface,
    puffs: Vec<Puff>,
}

impl CloudEngine {
    pub fn new(params: CloudParams, style: LayerStyle) -> Self {
        Self {
            params,
            style,
            surface: Surface::new(0, 0),
            puffs: Vec::new(),
        }
    }

    pub fn params(&self) -> CloudParams {
        self.params
    }

    pub fn puff_count(&self) -> usize {
        self.puffs.len()
    }

    fn reseed(&mut self) {
        let mut rng = rand::rng();
        let count = population(
            self.surface.area(),
            CELLS_PER_PUFF,
            self.params.intensity,
            FLOOR,
        );
        let w = f32::from(self.surface.width()).max(1.0);
        let h = f32::from(self.surface.height()).max(1.0);
        let lean = self.params.wind * 0.1;
        self.puffs = (0..count)
            .map(|_| {
                let rx = rng.random_range(5.0..9.0);
                Puff {
                    x: rng.random_range(0.0..w),
                    y: rng.random_range(0.0..h),
                    rx,
                    ry: rx * 0.45,
                    drift_x: lean + rng.random_range(-0.011..0.011),
                    drift_y: rng.random_range(-0.0055..0.0055),
                    peak: rng.random_range(0.5..0.8),
                }
            })
            .collect();
    }
}

impl EffectEngine for CloudEngine {
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

        for puff in &mut self.puffs {
            puff.x += puff.drift_x;
            puff.y += puff.drift_y;

            if puff.x > w + puff.rx {
                puff.x = -puff.rx;
            } else if puff.x < -puff.rx {
                puff.x = w + puff.rx;
            }
            if puff.y > h + puff.ry {
                puff.y = -puff.ry;
            } else if puff.y < -puff.ry {
                puff.y = h + puff.ry;
            }

            stamp_puff(&mut self.surface, puff);
        }
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn style(&self) -> LayerStyle {
        self.style
    }
}

fn stamp_puff(surface: &mut Surface, puff: &Puff) {
    let x0 = (puff.x - puff.rx).floor() as i32;
    let x1 = (puff.x + puff.rx).ceil() as i32;
    let y0 = (puff.y - puff.ry).floor() as i32;
    let y1 = (puff.y + puff.ry).ceil() as i32;

    for row in y0..=y1 {
        for col in x0..=x1 {
            let dx = (col as f32 + 0.5 - puff.x) / puff.rx;
            let dy = (row as f32 + 0.5 - puff.y) / puff.ry;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist >= 1.0 {
                continue;
            }
            let falloff = 1.0 - dist;
            surface.stamp(
                col as f32,
                row as f32,
                shade_glyph(falloff),
                puff.peak * falloff,
            );
        }
    }
}

fn shade_glyph(falloff: f32) -> char {
    if falloff > 0.7 {
        '▓'
    } else if falloff > 0.35 {
        '▒'
    } else {
        '░'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(intensity: f32) -> CloudEngine {
        CloudEngine::new(
            CloudParams {
                enabled: true,
                intensity,
                wind: 0.1,
            },
            LayerStyle {
                color: (180, 180, 180),
                opacity: 0.3,
                trail_alpha: 0.03,
            },
        )
    }

    #[test]
    fn at_least_ten_puffs_always() {
        let mut engine = engine(0.65);
        engine.resize(20, 10);
        assert_eq!(engine.puff_count(), FLOOR);
    }

    #[test]
    fn overcast_fills_more_sky_than_scattered() {
        let mut scattered = engine(0.65);
        let mut overcast = engine(1.0);
        scattered.resize(160, 50);
        overcast.resize(160, 50);
        assert!(overcast.puff_count() > scattered.puff_count());
    }

    #[test]
    fn blobs_are_brightest_at_the_center() {
        let mut surface = Surface::new(30, 12);
        let puff = Puff {
            x: 15.0,
            y: 6.0,
            rx: 8.0,
            ry: 3.6,
            drift_x: 0.0,
            drift_y: 0.0,
            peak: 0.8,
        };
        stamp_puff(&mut surface, &puff);
        let center = surface.cell(15, 6).unwrap();
        let rim = surface.cell(21, 6).unwrap();
        assert!(center.alpha > rim.alpha);
        assert!(rim.alpha > 0.0);
        assert_eq!(center.glyph, '▓');
    }

    #[test]
    fn puffs_wrap_only_past_their_own_radius() {
        let mut engine = engine(1.0);
        engine.resize(40, 20);
        for puff in &mut engine.puffs {
            puff.x = 40.0 + puff.rx + 0.5;
            puff.drift_x = 0.1;
        }
        engine.tick();
        for puff in &engine.puffs {
            assert!(puff.x <= 0.0, "wrapped to the west edge");
        }
    }
}
