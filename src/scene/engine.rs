#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! The lifecycle every effect layer shares.
//!
//! An engine is created with its parameters, sized (which allocates the
//! surface and seeds the whole population), then ticked once per frame
//! until the composition layer drops it. Resizing throws the population
//! away and reseeds for the new area; particle identity never survives a
//! resize.

use crate::scene::surface::Surface;

/// Color and compositing constants for one layer. These come from the
/// presentation side and are never derived from the weather.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub color: (u8, u8, u8),
    pub opacity: f32,
    /// Fraction of the previous frame erased per tick; zero disables
    /// motion trails entirely.
    pub trail_alpha: f32,
}

pub trait EffectEngine {
    /// Reallocates the surface and regenerates the population.
    fn resize(&mut self, width: u16, height: u16);
    /// Advances one frame: fade, integrate, stamp, wrap.
    fn tick(&mut self);
    fn surface(&self) -> &Surface;
    fn style(&self) -> LayerStyle;
}

/// Area-scaled population count: one particle per `divisor` cells, scaled
/// by intensity, never below the per-effect floor.
pub fn population(area: u32, divisor: u32, intensity: f32, floor: usize) -> usize {
    let density = (area / divisor) as f32;
    floor.max((density * intensity) as usize)
}
