//! Owns the mounted engines and reconciles them against composed
//! parameters.
//!
//! `apply` is the single lifecycle authority: a layer whose params are
//! unchanged keeps running untouched, a changed layer is rebuilt and
//! reseeded, a disabled layer is dropped on the spot. Ticks and resizes
//! fan out to whatever is mounted. Layer order is fixed back-to-front:
//! stars, sun, clouds, wind, rain, snow.

use crate::scene::clouds::CloudEngine;
use crate::scene::compose::SceneParams;
use crate::scene::engine::{EffectEngine, LayerStyle};
use crate::scene::rain::RainEngine;
use crate::scene::snow::SnowEngine;
use crate::scene::stars::StarEngine;
use crate::scene::sun::SunEngine;
use crate::scene::surface::Surface;
use crate::scene::wind::WindEngine;

const STAR_STYLE: LayerStyle = LayerStyle {
    color: (255, 255, 255),
    opacity: 0.9,
    trail_alpha: 0.0,
};
const SUN_STYLE: LayerStyle = LayerStyle {
    color: (255, 230, 120),
    opacity: 0.45,
    trail_alpha: 0.0,
};
const CLOUD_STYLE: LayerStyle = LayerStyle {
    color: (190, 190, 200),
    opacity: 0.3,
    trail_alpha: 0.03,
};
const WIND_STYLE: LayerStyle = LayerStyle {
    color: (255, 255, 255),
    opacity: 0.35,
    trail_alpha: 0.06,
};
const RAIN_STYLE: LayerStyle = LayerStyle {
    color: (255, 255, 255),
    opacity: 0.45,
    trail_alpha: 0.08,
};
const SNOW_STYLE: LayerStyle = LayerStyle {
    color: (255, 255, 255),
    opacity: 0.9,
    trail_alpha: 0.05,
};

#[derive(Debug, Default)]
pub struct SceneStack {
    width: u16,
    height: u16,
    stars: Option<StarEngine>,
    sun: Option<SunEngine>,
    clouds: Option<CloudEngine>,
    wind: Option<WindEngine>,
    rain: Option<RainEngine>,
    snow: Option<SnowEngine>,
}

impl SceneStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles mounted engines with freshly composed parameters.
    pub fn apply(&mut self, params: &SceneParams) {
        let (w, h) = (self.width, self.height);

        self.stars = match self.stars.take() {
            Some(engine) if params.stars.enabled && engine.params() == params.stars => {
                Some(engine)
            }
            _ if params.stars.enabled => {
                let mut engine = StarEngine::new(params.stars, STAR_STYLE);
                engine.resize(w, h);
                Some(engine)
            }
            _ => None,
        };

        self.sun = match self.sun.take() {
            Some(engine) if params.sun.enabled && engine.params() == params.sun => Some(engine),
            _ if params.sun.enabled => {
                let mut engine = SunEngine::new(params.sun, SUN_STYLE);
                engine.resize(w, h);
                Some(engine)
            }
            _ => None,
        };

        self.clouds = match self.clouds.take() {
            Some(engine) if params.clouds.enabled && engine.params() == params.clouds => {
                Some(engine)
            }
            _ if params.clouds.enabled => {
                let mut engine = CloudEngine::new(params.clouds, CLOUD_STYLE);
                engine.resize(w, h);
                Some(engine)
            }
            _ => None,
        };

        self.wind = match self.wind.take() {
            Some(engine) if params.wind.enabled && engine.params() == params.wind => Some(engine),
            _ if params.wind.enabled => {
                let mut engine = WindEngine::new(params.wind, WIND_STYLE);
                engine.resize(w, h);
                Some(engine)
            }
            _ => None,
        };

        self.rain = match self.rain.take() {
            Some(engine) if params.rain.enabled && engine.params() == params.rain => Some(engine),
            _ if params.rain.enabled => {
                let mut engine = RainEngine::new(params.rain, RAIN_STYLE);
                engine.resize(w, h);
                Some(engine)
            }
            _ => None,
        };

        self.snow = match self.snow.take() {
            Some(engine) if params.snow.enabled && engine.params() == params.snow => Some(engine),
            _ if params.snow.enabled => {
                let mut engine = SnowEngine::new(params.snow, SNOW_STYLE);
                engine.resize(w, h);
                Some(engine)
            }
            _ => None,
        };
    }

    /// Resizes every mounted layer, reseeding their populations.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        if let Some(e) = &mut self.stars {
            e.resize(width, height);
        }
        if let Some(e) = &mut self.sun {
            e.resize(width, height);
        }
        if let Some(e) = &mut self.clouds {
            e.resize(width, height);
        }
        if let Some(e) = &mut self.wind {
            e.resize(width, height);
        }
        if let Some(e) = &mut self.rain {
            e.resize(width, height);
        }
        if let Some(e) = &mut self.snow {
            e.resize(width, height);
        }
    }

    /// Advances every mounted layer one frame.
    pub fn tick(&mut self) {
        if let Some(e) = &mut self.stars {
            e.tick();
        }
        if let Some(e) = &mut self.sun {
            e.tick();
        }
        if let Some(e) = &mut self.clouds {
            e.tick();
        }
        if let Some(e) = &mut self.wind {
            e.tick();
        }
        if let Some(e) = &mut self.rain {
            e.tick();
        }
        if let Some(e) = &mut self.snow {
            e.tick();
        }
    }

    /// Drops every layer immediately.
    pub fn clear(&mut self) {
        self.stars = None;
        self.sun = None;
        self.clouds = None;
        self.wind = None;
        self.rain = None;
        self.snow = None;
    }

    /// Mounted surfaces back-to-front for compositing.
    pub fn layers(&self) -> Vec<(&Surface, LayerStyle)> {
        let mut layers = Vec::with_capacity(6);
        if let Some(e) = &self.stars {
            layers.push((e.surface(), e.style()));
        }
        if let Some(e) = &self.sun {
            layers.push((e.surface(), e.style()));
        }
        if let Some(e) = &self.clouds {
            layers.push((e.surface(), e.style()));
        }
        if let Some(e) = &self.wind {
            layers.push((e.surface(), e.style()));
        }
        if let Some(e) = &self.rain {
            layers.push((e.surface(), e.style()));
        }
        if let Some(e) = &self.snow {
            layers.push((e.surface(), e.style()));
        }
        layers
    }

    pub fn mounted_count(&self) -> usize {
        self.layers().len()
    }

    pub fn has_rain(&self) -> bool {
        self.rain.is_some()
    }

    pub fn has_snow(&self) -> bool {
        self.snow.is_some()
    }

    pub fn has_clouds(&self) -> bool {
        self.clouds.is_some()
    }

    pub fn has_sun(&self) -> bool {
        self.sun.is_some()
    }

    pub fn has_stars(&self) -> bool {
        self.stars.is_some()
    }

    pub fn has_wind(&self) -> bool {
        self.wind.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::compose::{WeatherSnapshot, compose};

    fn sized_stack() -> SceneStack {
        let mut stack = SceneStack::new();
        stack.resize(80, 24);
        stack
    }

    fn snapshot(code: u8, wind: f32, is_day: bool) -> WeatherSnapshot {
        WeatherSnapshot {
            weather_code: Some(code),
            wind_speed: Some(wind),
            wind_gusts: None,
            is_day: Some(is_day),
        }
    }

    #[test]
    fn storm_mounts_rain_clouds_and_wind() {
        let mut stack = sized_stack();
        stack.apply(&compose(&snapshot(96, 28.0, true)));
        assert!(stack.has_rain());
        assert!(stack.has_clouds());
        assert!(stack.has_wind());
        assert!(!stack.has_snow());
        assert!(!stack.has_stars());
        assert!(!stack.has_sun());
        assert_eq!(stack.mounted_count(), 3);
    }

    #[test]
    fn switching_rain_to_snow_swaps_the_layers() {
        let mut stack = sized_stack();
        stack.apply(&compose(&snapshot(65, 9.0, true)));
        assert!(stack.has_rain());
        stack.apply(&compose(&snapshot(75, 12.0, true)));
        assert!(!stack.has_rain());
        assert!(stack.has_snow());
    }

    #[test]
    fn unchanged_params_keep_the_running_engine() {
        let mut stack = sized_stack();
        let scene = compose(&snapshot(0, 4.0, false));
        stack.apply(&scene);
        for _ in 0..5 {
            stack.tick();
        }
        let before: Vec<usize> = stack.layers().iter().map(|(s, _)| s.lit_count()).collect();
        stack.apply(&scene);
        let after: Vec<usize> = stack.layers().iter().map(|(s, _)| s.lit_count()).collect();
        // Reapplying identical params must not wipe surfaces by reseeding.
        assert_eq!(before, after);
    }

    #[test]
    fn clearing_unmounts_everything() {
        let mut stack = sized_stack();
        stack.apply(&compose(&snapshot(86, 20.0, false)));
        assert!(stack.mounted_count() > 0);
        stack.clear();
        assert_eq!(stack.mounted_count(), 0);
    }

    #[test]
    fn ticks_after_clear_do_nothing() {
        let mut stack = sized_stack();
        stack.apply(&compose(&snapshot(61, 10.0, false)));
        stack.clear();
        stack.tick();
        assert_eq!(stack.mounted_count(), 0);
    }

    #[test]
    fn layers_come_back_to_front() {
        let mut stack = sized_stack();
        // Clear night: stars only, then a rainy day: clouds, wind, rain.
        stack.apply(&compose(&snapshot(65, 30.0, true)));
        let styles: Vec<LayerStyle> = stack.layers().iter().map(|(_, s)| *s).collect();
        assert_eq!(styles, vec![CLOUD_STYLE, WIND_STYLE, RAIN_STYLE]);
    }

    #[test]
    fn empty_snapshot_unmounts_all_layers() {
        let mut stack = sized_stack();
        stack.apply(&compose(&snapshot(96, 28.0, true)));
        assert!(stack.mounted_count() > 0);
        stack.apply(&compose(&WeatherSnapshot::default()));
        assert_eq!(stack.mounted_count(), 0);
    }
}
