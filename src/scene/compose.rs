//! Scene composition: one weather snapshot in, one immutable parameter
//! bundle out.
//!
//! This is the only place cross-effect rules live. Classifiers stay
//! independent; composition derives the star field from cloud cover and
//! precipitation, gates sunshine on daylight, and dims it by cloud cover.
//! Callers recompute the whole bundle on every confirmed weather change
//! and hand it to [`SceneStack::apply`](crate::scene::stack::SceneStack).

use crate::scene::background::{Background, background_from_weather};
use crate::scene::classify::{
    CloudParams, RainParams, SnowParams, SunParams, WindParams, clouds_from_code, rain_from_code,
    snow_from_code, sunshine_from_code, wind_effect_from_speed,
};

/// The four forecast signals the scene reads. Every field is optional;
/// an empty snapshot composes to a bare clear-night sky.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeatherSnapshot {
    pub weather_code: Option<u8>,
    pub wind_speed: Option<f32>,
    pub wind_gusts: Option<f32>,
    pub is_day: Option<bool>,
}

/// Star field parameters, derived during composition rather than by a
/// classifier: precipitation suppresses stars and cloud cover thins them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StarParams {
    pub enabled: bool,
    pub density: f32,
    pub twinkle_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneParams {
    pub background: Background,
    pub rain: RainParams,
    pub snow: SnowParams,
    pub clouds: CloudParams,
    pub sun: SunParams,
    pub stars: StarParams,
    pub wind: WindParams,
}

pub fn compose(snapshot: &WeatherSnapshot) -> SceneParams {
    let code = snapshot.weather_code;
    let rain = rain_from_code(code, snapshot.wind_speed);
    let snow = snow_from_code(code, snapshot.wind_speed);
    let clouds = clouds_from_code(code);
    let wind = wind_effect_from_speed(snapshot.wind_speed, snapshot.wind_gusts);
    let sunshine = sunshine_from_code(code);

    let cloudiness = if clouds.enabled { clouds.intensity } else { 0.0 };
    let is_day = snapshot.is_day == Some(true);
    let is_night = snapshot.is_day == Some(false);

    // Rain hides the sun outright; otherwise clouds dim it proportionally.
    let sun_factor = if rain.enabled { 0.0 } else { 1.0 - cloudiness };
    let sun = if sunshine.enabled && is_day {
        SunParams {
            enabled: true,
            intensity: sunshine.intensity * sun_factor,
        }
    } else {
        SunParams::default()
    };

    let stars = if is_night && !rain.enabled && !snow.enabled {
        StarParams {
            enabled: true,
            density: (1.0 - cloudiness * 0.6).max(0.6),
            twinkle_speed: 0.05 + cloudiness * 0.02,
        }
    } else {
        StarParams::default()
    };

    SceneParams {
        background: background_from_weather(
            code,
            snapshot.is_day,
            snapshot.wind_speed,
            snapshot.wind_gusts,
        ),
        rain,
        snow,
        clouds,
        sun,
        stars,
        wind,
    }
}
