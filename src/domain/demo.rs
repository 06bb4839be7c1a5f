//! Canned weather for offline demo mode.
//!
//! Each scenario fabricates a full forecast bundle shaped like a live
//! response, so every panel and the animated backdrop have data to show
//! without touching the network.

use chrono::{Duration, Local, Timelike};
use rand::Rng;

use crate::domain::weather::{CurrentConditions, DailyOutlook, ForecastBundle, HourlySample};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub weather_code: u8,
    pub temperature: f32,
    pub wind_speed: f32,
    pub is_day: bool,
}

pub const SCENARIOS: [Scenario; 8] = [
    Scenario {
        name: "Sunny day",
        weather_code: 0,
        temperature: 24.0,
        wind_speed: 6.0,
        is_day: true,
    },
    Scenario {
        name: "Cloudy",
        weather_code: 3,
        temperature: 12.0,
        wind_speed: 10.0,
        is_day: true,
    },
    Scenario {
        name: "Cloudy sunny",
        weather_code: 3,
        temperature: 18.0,
        wind_speed: 8.0,
        is_day: true,
    },
    Scenario {
        name: "Rain",
        weather_code: 65,
        temperature: 9.0,
        wind_speed: 18.0,
        is_day: true,
    },
    Scenario {
        name: "Snow",
        weather_code: 75,
        temperature: -2.0,
        wind_speed: 12.0,
        is_day: true,
    },
    Scenario {
        name: "Windy",
        weather_code: 3,
        temperature: 14.0,
        wind_speed: 32.0,
        is_day: true,
    },
    Scenario {
        name: "Storm",
        weather_code: 96,
        temperature: 14.0,
        wind_speed: 28.0,
        is_day: true,
    },
    Scenario {
        name: "Clear night",
        weather_code: 0,
        temperature: 8.0,
        wind_speed: 4.0,
        is_day: false,
    },
];

pub fn find(name: &str) -> Option<&'static Scenario> {
    let wanted = name.trim();
    SCENARIOS
        .iter()
        .find(|scenario| scenario.name.eq_ignore_ascii_case(wanted))
}

pub fn bundle(scenario: &Scenario) -> ForecastBundle {
    let mut rng = rand::rng();
    let now = Local::now().naive_local();
    let hour_start = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    let hourly = (0..24)
        .map(|i| HourlySample {
            time: hour_start + Duration::hours(i),
            temperature: Some(scenario.temperature + rng.random_range(-2.0..2.0)),
            apparent_temperature: Some(scenario.temperature - 1.0 + rng.random_range(-2.0..2.0)),
        })
        .collect();

    let daily = (0..7)
        .map(|i| {
            let date = now.date() + Duration::days(i);
            DailyOutlook {
                date,
                high: Some(scenario.temperature + 3.0),
                low: Some(scenario.temperature - 2.0),
                sunrise: date.and_hms_opt(7, 30, 0),
                sunset: date.and_hms_opt(16, 30, 0),
                wind_gusts_max: Some(scenario.wind_speed * 1.5),
                precipitation_sum: Some(5.0),
                precipitation_probability: Some(50.0),
                uv_index_max: Some(2.0),
                weather_code: Some(scenario.weather_code),
            }
        })
        .collect();

    ForecastBundle {
        location: format!("{} (Demo)", scenario.name),
        timezone: None,
        current: CurrentConditions {
            time: Some(now),
            temperature: Some(scenario.temperature),
            apparent_temperature: Some(scenario.temperature - 1.0),
            humidity: Some(70.0),
            wind_speed: Some(scenario.wind_speed),
            wind_gusts: Some(scenario.wind_speed * 1.4),
            weather_code: Some(scenario.weather_code),
            is_day: Some(scenario.is_day),
            pressure: Some(1012.0),
            cloud_cover: Some(60.0),
            visibility: Some(9000.0),
        },
        hourly,
        daily,
        fetched_at: Local::now(),
    }
}
