#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use skycast::{
    app::state::{AppMode, AppState},
    cli::{Cli, UnitsArg},
    domain::weather::{
        CurrentConditions, DailyOutlook, ForecastBundle, HourlySample, Location,
    },
};

pub fn sheffield_cli() -> Cli {
    Cli {
        city: Some("Sheffield".to_string()),
        units: UnitsArg::Celsius,
        country_code: None,
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        lat: None,
        lon: None,
        refresh_interval: 600,
        geocode_url: None,
        forecast_url: None,
        neo_url: None,
        nasa_key: None,
        demo: None,
        one_shot: false,
    }
}

pub fn sheffield_location() -> Location {
    Location {
        name: "Sheffield".to_string(),
        latitude: 53.3811,
        longitude: -1.4701,
        country: Some("United Kingdom".to_string()),
        admin1: Some("England".to_string()),
    }
}

pub fn fixture_bundle(weather_code: u8) -> ForecastBundle {
    let base_time = NaiveDateTime::parse_from_str("2026-02-12T10:00", "%Y-%m-%dT%H:%M")
        .expect("valid fixed time");
    let base_date = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid fixed date");

    let hourly = (0..24)
        .map(|idx| HourlySample {
            time: base_time + chrono::Duration::hours(i64::from(idx)),
            temperature: Some(5.0 + idx as f32 * 0.5),
            apparent_temperature: Some(4.0 + idx as f32 * 0.5),
        })
        .collect::<Vec<_>>();

    let daily = (0..7)
        .map(|idx| {
            let date = base_date + chrono::Duration::days(i64::from(idx));
            DailyOutlook {
                date,
                high: Some(8.0 + idx as f32),
                low: Some(1.0 + idx as f32 * 0.3),
                sunrise: date.and_hms_opt(7, 24, 0),
                sunset: date.and_hms_opt(17, 3, 0),
                wind_gusts_max: Some(22.0 + idx as f32),
                precipitation_sum: Some(2.5),
                precipitation_probability: Some(40.0),
                uv_index_max: Some(2.0),
                weather_code: Some(weather_code),
            }
        })
        .collect::<Vec<_>>();

    ForecastBundle {
        location: "Sheffield, United Kingdom".to_string(),
        timezone: Some("Europe/London".to_string()),
        current: CurrentConditions {
            time: Some(base_time),
            temperature: Some(7.2),
            apparent_temperature: Some(5.8),
            humidity: Some(73.0),
            wind_speed: Some(12.0),
            wind_gusts: Some(21.0),
            weather_code: Some(weather_code),
            is_day: Some(true),
            pressure: Some(1008.2),
            cloud_cover: Some(42.0),
            visibility: Some(11_200.0),
        },
        hourly,
        daily,
        fetched_at: chrono::Local::now(),
    }
}

pub fn state_with_weather(cli: &Cli, bundle: ForecastBundle) -> AppState {
    let mut state = AppState::new(cli);
    state.weather = Some(bundle);
    state.mode = AppMode::Ready;
    state
}
