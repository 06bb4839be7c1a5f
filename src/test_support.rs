use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::cli::{Cli, UnitsArg};
use crate::domain::weather::{
    CurrentConditions, DailyOutlook, ForecastBundle, HourlySample, Location,
};

fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

pub(crate) fn test_cli() -> Cli {
    Cli {
        city: None,
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

pub(crate) fn sheffield_location() -> Location {
    Location {
        name: "Sheffield".to_string(),
        latitude: 53.3811,
        longitude: -1.4701,
        country: Some("United Kingdom".to_string()),
        admin1: Some("England".to_string()),
    }
}

pub(crate) fn sample_current() -> CurrentConditions {
    CurrentConditions {
        time: Some(parse_time("2026-02-12T10:00")),
        temperature: Some(7.0),
        apparent_temperature: Some(5.0),
        humidity: Some(72.0),
        wind_speed: Some(10.0),
        wind_gusts: Some(15.0),
        weather_code: Some(3),
        is_day: Some(true),
        pressure: Some(1008.0),
        cloud_cover: Some(40.0),
        visibility: Some(10_000.0),
    }
}

pub(crate) fn sample_hourly() -> Vec<HourlySample> {
    let start = parse_time("2026-02-12T10:00");
    (0..24)
        .map(|i| HourlySample {
            time: start + Duration::hours(i),
            temperature: Some(7.0 - i as f32 * 0.1),
            apparent_temperature: Some(5.0 - i as f32 * 0.1),
        })
        .collect()
}

pub(crate) fn sample_daily() -> Vec<DailyOutlook> {
    let start = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date fixture");
    (0..7)
        .map(|i| DailyOutlook {
            date: start + Duration::days(i),
            high: Some(8.0),
            low: Some(1.0),
            sunrise: (start + Duration::days(i)).and_hms_opt(7, 24, 0),
            sunset: (start + Duration::days(i)).and_hms_opt(17, 3, 0),
            wind_gusts_max: Some(15.0),
            precipitation_sum: Some(0.4),
            precipitation_probability: Some(35.0),
            uv_index_max: Some(2.0),
            weather_code: Some(3),
        })
        .collect()
}

pub(crate) fn sample_bundle() -> ForecastBundle {
    ForecastBundle {
        location: "Sheffield, United Kingdom".to_string(),
        timezone: Some("Europe/London".to_string()),
        current: sample_current(),
        hourly: sample_hourly(),
        daily: sample_daily(),
        fetched_at: Local::now(),
    }
}
