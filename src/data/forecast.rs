use chrono::Local;
use reqwest::Client;
use serde::Deserialize;

use crate::data::DataError;
use crate::domain::weather::{
    CurrentConditions, DailyOutlook, ForecastBundle, HourlySample, Location, parse_date,
    parse_datetime,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, location: &Location) -> Result<ForecastBundle, DataError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,wind_gusts_10m,weather_code,is_day,pressure_msl,cloud_cover,visibility"
                        .to_string(),
                ),
                ("hourly", "temperature_2m,apparent_temperature".to_string()),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,sunrise,sunset,wind_gusts_10m_max,precipitation_sum,precipitation_probability_max,uv_index_max,weather_code"
                        .to_string(),
                ),
                ("timezone", "auto".to_string()),
                ("forecast_days", "7".to_string()),
                ("forecast_hours", "48".to_string()),
            ])
            .send()
            .await
            .map_err(DataError::Forecast)?
            .error_for_status()
            .map_err(DataError::Forecast)?;

        let payload: ForecastResponse = response.json().await.map_err(DataError::Forecast)?;

        Ok(ForecastBundle {
            location: location.label(),
            timezone: payload.timezone,
            current: parse_current(&payload.current),
            hourly: parse_hourly(&payload.hourly),
            daily: parse_daily(&payload.daily),
            fetched_at: Local::now(),
        })
    }
}

fn parse_current(current: &CurrentBlock) -> CurrentConditions {
    CurrentConditions {
        time: current.time.as_deref().and_then(parse_datetime),
        temperature: current.temperature_2m,
        apparent_temperature: current.apparent_temperature,
        humidity: current.relative_humidity_2m,
        wind_speed: current.wind_speed_10m,
        wind_gusts: current.wind_gusts_10m,
        weather_code: current.weather_code,
        is_day: current.is_day.map(|v| v == 1),
        pressure: current.pressure_msl,
        cloud_cover: current.cloud_cover,
        visibility: current.visibility,
    }
}

fn parse_hourly(hourly: &HourlyBlock) -> Vec<HourlySample> {
    let mut out = Vec::new();
    for idx in 0..hourly.time.len() {
        let Some(time) = parse_datetime(&hourly.time[idx]) else {
            continue;
        };

        out.push(HourlySample {
            time,
            temperature: hourly.temperature_2m.get(idx).copied().flatten(),
            apparent_temperature: hourly.apparent_temperature.get(idx).copied().flatten(),
        });
    }
    out
}

fn parse_daily(daily: &DailyBlock) -> Vec<DailyOutlook> {
    let mut out = Vec::new();
    for idx in 0..daily.time.len() {
        let Some(date) = parse_date(&daily.time[idx]) else {
            continue;
        };

        out.push(DailyOutlook {
            date,
            high: daily.temperature_2m_max.get(idx).copied().flatten(),
            low: daily.temperature_2m_min.get(idx).copied().flatten(),
            sunrise: daily.sunrise.get(idx).and_then(|v| parse_datetime(v)),
            sunset: daily.sunset.get(idx).and_then(|v| parse_datetime(v)),
            wind_gusts_max: daily.wind_gusts_10m_max.get(idx).copied().flatten(),
            precipitation_sum: daily.precipitation_sum.get(idx).copied().flatten(),
            precipitation_probability: daily
                .precipitation_probability_max
                .get(idx)
                .copied()
                .flatten(),
            uv_index_max: daily.uv_index_max.get(idx).copied().flatten(),
            weather_code: daily.weather_code.get(idx).copied().flatten(),
        });
    }
    out
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    timezone: Option<String>,
    current: CurrentBlock,
    hourly: HourlyBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: Option<String>,
    temperature_2m: Option<f32>,
    apparent_temperature: Option<f32>,
    relative_humidity_2m: Option<f32>,
    wind_speed_10m: Option<f32>,
    wind_gusts_10m: Option<f32>,
    weather_code: Option<u8>,
    is_day: Option<u8>,
    pressure_msl: Option<f32>,
    cloud_cover: Option<f32>,
    visibility: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f32>>,
    #[serde(default)]
    apparent_temperature: Vec<Option<f32>>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f32>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f32>>,
    #[serde(default)]
    sunrise: Vec<String>,
    #[serde(default)]
    sunset: Vec<String>,
    #[serde(default)]
    wind_gusts_10m_max: Vec<Option<f32>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f32>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f32>>,
    #[serde(default)]
    uv_index_max: Vec<Option<f32>>,
    #[serde(default)]
    weather_code: Vec<Option<u8>>,
}
