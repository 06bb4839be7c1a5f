//! Forecast data model.
//!
//! Everything numeric coming off the wire is optional; providers drop
//! fields without warning and the panels render `--` rather than guessing.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl Location {
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
            country: None,
            admin1: None,
        }
    }

    /// Short label for the dashboard header.
    pub fn label(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }

    /// Longer line for the suggestion dropdown, with the admin area when
    /// one is present to tell namesake towns apart.
    pub fn suggestion_line(&self) -> String {
        let mut line = self.name.clone();
        if let Some(admin1) = &self.admin1 {
            line.push_str(", ");
            line.push_str(admin1);
        }
        if let Some(country) = &self.country {
            line.push_str(", ");
            line.push_str(country);
        }
        line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Forecast temperatures arrive in Celsius; conversion happens at display
/// time only.
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurrentConditions {
    pub time: Option<NaiveDateTime>,
    pub temperature: Option<f32>,
    pub apparent_temperature: Option<f32>,
    pub humidity: Option<f32>,
    pub wind_speed: Option<f32>,
    pub wind_gusts: Option<f32>,
    pub weather_code: Option<u8>,
    pub is_day: Option<bool>,
    pub pressure: Option<f32>,
    pub cloud_cover: Option<f32>,
    pub visibility: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlySample {
    pub time: NaiveDateTime,
    pub temperature: Option<f32>,
    pub apparent_temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    pub high: Option<f32>,
    pub low: Option<f32>,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    pub wind_gusts_max: Option<f32>,
    pub precipitation_sum: Option<f32>,
    pub precipitation_probability: Option<f32>,
    pub uv_index_max: Option<f32>,
    pub weather_code: Option<u8>,
}

impl DailyOutlook {
    pub fn mean_temp(&self) -> Option<f32> {
        Some((self.high? + self.low?) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    pub location: String,
    pub timezone: Option<String>,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlySample>,
    pub daily: Vec<DailyOutlook>,
    pub fetched_at: DateTime<Local>,
}

impl ForecastBundle {
    pub fn today(&self) -> Option<&DailyOutlook> {
        self.daily.first()
    }

    pub fn today_high(&self) -> Option<f32> {
        self.today().and_then(|d| d.high)
    }

    pub fn today_low(&self) -> Option<f32> {
        self.today().and_then(|d| d.low)
    }

    /// Index of the first hourly sample at or after the observation time,
    /// so the hourly strip starts "now" rather than at midnight.
    pub fn hourly_start(&self) -> usize {
        let Some(now) = self.current.time else {
            return 0;
        };
        self.hourly
            .iter()
            .position(|sample| sample.time >= now)
            .unwrap_or(0)
    }
}

/// Open-Meteo timestamps: minute resolution, no zone suffix.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_conversion() {
        assert!((convert_temp(0.0, Units::Fahrenheit) - 32.0).abs() < f32::EPSILON);
        assert!((convert_temp(100.0, Units::Fahrenheit) - 212.0).abs() < f32::EPSILON);
        assert!((convert_temp(21.5, Units::Celsius) - 21.5).abs() < f32::EPSILON);
    }

    #[test]
    fn units_toggle_round_trips() {
        assert_eq!(Units::Celsius.toggled(), Units::Fahrenheit);
        assert_eq!(Units::Fahrenheit.toggled(), Units::Celsius);
    }

    #[test]
    fn parses_api_timestamps() {
        let parsed = parse_datetime("2026-08-21T14:30").unwrap();
        assert_eq!(
            parsed.format("%Y-%m-%d %H:%M").to_string(),
            "2026-08-21 14:30"
        );
        assert!(parse_datetime("not-a-time").is_none());
        assert!(parse_date("2026-08-21").is_some());
    }

    #[test]
    fn location_labels() {
        let location = Location {
            name: "Sheffield".into(),
            latitude: 53.38,
            longitude: -1.47,
            country: Some("United Kingdom".into()),
            admin1: Some("England".into()),
        };
        assert_eq!(location.label(), "Sheffield, United Kingdom");
        assert_eq!(
            location.suggestion_line(),
            "Sheffield, England, United Kingdom"
        );
    }

    #[test]
    fn coordinate_location_uses_numeric_name() {
        let location = Location::from_coords(53.3811, -1.4701);
        assert_eq!(location.name, "53.3811, -1.4701");
        assert_eq!(location.label(), "53.3811, -1.4701");
    }

    #[test]
    fn hourly_start_aligns_to_observation_time() {
        let base = parse_datetime("2026-08-21T10:00").unwrap();
        let hourly: Vec<HourlySample> = (0..6)
            .map(|i| HourlySample {
                time: base + chrono::Duration::hours(i),
                temperature: Some(10.0),
                apparent_temperature: None,
            })
            .collect();
        let bundle = ForecastBundle {
            location: "Test".into(),
            timezone: None,
            current: CurrentConditions {
                time: parse_datetime("2026-08-21T12:30"),
                ..CurrentConditions::default()
            },
            hourly,
            daily: Vec::new(),
            fetched_at: Local::now(),
        };
        assert_eq!(bundle.hourly_start(), 3);

        let mut headless = bundle.clone();
        headless.current.time = None;
        assert_eq!(headless.hourly_start(), 0);
    }

    #[test]
    fn mean_temp_needs_both_extremes() {
        let mut day = DailyOutlook {
            date: parse_date("2026-08-21").unwrap(),
            high: Some(12.0),
            low: Some(4.0),
            sunrise: None,
            sunset: None,
            wind_gusts_max: None,
            precipitation_sum: None,
            precipitation_probability: None,
            uv_index_max: None,
            weather_code: None,
        };
        assert_eq!(day.mean_temp(), Some(8.0));
        day.low = None;
        assert_eq!(day.mean_temp(), None);
    }
}
