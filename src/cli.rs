#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::domain::demo::{SCENARIOS, Scenario};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DemoArg {
    SunnyDay,
    Cloudy,
    CloudySunny,
    Rain,
    Snow,
    Windy,
    Storm,
    ClearNight,
}

impl DemoArg {
    #[must_use]
    pub fn scenario(self) -> &'static Scenario {
        match self {
            Self::SunnyDay => &SCENARIOS[0],
            Self::Cloudy => &SCENARIOS[1],
            Self::CloudySunny => &SCENARIOS[2],
            Self::Rain => &SCENARIOS[3],
            Self::Snow => &SCENARIOS[4],
            Self::Windy => &SCENARIOS[5],
            Self::Storm => &SCENARIOS[6],
            Self::ClearNight => &SCENARIOS[7],
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Animated terminal weather dashboard"
)]
pub struct Cli {
    /// City name (default: Sheffield)
    pub city: Option<String>,

    /// Temperature units
    #[arg(long, value_enum, default_value_t = UnitsArg::Celsius)]
    pub units: UnitsArg,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable the animated backdrop
    #[arg(long)]
    pub no_animation: bool,

    /// Halve the animation rate
    #[arg(long)]
    pub reduced_motion: bool,

    /// Restrict geocoding to an ISO-3166 country code (e.g. GB)
    #[arg(long)]
    pub country_code: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 600)]
    pub refresh_interval: u64,

    /// Override the geocoding endpoint
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Override the forecast endpoint
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Override the NASA NEO feed endpoint
    #[arg(long)]
    pub neo_url: Option<String>,

    /// NASA API key for the flyby panel (falls back to $NASA_API_KEY)
    #[arg(long)]
    pub nasa_key: Option<String>,

    /// Render a canned scenario without touching the network
    #[arg(long, value_enum)]
    pub demo: Option<DemoArg>,

    /// Print a weather snapshot to stdout and exit
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city.clone().unwrap_or_else(|| "Sheffield".to_string())
    }

    #[must_use]
    pub fn api_key(&self) -> String {
        self.nasa_key
            .clone()
            .or_else(|| std::env::var("NASA_API_KEY").ok())
            .unwrap_or_else(|| "DEMO_KEY".to_string())
    }

    #[must_use]
    pub fn demo_scenario(&self) -> Option<&'static Scenario> {
        self.demo.map(DemoArg::scenario)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }
}
