//! HTTP clients for the forecast, geocoding and NEO feeds.

pub mod forecast;
pub mod geocode;
pub mod neo;

use thiserror::Error;

/// Failures surfaced to the user. The display strings are shown verbatim
/// in the status banner, so keep them in plain English.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Could not look up that city")]
    Geocode(#[source] reqwest::Error),
    #[error("City not found")]
    CityNotFound,
    #[error("Could not load forecast")]
    Forecast(#[source] reqwest::Error),
    #[error("Could not load NASA flybys")]
    Neo(#[source] reqwest::Error),
}

impl DataError {
    /// Network-level failures are worth retrying; an unknown city is not.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::CityNotFound)
    }
}
