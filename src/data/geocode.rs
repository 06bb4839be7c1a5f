use reqwest::Client;
use serde::Deserialize;

use crate::data::DataError;
use crate::domain::weather::Location;

const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Free-text city search, best matches first as the API returns them.
    pub async fn search(
        &self,
        name: &str,
        count: u8,
        country: Option<&str>,
    ) -> Result<Vec<Location>, DataError> {
        let count = count.to_string();
        let mut request = self.client.get(&self.base_url).query(&[
            ("name", name),
            ("count", count.as_str()),
            ("language", "en"),
            ("format", "json"),
        ]);
        if let Some(code) = country {
            request = request.query(&[("countryCode", code)]);
        }
        let response = request
            .send()
            .await
            .map_err(DataError::Geocode)?
            .error_for_status()
            .map_err(DataError::Geocode)?;

        let payload: GeocodeResponse = response.json().await.map_err(DataError::Geocode)?;

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|entry| Location {
                name: entry.name,
                latitude: entry.latitude,
                longitude: entry.longitude,
                country: entry.country,
                admin1: entry.admin1,
            })
            .collect())
    }

    /// Best match for a submitted city name.
    pub async fn lookup(&self, name: &str, country: Option<&str>) -> Result<Location, DataError> {
        let mut results = self.search(name, 1, country).await?;
        if results.is_empty() {
            return Err(DataError::CityNotFound);
        }
        Ok(results.remove(0))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}
