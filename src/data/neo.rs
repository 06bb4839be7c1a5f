//! NASA near-earth-object feed.
//!
//! The feed keys objects by calendar date and encodes most numbers as
//! strings. Everything is parsed leniently: a malformed field blanks that
//! cell rather than failing the whole panel.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::data::DataError;
use crate::domain::weather::parse_date;

const NEO_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// How many flybys the panel shows.
const FLYBY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct NeoFlyby {
    pub name: String,
    pub hazardous: bool,
    pub approach_date: NaiveDate,
    /// Full timestamp text when the feed provides one, date otherwise.
    pub approach_label: String,
    pub miss_km: Option<f64>,
    pub speed_kph: Option<f64>,
    pub orbiting_body: Option<String>,
    pub jpl_url: Option<String>,
    pub magnitude_h: Option<f32>,
    pub diameter_min_km: Option<f64>,
    pub diameter_max_km: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NeoClient {
    client: Client,
    base_url: String,
}

impl Default for NeoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NeoClient {
    pub fn new() -> Self {
        Self::with_base_url(NEO_URL)
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

    /// Upcoming flybys between the two dates, soonest first.
    pub async fn feed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        api_key: &str,
    ) -> Result<Vec<NeoFlyby>, DataError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("start_date", start.format("%Y-%m-%d").to_string()),
                ("end_date", end.format("%Y-%m-%d").to_string()),
                ("api_key", api_key.to_string()),
            ])
            .send()
            .await
            .map_err(DataError::Neo)?
            .error_for_status()
            .map_err(DataError::Neo)?;

        let payload: NeoFeedResponse = response.json().await.map_err(DataError::Neo)?;
        Ok(flatten_feed(payload))
    }
}

fn flatten_feed(payload: NeoFeedResponse) -> Vec<NeoFlyby> {
    let mut flybys: Vec<NeoFlyby> = payload
        .near_earth_objects
        .into_values()
        .flatten()
        .filter_map(flyby_from_object)
        .collect();

    flybys.sort_by(|a, b| a.approach_date.cmp(&b.approach_date));
    flybys.truncate(FLYBY_LIMIT);
    flybys
}

fn flyby_from_object(object: NeoObject) -> Option<NeoFlyby> {
    let approach = object.close_approach_data.into_iter().next()?;
    let date_text = approach.close_approach_date?;
    let approach_date = parse_date(&date_text)?;
    let approach_label = approach
        .close_approach_date_full
        .unwrap_or_else(|| date_text.clone());

    let diameter = object
        .estimated_diameter
        .and_then(|d| d.kilometers);

    Some(NeoFlyby {
        name: object.name,
        hazardous: object.is_potentially_hazardous_asteroid,
        approach_date,
        approach_label,
        miss_km: approach
            .miss_distance
            .and_then(|m| m.kilometers)
            .and_then(|v| v.parse().ok()),
        speed_kph: approach
            .relative_velocity
            .and_then(|v| v.kilometers_per_hour)
            .and_then(|v| v.parse().ok()),
        orbiting_body: approach.orbiting_body,
        jpl_url: object.nasa_jpl_url,
        magnitude_h: object.absolute_magnitude_h,
        diameter_min_km: diameter.as_ref().and_then(|d| d.estimated_diameter_min),
        diameter_max_km: diameter.as_ref().and_then(|d| d.estimated_diameter_max),
    })
}

#[derive(Debug, Deserialize)]
struct NeoFeedResponse {
    near_earth_objects: BTreeMap<String, Vec<NeoObject>>,
}

#[derive(Debug, Deserialize)]
struct NeoObject {
    name: String,
    nasa_jpl_url: Option<String>,
    absolute_magnitude_h: Option<f32>,
    #[serde(default)]
    is_potentially_hazardous_asteroid: bool,
    estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Deserialize)]
struct EstimatedDiameter {
    kilometers: Option<DiameterRange>,
}

#[derive(Debug, Deserialize)]
struct DiameterRange {
    estimated_diameter_min: Option<f64>,
    estimated_diameter_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CloseApproach {
    close_approach_date: Option<String>,
    close_approach_date_full: Option<String>,
    miss_distance: Option<MissDistance>,
    relative_velocity: Option<RelativeVelocity>,
    orbiting_body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MissDistance {
    kilometers: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelativeVelocity {
    kilometers_per_hour: Option<String>,
}
