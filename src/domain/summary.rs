//! Plain-language weather summaries.
//!
//! One sentence each for temperature, wind and humidity, joined into a
//! single line. Bands are inclusive at their upper edge.

use crate::domain::weather::{CurrentConditions, DailyOutlook};

fn temperature_phrase(celsius: f32) -> &'static str {
    if celsius <= 0.0 {
        "Freezing conditions, wrap up warm!"
    } else if celsius <= 4.0 {
        "Chilly weather outside, possible frost in places."
    } else if celsius <= 10.0 {
        "Cool out today."
    } else if celsius <= 20.0 {
        "Mild out, light layers recommended."
    } else if celsius <= 25.0 {
        "Warm and pleasant."
    } else if celsius <= 30.0 {
        "Warm to hot weather today."
    } else if celsius <= 35.0 {
        "It's set to be hot today."
    } else if celsius <= 40.0 {
        "Hot temperatures today, stay inside during peak sunlight hours."
    } else {
        "Very hot outdoors, stay hydrated, avoid strenuous activity and keep pets inside."
    }
}

fn wind_phrase(kmh: f32) -> &'static str {
    if kmh <= 1.0 {
        "Calm and still."
    } else if kmh <= 6.0 {
        "Gentle breezes."
    } else if kmh <= 20.0 {
        "Moderate breezes."
    } else if kmh <= 30.0 {
        "Fresh breezes."
    } else if kmh <= 40.0 {
        "Strong breeze today, hang on to your hat!"
    } else if kmh <= 50.0 {
        "Very strong winds, take care."
    } else if kmh <= 60.0 {
        "Gale force winds. Hard to walk outside."
    } else if kmh <= 75.0 {
        "Strong gales - watch out for debris."
    } else if kmh <= 89.0 {
        "Stormy conditions, stay indoors!"
    } else if kmh <= 100.0 {
        "Extreme wind damage likely - do not go outside, stay away from windows."
    } else {
        "Hurricane force winds - seek shelter immediately!"
    }
}

fn humidity_phrase(percent: f32) -> &'static str {
    if percent <= 20.0 {
        "Very dry air."
    } else if percent <= 40.0 {
        "Comfortable humidity levels."
    } else if percent <= 60.0 {
        "A bit humid."
    } else if percent <= 80.0 {
        "High humidity."
    } else {
        "Extremely humid."
    }
}

fn compose_summary(temperature: Option<f32>, wind: f32, humidity: f32) -> String {
    let Some(temperature) = temperature else {
        return String::new();
    };
    [
        temperature_phrase(temperature),
        wind_phrase(wind),
        humidity_phrase(humidity),
    ]
    .join(" ")
}

/// Summary line for the observation panel.
pub fn current_summary(current: &CurrentConditions) -> String {
    compose_summary(
        current.temperature,
        current.wind_speed.unwrap_or(0.0),
        current.humidity.unwrap_or(50.0),
    )
}

/// Summary line for a selected forecast day. Daily data has no wind speed
/// or humidity reading, so those fall back to neutral bands.
pub fn daily_summary(day: &DailyOutlook) -> String {
    compose_summary(day.mean_temp(), 0.0, 50.0)
}
