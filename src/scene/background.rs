//! Background gradient selection.
//!
//! Exactly one gradient is active at a time, picked by condition severity:
//! snow wins over rain, rain over strong wind, and anything else falls back
//! to the clear-sky pair. Day selection requires an affirmative daylight
//! flag; an absent flag renders the night variant.

use crate::scene::classify::{is_rainy_code, is_snowy_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    SnowyDay,
    SnowyNight,
    RainyDay,
    RainyNight,
    WindyDay,
    WindyNight,
    ClearDay,
    #[default]
    ClearNight,
}

impl Background {
    pub fn is_day(self) -> bool {
        matches!(
            self,
            Self::SnowyDay | Self::RainyDay | Self::WindyDay | Self::ClearDay
        )
    }
}

pub fn background_from_weather(
    code: Option<u8>,
    is_day: Option<bool>,
    wind_speed: Option<f32>,
    wind_gusts: Option<f32>,
) -> Background {
    let day = is_day == Some(true);
    let level = wind_speed
        .unwrap_or(0.0)
        .max(wind_gusts.unwrap_or(0.0) * 0.8);

    if code.is_some_and(is_snowy_code) {
        if day {
            Background::SnowyDay
        } else {
            Background::SnowyNight
        }
    } else if code.is_some_and(is_rainy_code) {
        if day {
            Background::RainyDay
        } else {
            Background::RainyNight
        }
    } else if level >= 18.0 {
        if day {
            Background::WindyDay
        } else {
            Background::WindyNight
        }
    } else if day {
        Background::ClearDay
    } else {
        Background::ClearNight
    }
}
