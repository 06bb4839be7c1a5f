//! Pure classifiers from weather signals to per-effect parameters.
//!
//! Inputs arrive straight from the forecast payload and may be absent;
//! every classifier treats a missing value as "no effect" and a missing
//! wind speed as calm. Outputs are plain records: a disabled record is
//! all-zero and its numeric fields carry no meaning.

/// Codes that read as rain for effect purposes. Freezing rain (66/67) is
/// labeled but drives no rain layer, matching the condition tables.
pub fn is_rainy_code(code: u8) -> bool {
    matches!(
        code,
        51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 80 | 81 | 82 | 95 | 96 | 99
    )
}

/// Codes that read as snow for effect purposes.
pub fn is_snowy_code(code: u8) -> bool {
    matches!(code, 71 | 73 | 75 | 77 | 85 | 86)
}

/// Human label for a weather code; unknown codes map to the empty string.
pub fn condition_from_code(code: Option<u8>) -> &'static str {
    match code {
        Some(0) => "Clear skies",
        Some(1 | 2) => "Partly cloudy",
        Some(3) => "Overcast",
        Some(45 | 48) => "Foggy",
        Some(51 | 53 | 55 | 56 | 57) => "Drizzle",
        Some(61 | 63 | 65) => "Raining",
        Some(66 | 67) => "Freezing rain",
        Some(71 | 73 | 75) => "Snowing",
        Some(77) => "Snow grains",
        Some(80 | 81 | 82) => "Showers",
        Some(85 | 86) => "Snow showers",
        Some(95 | 96 | 99) => "Thunderstorm",
        _ => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RainParams {
    pub enabled: bool,
    pub intensity: f32,
    pub wind: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnowParams {
    pub enabled: bool,
    pub intensity: f32,
    pub wind: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CloudParams {
    pub enabled: bool,
    pub intensity: f32,
    pub wind: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SunParams {
    pub enabled: bool,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindParams {
    pub enabled: bool,
    pub intensity: f32,
    pub speed: f32,
}

pub fn rain_from_code(code: Option<u8>, wind_speed: Option<f32>) -> RainParams {
    let Some(code) = code else {
        return RainParams::default();
    };
    let wind = wind_speed.unwrap_or(0.0);
    match code {
        // drizzle, incl. freezing drizzle
        51 | 53 | 55 | 56 | 57 => RainParams {
            enabled: true,
            intensity: 0.6,
            wind: wind * 0.03,
        },
        // rain and rain showers
        61 | 63 | 65 | 80 | 81 | 82 => RainParams {
            enabled: true,
            intensity: 1.1,
            wind: wind * 0.04,
        },
        // thunderstorms
        95 | 96 | 99 => RainParams {
            enabled: true,
            intensity: 1.5,
            wind: wind * 0.06,
        },
        _ => RainParams::default(),
    }
}

pub fn snow_from_code(code: Option<u8>, wind_speed: Option<f32>) -> SnowParams {
    let Some(code) = code else {
        return SnowParams::default();
    };
    let wind = wind_speed.unwrap_or(0.0);
    match code {
        // snow showers
        85 | 86 => SnowParams {
            enabled: true,
            intensity: 1.2,
            wind: wind * 0.03,
        },
        // snow grains
        77 => SnowParams {
            enabled: true,
            intensity: 0.7,
            wind: wind * 0.02,
        },
        // steady snowfall
        71 | 73 | 75 => SnowParams {
            enabled: true,
            intensity: 1.0,
            wind: wind * 0.025,
        },
        _ => SnowParams::default(),
    }
}

pub fn clouds_from_code(code: Option<u8>) -> CloudParams {
    let Some(code) = code else {
        return CloudParams::default();
    };
    match code {
        0 | 1 => CloudParams::default(),
        2 => CloudParams {
            enabled: true,
            intensity: 0.65,
            wind: 0.05,
        },
        3 | 45 | 48 => CloudParams {
            enabled: true,
            intensity: 0.8,
            wind: 0.1,
        },
        c if is_rainy_code(c) => CloudParams {
            enabled: true,
            intensity: 1.0,
            wind: 0.15,
        },
        _ => CloudParams::default(),
    }
}

/// Sunshine strength by sky clarity. The day/night gate is applied later,
/// during composition, together with the cloud dimming factor.
pub fn sunshine_from_code(code: Option<u8>) -> SunParams {
    let intensity = match code {
        Some(0) => 1.2,
        Some(1) => 0.8,
        Some(2) => 0.5,
        Some(3) => 0.4,
        _ => return SunParams::default(),
    };
    SunParams {
        enabled: true,
        intensity,
    }
}

/// Wind streaks appear once the effective level, the stronger of the raw
/// speed and 80% of the gust speed, reaches 18 km/h.
pub fn wind_effect_from_speed(wind_speed: Option<f32>, wind_gusts: Option<f32>) -> WindParams {
    let speed = wind_speed.unwrap_or(0.0);
    let gusts = wind_gusts.unwrap_or(0.0);
    let level = speed.max(gusts * 0.8);
    if level < 18.0 {
        return WindParams::default();
    }
    WindParams {
        enabled: true,
        intensity: (level / 18.0).min(1.8),
        speed: 0.8 + level / 25.0,
    }
}
