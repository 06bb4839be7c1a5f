use proptest::prelude::*;
use skycast::scene::classify::{
    clouds_from_code, condition_from_code, is_rainy_code, is_snowy_code, rain_from_code,
    snow_from_code, wind_effect_from_speed,
};
use skycast::scene::{Background, WeatherSnapshot, background_from_weather, compose};

proptest! {
    #[test]
    fn precipitation_layers_never_double_up(code in 0u8..=255, wind in 0.0f32..120.0) {
        let rain = rain_from_code(Some(code), Some(wind));
        let snow = snow_from_code(Some(code), Some(wind));
        prop_assert!(
            !(rain.enabled && snow.enabled),
            "code {} classified as both rain and snow",
            code
        );
    }

    #[test]
    fn wind_streaks_need_the_threshold(speed in 0.0f32..200.0, gusts in 0.0f32..200.0) {
        let params = wind_effect_from_speed(Some(speed), Some(gusts));
        let level = speed.max(gusts * 0.8);
        prop_assert_eq!(params.enabled, level >= 18.0);
        if params.enabled {
            prop_assert!((1.0..=1.8).contains(&params.intensity));
            prop_assert!(params.speed >= 1.5);
        } else {
            prop_assert!(params.intensity == 0.0 && params.speed == 0.0);
        }
    }

    #[test]
    fn cloud_cover_and_drift_stay_in_band(code in 0u8..=255) {
        let clouds = clouds_from_code(Some(code));
        if clouds.enabled {
            prop_assert!(clouds.intensity > 0.0 && clouds.intensity <= 1.0);
            prop_assert!([0.05f32, 0.1, 0.15].contains(&clouds.wind));
        } else {
            prop_assert!(clouds.intensity == 0.0 && clouds.wind == 0.0);
        }
    }

    #[test]
    fn precipitation_drift_follows_the_wind(code in 0u8..=255, wind in 0.0f32..120.0) {
        let rain = rain_from_code(Some(code), Some(wind));
        let snow = snow_from_code(Some(code), Some(wind));
        prop_assert!(rain.wind >= 0.0 && rain.wind <= wind * 0.06 + 1e-6);
        prop_assert!(snow.wind >= 0.0 && snow.wind <= wind * 0.03 + 1e-6);
    }

    #[test]
    fn condition_labels_cover_exactly_the_known_codes(code in 0u8..=255) {
        let known = matches!(
            code,
            0..=3
                | 45
                | 48
                | 51
                | 53
                | 55..=57
                | 61
                | 63
                | 65..=67
                | 71
                | 73
                | 75
                | 77
                | 80..=82
                | 85
                | 86
                | 95
                | 96
                | 99
        );
        prop_assert_eq!(condition_from_code(Some(code)).is_empty(), !known);
    }

    #[test]
    fn labels_agree_with_the_code_sets(code in 0u8..=255) {
        let label = condition_from_code(Some(code));
        if is_rainy_code(code) {
            prop_assert!(["Drizzle", "Raining", "Showers", "Thunderstorm"].contains(&label));
        }
        if is_snowy_code(code) {
            prop_assert!(["Snowing", "Snow grains", "Snow showers"].contains(&label));
        }
    }

    #[test]
    fn the_sun_never_shines_through_rain(
        code in 0u8..=255,
        wind in 0.0f32..120.0,
        gusts in 0.0f32..150.0,
        is_day in any::<bool>(),
    ) {
        let scene = compose(&WeatherSnapshot {
            weather_code: Some(code),
            wind_speed: Some(wind),
            wind_gusts: Some(gusts),
            is_day: Some(is_day),
        });
        if scene.sun.enabled {
            prop_assert!(is_day);
            prop_assert!(!scene.rain.enabled);
            prop_assert!(scene.sun.intensity > 0.0);
        }
    }

    #[test]
    fn stars_only_come_out_on_dry_nights(
        code in 0u8..=255,
        wind in 0.0f32..120.0,
        is_day in any::<bool>(),
    ) {
        let scene = compose(&WeatherSnapshot {
            weather_code: Some(code),
            wind_speed: Some(wind),
            wind_gusts: None,
            is_day: Some(is_day),
        });
        let dry = !is_rainy_code(code) && !is_snowy_code(code);
        prop_assert_eq!(scene.stars.enabled, !is_day && dry);
        if scene.stars.enabled {
            prop_assert!((0.6..=1.0).contains(&scene.stars.density));
            prop_assert!(scene.stars.twinkle_speed > 0.0);
        }
    }

    #[test]
    fn background_severity_order_holds(
        code in 0u8..=255,
        wind in 0.0f32..120.0,
        gusts in 0.0f32..150.0,
        is_day in any::<bool>(),
    ) {
        let bg = background_from_weather(Some(code), Some(is_day), Some(wind), Some(gusts));
        prop_assert_eq!(bg.is_day(), is_day);
        if is_snowy_code(code) {
            prop_assert!(matches!(bg, Background::SnowyDay | Background::SnowyNight));
        } else if is_rainy_code(code) {
            prop_assert!(matches!(bg, Background::RainyDay | Background::RainyNight));
        } else if wind.max(gusts * 0.8) >= 18.0 {
            prop_assert!(matches!(bg, Background::WindyDay | Background::WindyNight));
        } else {
            prop_assert!(matches!(bg, Background::ClearDay | Background::ClearNight));
        }
    }
}
