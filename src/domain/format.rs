//! Small display formatters shared by the panels.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Rounded whole-degree temperature, `--` when the reading is missing.
pub fn format_temp(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{}", v.round() as i32),
        None => "--".to_string(),
    }
}

/// Fixed-precision number, `--` when missing.
pub fn format_number(value: Option<f32>, digits: usize) -> String {
    match value {
        Some(v) => format!("{v:.digits$}"),
        None => "--".to_string(),
    }
}

/// Clock time as `HH:MM`, `--` when missing.
pub fn format_time(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(t) => format!("{:02}:{:02}", t.hour(), t.minute()),
        None => "--".to_string(),
    }
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th... with the 11th/12th/13th
/// exceptions.
pub fn ordinal(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Header date line, e.g. "Friday 21st August".
pub fn date_line(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{} {}",
        date.format("%A"),
        day,
        ordinal(day),
        date.format("%B")
    )
}

/// Weekday abbreviation for the daily strip, e.g. "Fri".
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
