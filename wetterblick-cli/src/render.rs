//! Text rendering for the three view states.
//!
//! Exactly one view per state: a spinner line while loading, an
//! icon-and-message block on error, or the weather summary with up to seven
//! daily rows.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate, Weekday};
use wetterblick_core::{DailyForecast, IconCategory, ViewState, WeatherSnapshot, description_de};

pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => render_loading(),
        ViewState::Error(message) => render_error(message),
        ViewState::Ready(snapshot) => render_ready(snapshot),
    }
}

fn render_loading() -> String {
    "⟳  Lade Wetterdaten...".to_string()
}

fn render_error(message: &str) -> String {
    format!("⚠  Standort-Fehler\n   {message}")
}

fn render_ready(snapshot: &WeatherSnapshot) -> String {
    let current = &snapshot.current;
    let category = IconCategory::from_wmo_code(current.weather_code);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}°C  {}",
        category.glyph(),
        current.temperature_c.round() as i64,
        description_de(current.weather_code),
    );
    let _ = writeln!(
        out,
        "{} · Stand {}",
        snapshot.location.display_name,
        current.observed_at.format("%H:%M"),
    );
    let _ = writeln!(out, "Wind: {} km/h", current.wind_speed_kmh.round() as i64);

    let _ = writeln!(out);
    let _ = writeln!(out, "7-Tage-Vorhersage");
    for day in &snapshot.daily {
        let _ = writeln!(out, "{}", render_daily_row(day));
    }

    out
}

fn render_daily_row(day: &DailyForecast) -> String {
    let category = IconCategory::from_wmo_code(day.weather_code);
    format!(
        "{}  {}  {:<34} {:>3}° / {:>3}°  {:>3}% Regen",
        category.glyph(),
        format_date_de(day.date),
        description_de(day.weather_code),
        day.temp_max_c.round() as i64,
        day.temp_min_c.round() as i64,
        day.precipitation_probability_pct,
    )
}

fn format_date_de(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    };
    format!("{weekday} {:>2}.", date.day())
}
