//! Presentation mapping for WMO weather codes.
//!
//! Pure lookup tables, decoupled from rendering so they can be unit tested
//! directly. Unknown codes never fail; they fall back to a default.

/// Icon bucket for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    RainShowers,
    SnowShowers,
    Thunderstorm,
}

impl IconCategory {
    /// Map a WMO weather code to its icon bucket. Ranges are inclusive;
    /// anything outside the documented ranges falls back to `Cloudy`.
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => IconCategory::Clear,
            1..=3 => IconCategory::Cloudy,
            45..=48 => IconCategory::Fog,
            51..=67 => IconCategory::Rain,
            71..=77 => IconCategory::Snow,
            80..=82 => IconCategory::RainShowers,
            85..=86 => IconCategory::SnowShowers,
            95..=99 => IconCategory::Thunderstorm,
            _ => IconCategory::Cloudy,
        }
    }

    /// Terminal glyph for this bucket.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Clear => "☀",
            IconCategory::Cloudy => "☁",
            IconCategory::Fog => "🌫",
            IconCategory::Rain => "🌧",
            IconCategory::Snow => "❄",
            IconCategory::RainShowers => "🌦",
            IconCategory::SnowShowers => "🌨",
            IconCategory::Thunderstorm => "⛈",
        }
    }
}

/// German description for a WMO weather code.
///
/// Exact table for the documented codes; everything else is "Unbekannt".
pub fn description_de(code: i32) -> &'static str {
    match code {
        0 => "Klarer Himmel",
        1 => "Überwiegend klar",
        2 => "Teilweise bewölkt",
        3 => "Bewölkt",
        45 => "Nebel",
        48 => "Raureif-Nebel",
        51 => "Leichter Nieselregen",
        53 => "Mäßiger Nieselregen",
        55 => "Starker Nieselregen",
        56 => "Leichter gefrierender Nieselregen",
        57 => "Starker gefrierender Nieselregen",
        61 => "Leichter Regen",
        63 => "Mäßiger Regen",
        65 => "Starker Regen",
        66 => "Leichter gefrierender Regen",
        67 => "Starker gefrierender Regen",
        71 => "Leichter Schneefall",
        73 => "Mäßiger Schneefall",
        75 => "Starker Schneefall",
        77 => "Schneekörner",
        80 => "Leichte Regenschauer",
        81 => "Mäßige Regenschauer",
        82 => "Heftige Regenschauer",
        85 => "Leichte Schneeschauer",
        86 => "Starke Schneeschauer",
        95 => "Leichtes Gewitter",
        96 => "Gewitter mit Hagel",
        99 => "Starkes Gewitter mit Hagel",
        _ => "Unbekannt",
    }
}
