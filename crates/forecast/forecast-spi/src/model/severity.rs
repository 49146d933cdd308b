//! AQI severity banding.

use serde::{Deserialize, Serialize};

/// The six fixed AQI severity bands.
///
/// Thresholds are 0, 51, 101, 151, 201 and 251; anything at 251 or
/// above (including off-scale readings) lands in the top band, and
/// negative readings clamp to the bottom one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Severity {
    /// Band for a (possibly off-scale) AQI reading.
    pub fn from_aqi(aqi: i64) -> Self {
        match aqi {
            i64::MIN..=50 => Severity::Good,
            51..=100 => Severity::Moderate,
            101..=150 => Severity::UnhealthySensitive,
            151..=200 => Severity::Unhealthy,
            201..=250 => Severity::VeryUnhealthy,
            _ => Severity::Hazardous,
        }
    }

    /// Zero-based band index, bottom to top.
    pub fn index(&self) -> usize {
        match self {
            Severity::Good => 0,
            Severity::Moderate => 1,
            Severity::UnhealthySensitive => 2,
            Severity::Unhealthy => 3,
            Severity::VeryUnhealthy => 4,
            Severity::Hazardous => 5,
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Moderate => "Moderate",
            Severity::UnhealthySensitive => "Unhealthy(S)",
            Severity::Unhealthy => "Unhealthy",
            Severity::VeryUnhealthy => "Very Unhealthy",
            Severity::Hazardous => "Hazardous",
        }
    }

    /// Conventional AQI display colour as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Good => "#00e400",
            Severity::Moderate => "#ffff00",
            Severity::UnhealthySensitive => "#ff7e00",
            Severity::Unhealthy => "#ff0000",
            Severity::VeryUnhealthy => "#8f3f97",
            Severity::Hazardous => "#7e0023",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
