//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current conditions at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    /// Not every provider reports precipitation
    pub precipitation_mm: Option<Decimal>,
    pub wind_speed_kmh: Decimal,
    pub uv_index: i32,
    pub pressure_mb: i32,
}

/// Types of crop-care advisories raised from current weather
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAdvisoryType {
    HeatStress,
    LowHumidity,
    NoRainfall,
}

/// Crop-care advisory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherAdvisory {
    pub advisory_type: WeatherAdvisoryType,
    pub message: String,
}

/// Weather report with the advisories it triggers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherInsight {
    pub report: WeatherReport,
    pub advisories: Vec<WeatherAdvisory>,
}

/// Temperature above which heat stress is flagged
pub const HEAT_STRESS_CELSIUS: i64 = 35;

/// Humidity below which extra watering is advised
pub const LOW_HUMIDITY_PERCENT: i32 = 30;

/// Advisories for the current conditions
pub fn weather_advisories(report: &WeatherReport) -> Vec<WeatherAdvisory> {
    let mut advisories = Vec::new();

    if report.temperature_celsius > Decimal::from(HEAT_STRESS_CELSIUS) {
        advisories.push(WeatherAdvisory {
            advisory_type: WeatherAdvisoryType::HeatStress,
            message: "High temperature! Consider irrigation to avoid heat stress.".to_string(),
        });
    }
    if report.humidity_percent < LOW_HUMIDITY_PERCENT {
        advisories.push(WeatherAdvisory {
            advisory_type: WeatherAdvisoryType::LowHumidity,
            message: "Low humidity detected! Crops might need additional watering.".to_string(),
        });
    }
    if report.precipitation_mm.map(|p| p.is_zero()).unwrap_or(false) {
        advisories.push(WeatherAdvisory {
            advisory_type: WeatherAdvisoryType::NoRainfall,
            message: "No rainfall detected. Ensure proper irrigation.".to_string(),
        });
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(temp: i64, humidity: i32, precip: Option<i64>) -> WeatherReport {
        WeatherReport {
            location: "New Delhi".to_string(),
            temperature_celsius: Decimal::from(temp),
            humidity_percent: humidity,
            precipitation_mm: precip.map(Decimal::from),
            wind_speed_kmh: Decimal::from(12),
            uv_index: 6,
            pressure_mb: 1008,
        }
    }

    #[test]
    fn test_mild_weather_has_no_advisories() {
        assert!(weather_advisories(&report(28, 60, Some(3))).is_empty());
    }

    #[test]
    fn test_all_advisories() {
        let advisories = weather_advisories(&report(41, 20, Some(0)));
        let types: Vec<_> = advisories.iter().map(|a| a.advisory_type).collect();
        assert_eq!(
            types,
            vec![
                WeatherAdvisoryType::HeatStress,
                WeatherAdvisoryType::LowHumidity,
                WeatherAdvisoryType::NoRainfall
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert!(weather_advisories(&report(35, 30, Some(1))).is_empty());
    }

    #[test]
    fn test_missing_precipitation_is_not_dry() {
        assert!(weather_advisories(&report(25, 50, None)).is_empty());
    }
}
