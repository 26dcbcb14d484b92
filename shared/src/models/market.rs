//! Market price and price series models

use serde::{Deserialize, Serialize};

/// Direction of a market price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

impl PriceTrend {
    /// Parse the trend string reported by a price feed; anything unknown is stable
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "up" => PriceTrend::Up,
            "down" => PriceTrend::Down,
            _ => PriceTrend::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTrend::Up => "up",
            PriceTrend::Down => "down",
            PriceTrend::Stable => "stable",
        }
    }

    /// Short market commentary for the trend
    pub fn commentary(&self) -> &'static str {
        match self {
            PriceTrend::Down => "Prices are falling after recent harvest.",
            PriceTrend::Up => "Prices are rising as we approach next harvest season.",
            PriceTrend::Stable => "Prices are stable in the mid-season period.",
        }
    }
}

impl std::fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a market quote came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    Live,
    Simulated,
}

/// Current market price of a crop, per quintal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketQuote {
    pub crop: String,
    pub commodity_code: String,
    pub modal_price: i64,
    pub min_price: i64,
    pub max_price: i64,
    pub market_name: String,
    pub last_updated: String,
    pub trend: PriceTrend,
    pub source: QuoteSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// Seeded synthetic price history of a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropPriceSeries {
    pub crop_name: String,
    pub seed: u64,
    pub base_price: i64,
    pub trend_factor: f64,
    pub seasonality_amplitude: f64,
    pub noise_level: f64,
    /// Monthly prices, index 0 is the first month of the window
    pub series: Vec<i64>,
}

/// Labelled monthly price, as exported to charts and CSV
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub month: String,
    pub year: i32,
    pub price: i64,
}

/// One projected month with its display band
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub month: String,
    pub predicted_price: i64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Forward projection of a price series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceForecast {
    pub growth_factor: f64,
    pub points: Vec<ForecastPoint>,
}

impl PriceForecast {
    pub fn prices(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.predicted_price).collect()
    }
}
