//! Market price service
//!
//! Live quotes come from the price feed when one is configured. Any failure
//! along that path falls back to the seasonal simulation, so a quote is always
//! available for catalog crops.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{
    forecast_for_crop, generate_price_series, label_series, simulate_quote, CropPriceSeries,
    CropProfile, MarketQuote, PriceForecast, PricePoint, DEFAULT_HISTORY_MONTHS,
};

use crate::error::{AppError, AppResult};
use crate::external::MarketPriceClient;

/// Market price service
#[derive(Clone)]
pub struct MarketService {
    client: Option<MarketPriceClient>,
}

/// Generated price history with its month labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    #[serde(flatten)]
    pub series: CropPriceSeries,
    pub points: Vec<PricePoint>,
}

/// Forecast together with the history it was projected from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceOutlook {
    pub crop: String,
    pub history: Vec<PricePoint>,
    pub forecast: PriceForecast,
}

/// Row of a CSV price export
#[derive(Debug, Serialize)]
struct PriceRow<'a> {
    crop: &'a str,
    month: &'a str,
    year: i32,
    price: i64,
}

impl MarketService {
    /// Create a new MarketService instance
    pub fn new(client: Option<MarketPriceClient>) -> Self {
        Self { client }
    }

    /// Current quote for a catalog crop, live when possible
    pub async fn current_quote(&self, profile: &CropProfile) -> MarketQuote {
        let today = Local::now().date_naive();

        let live = match &self.client {
            Some(client) => client.get_quote(profile).await,
            None => Err(AppError::Configuration(
                "No market price feed configured".to_string(),
            )),
        };

        quote_or_simulate(live, profile, today)
    }

    /// Seeded price history for a crop
    pub fn history(&self, crop_name: &str, months: usize) -> PriceHistory {
        let series = generate_price_series(crop_name, months);
        let points = label_series(&series.series);
        tracing::debug!(crop = crop_name, months, seed = series.seed, "Generated price history");
        PriceHistory { series, points }
    }

    /// Six-month projection from the default three-year history
    pub fn outlook(&self, crop_name: &str) -> PriceOutlook {
        let series = generate_price_series(crop_name, DEFAULT_HISTORY_MONTHS);
        let forecast = forecast_for_crop(crop_name, &series.series);
        PriceOutlook {
            crop: crop_name.to_string(),
            history: label_series(&series.series),
            forecast,
        }
    }

    /// Export a price history as CSV
    pub fn export_to_csv(history: &PriceHistory) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for point in &history.points {
            let row = PriceRow {
                crop: &history.series.crop_name,
                month: &point.month,
                year: point.year,
                price: point.price,
            };
            wtr.serialize(row)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

/// Use the live quote, or simulate one when it failed
pub fn quote_or_simulate(
    live: AppResult<MarketQuote>,
    profile: &CropProfile,
    today: NaiveDate,
) -> MarketQuote {
    match live {
        Ok(quote) => quote,
        Err(e) => {
            tracing::info!(crop = %profile.name, reason = %e, "Using simulated market price");
            simulate_quote(profile, today)
        }
    }
}
