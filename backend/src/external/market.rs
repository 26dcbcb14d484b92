//! Market price feed client
//!
//! The feed returns `{"crops": [{name, modal_price, min_price, max_price,
//! last_updated, market_name, trend}]}` for all tracked crops at once.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::{CropProfile, MarketQuote, PriceTrend, QuoteSource};

use crate::error::{AppError, AppResult};

/// Market price feed client
#[derive(Clone)]
pub struct MarketPriceClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub crops: Vec<FeedCrop>,
}

/// One crop entry of the price feed
#[derive(Debug, Clone, Deserialize)]
pub struct FeedCrop {
    pub name: String,
    pub modal_price: FeedNumber,
    pub min_price: FeedNumber,
    pub max_price: FeedNumber,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub market_name: String,
    #[serde(default)]
    pub trend: String,
}

/// Prices arrive either as JSON numbers or as numeric strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeedNumber {
    Number(f64),
    Text(String),
}

impl FeedNumber {
    /// Whole-rupee value, truncated
    fn as_price(&self) -> Option<i64> {
        let value = match self {
            FeedNumber::Number(n) => *n,
            FeedNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value as i64)
    }
}

impl MarketPriceClient {
    /// Create a new MarketPriceClient
    pub fn new(endpoint: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Market HTTP client: {}", e)))?;
        Ok(Self { client, endpoint })
    }

    /// Fetch the live quote for a crop
    pub async fn get_quote(&self, profile: &CropProfile) -> AppResult<MarketQuote> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalService(format!("Market API request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "Market API error: {}",
                response.status()
            )));
        }

        let feed: FeedResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!(
                "Failed to parse market response: {}",
                e.without_url()
            ))
        })?;

        select_quote(&feed.crops, profile)
    }
}

/// Pick the feed entry for a crop: exact name match ignoring case, else the first entry
pub fn select_quote(crops: &[FeedCrop], profile: &CropProfile) -> AppResult<MarketQuote> {
    let entry = crops
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(&profile.name))
        .or_else(|| crops.first())
        .ok_or_else(|| AppError::ExternalService("No data available from market API".into()))?;

    let price = |n: &FeedNumber, field: &str| {
        n.as_price().ok_or_else(|| {
            AppError::ExternalService(format!("Market API returned an invalid {}", field))
        })
    };

    Ok(MarketQuote {
        crop: profile.name.clone(),
        commodity_code: profile.commodity_code(),
        modal_price: price(&entry.modal_price, "modal_price")?,
        min_price: price(&entry.min_price, "min_price")?,
        max_price: price(&entry.max_price, "max_price")?,
        market_name: entry.market_name.clone(),
        last_updated: entry.last_updated.clone(),
        trend: PriceTrend::parse(&entry.trend),
        source: QuoteSource::Live,
        analysis: None,
    })
}
