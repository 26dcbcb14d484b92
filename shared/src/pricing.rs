//! Synthetic crop price series
//!
//! Every random draw is made from a single stream seeded by the crop name, so
//! a crop always gets the same history, on every machine. Draw order is part
//! of the contract: base price, trend factor, seasonality amplitude, noise
//! level, then one noise value per month.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use sha2::{Digest, Sha256};

use crate::models::{
    CropPriceSeries, CropProfile, ForecastPoint, MarketQuote, PricePoint, PriceForecast,
    PriceTrend, QuoteSource,
};
use crate::types::{month_range, YearMonth};

/// Length of the default price history, in months
pub const DEFAULT_HISTORY_MONTHS: usize = 36;

/// Crop seeds are reduced into `0..SEED_MODULUS`
pub const SEED_MODULUS: u64 = 10_000;

/// Months produced by a forward projection
pub const FORECAST_MONTHS: usize = 6;

/// Added to the crop seed for the forecast stream, keeping it apart from the history stream
pub const FORECAST_SEED_OFFSET: u64 = SEED_MODULUS;

/// Number of trailing months used to extract the seasonal pattern
const SEASONAL_WINDOW: usize = 12;

/// Relative width of the forecast display band
const FORECAST_BAND: f64 = 0.1;

/// Market name reported on simulated quotes
pub const SIMULATED_MARKET_NAME: &str = "Simulated seasonal model";

/// Stable seed for a crop name, in `0..SEED_MODULUS`
pub fn crop_seed(crop_name: &str) -> u64 {
    let digest = Sha256::digest(crop_name.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head) % SEED_MODULUS
}

/// Generate `months` monthly prices for a crop, with the parameters drawn for it
pub fn generate_price_series(crop_name: &str, months: usize) -> CropPriceSeries {
    let seed = crop_seed(crop_name);
    let mut rng = StdRng::seed_from_u64(seed);

    let base_price: i64 = rng.gen_range(2000..6000);
    let trend_factor: f64 = rng.gen_range(-0.5..1.0);
    let seasonality_amplitude: f64 = rng.gen_range(0.1..0.3);
    let noise_level: f64 = rng.gen_range(0.05..0.15);

    let base = base_price as f64;
    let sigma = noise_level * base;
    let span = months as f64;

    let series = (0..months)
        .map(|t| {
            let t = t as f64;
            let trend = base * (1.0 + trend_factor * t / span);
            let season = seasonality_amplitude * base * (2.0 * PI * t / 12.0).sin();
            let z: f64 = rng.sample(StandardNormal);
            // Truncation toward zero; no clamping of extreme draws
            (trend + season + z * sigma) as i64
        })
        .collect();

    CropPriceSeries {
        crop_name: crop_name.to_string(),
        seed,
        base_price,
        trend_factor,
        seasonality_amplitude,
        noise_level,
        series,
    }
}

/// Monthly prices only
pub fn generate(crop_name: &str, months: usize) -> Vec<i64> {
    generate_price_series(crop_name, months).series
}

/// Label a series with calendar months starting at the history window
pub fn label_series(series: &[i64]) -> Vec<PricePoint> {
    month_range(YearMonth::HISTORY_START, series.len())
        .into_iter()
        .zip(series)
        .map(|(ym, &price)| PricePoint {
            month: ym.label(),
            year: ym.year,
            price,
        })
        .collect()
}

/// Project the next months of a series from its last year of seasonality.
///
/// The seasonal pattern is the trailing window minus its mean; each step
/// multiplies the previous (unrounded) price by one growth factor drawn from
/// `[1.05, 1.15)` and adds the matching seasonal offset.
pub fn project_forward<R: Rng + ?Sized>(history: &[i64], rng: &mut R) -> PriceForecast {
    let growth_factor = 1.0 + rng.gen_range(0.05..0.15);

    let Some(&last) = history.last() else {
        return PriceForecast {
            growth_factor,
            points: Vec::new(),
        };
    };

    let window = &history[history.len().saturating_sub(SEASONAL_WINDOW)..];
    let mean = window.iter().map(|&p| p as f64).sum::<f64>() / window.len() as f64;
    let seasonal: Vec<f64> = window.iter().map(|&p| p as f64 - mean).collect();

    let start = YearMonth::HISTORY_START.plus_months(history.len());
    let mut last_price = last as f64;

    let points = month_range(start, FORECAST_MONTHS)
        .into_iter()
        .enumerate()
        .map(|(i, ym)| {
            let next_price = last_price * growth_factor + seasonal[i % seasonal.len()];
            last_price = next_price;
            let predicted_price = next_price as i64;
            ForecastPoint {
                month: ym.label(),
                predicted_price,
                lower_bound: predicted_price as f64 * (1.0 - FORECAST_BAND),
                upper_bound: predicted_price as f64 * (1.0 + FORECAST_BAND),
            }
        })
        .collect();

    PriceForecast {
        growth_factor,
        points,
    }
}

/// Forecast seeded from the crop name, so it repeats like the history does
pub fn forecast_for_crop(crop_name: &str, history: &[i64]) -> PriceForecast {
    let mut rng = StdRng::seed_from_u64(crop_seed(crop_name) + FORECAST_SEED_OFFSET);
    project_forward(history, &mut rng)
}

/// Months between two calendar months, going whichever way round the year is shorter
pub fn months_from_peak(peak_month: u32, current_month: u32) -> u32 {
    let current = current_month as i32;
    let peak = peak_month as i32;
    let forward = (current - peak).rem_euclid(12);
    let backward = (peak - current).rem_euclid(12);
    forward.min(backward) as u32
}

/// Seasonal price direction: prices fall right after the harvest peak and rise ahead of the next one
pub fn seasonal_trend(peak_month: u32, current_month: u32) -> PriceTrend {
    match months_from_peak(peak_month, current_month) {
        0..=1 => PriceTrend::Down,
        5.. => PriceTrend::Up,
        _ => PriceTrend::Stable,
    }
}

/// Quote used when no live market price is available
pub fn simulate_quote(profile: &CropProfile, today: NaiveDate) -> MarketQuote {
    let mut rng = StdRng::seed_from_u64(crop_seed(&profile.name));
    let base_price = rng.gen_range(profile.price_category.base_price_range()) as f64;

    let current_month = today.month();
    let seasonal_factor = 1.0 + 0.1 * (2.0 * PI * (current_month as f64 / 12.0)).sin();
    let modal_price = (base_price * seasonal_factor) as i64;
    let trend = seasonal_trend(profile.peak_month(), current_month);

    MarketQuote {
        crop: profile.name.clone(),
        commodity_code: profile.commodity_code(),
        modal_price,
        min_price: (modal_price as f64 * 0.9) as i64,
        max_price: (modal_price as f64 * 1.1) as i64,
        market_name: SIMULATED_MARKET_NAME.to_string(),
        last_updated: today.to_string(),
        trend,
        source: QuoteSource::Simulated,
        analysis: Some(format!(
            "Prices for {} are currently {}. {}",
            profile.name,
            trend,
            trend.commentary()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_crop;

    #[test]
    fn test_seed_is_stable_and_bounded() {
        assert_eq!(crop_seed("Wheat"), crop_seed("Wheat"));
        assert!(crop_seed("Wheat") < SEED_MODULUS);
        assert!(crop_seed("") < SEED_MODULUS);
    }

    #[test]
    fn test_parameters_within_ranges() {
        for crop in ["Wheat", "Rice", "Coffee", "Mango", ""] {
            let s = generate_price_series(crop, DEFAULT_HISTORY_MONTHS);
            assert!((2000..6000).contains(&s.base_price));
            assert!((-0.5..1.0).contains(&s.trend_factor));
            assert!((0.1..0.3).contains(&s.seasonality_amplitude));
            assert!((0.05..0.15).contains(&s.noise_level));
            assert_eq!(s.series.len(), DEFAULT_HISTORY_MONTHS);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate("Maize", 36), generate("Maize", 36));
    }

    #[test]
    fn test_zero_months() {
        assert!(generate("Wheat", 0).is_empty());
    }

    #[test]
    fn test_shorter_series_shares_parameters() {
        let long = generate_price_series("Onion", 36);
        let short = generate_price_series("Onion", 12);
        assert_eq!(long.base_price, short.base_price);
        assert_eq!(long.trend_factor, short.trend_factor);
    }

    #[test]
    fn test_label_series() {
        let points = label_series(&generate("Rice", 36));
        assert_eq!(points.len(), 36);
        assert_eq!(points[0].month, "Jan 2022");
        assert_eq!(points[35].month, "Dec 2024");
        assert_eq!(points[12].year, 2023);
    }

    #[test]
    fn test_projection_follows_recurrence() {
        // Flat history: seasonal offsets are all zero
        let history = vec![1000_i64; 12];
        let mut rng = StdRng::seed_from_u64(7);
        let forecast = project_forward(&history, &mut rng);

        assert!((1.05..1.15).contains(&forecast.growth_factor));
        assert_eq!(forecast.points.len(), FORECAST_MONTHS);

        let mut expected = 1000.0;
        for point in &forecast.points {
            expected *= forecast.growth_factor;
            assert_eq!(point.predicted_price, expected as i64);
            assert!((point.upper_bound - point.predicted_price as f64 * 1.1).abs() < 1e-9);
            assert!((point.lower_bound - point.predicted_price as f64 * 0.9).abs() < 1e-9);
        }
    }

    #[test]
    fn test_projection_adds_seasonal_offsets() {
        let mut history = vec![100_i64; 12];
        history[0] = 220; // mean 110, first offset +110, others -10
        let mut rng = StdRng::seed_from_u64(1);
        let forecast = project_forward(&history, &mut rng);
        let g = forecast.growth_factor;

        let first = 100.0 * g + 110.0;
        let second = first * g - 10.0;
        assert_eq!(forecast.points[0].predicted_price, first as i64);
        assert_eq!(forecast.points[1].predicted_price, second as i64);
    }

    #[test]
    fn test_projection_labels_continue_history() {
        let history = generate("Wheat", 36);
        let forecast = forecast_for_crop("Wheat", &history);
        assert_eq!(forecast.points[0].month, "Jan 2025");
        assert_eq!(forecast.points[5].month, "Jun 2025");
    }

    #[test]
    fn test_projection_of_empty_history() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(project_forward(&[], &mut rng).points.is_empty());
    }

    #[test]
    fn test_projection_short_history_wraps_pattern() {
        let mut rng = StdRng::seed_from_u64(3);
        let forecast = project_forward(&[100, 200], &mut rng);
        assert_eq!(forecast.points.len(), FORECAST_MONTHS);
    }

    #[test]
    fn test_crop_forecast_is_reproducible() {
        let history = generate("Turmeric", 36);
        assert_eq!(
            forecast_for_crop("Turmeric", &history),
            forecast_for_crop("Turmeric", &history)
        );
    }

    #[test]
    fn test_months_from_peak_wraps() {
        assert_eq!(months_from_peak(11, 1), 2);
        assert_eq!(months_from_peak(1, 12), 1);
        assert_eq!(months_from_peak(4, 10), 6);
        assert_eq!(months_from_peak(6, 6), 0);
    }

    #[test]
    fn test_seasonal_trend_table() {
        assert_eq!(seasonal_trend(4, 4), PriceTrend::Down);
        assert_eq!(seasonal_trend(4, 5), PriceTrend::Down);
        assert_eq!(seasonal_trend(4, 6), PriceTrend::Stable);
        assert_eq!(seasonal_trend(4, 8), PriceTrend::Stable);
        assert_eq!(seasonal_trend(4, 9), PriceTrend::Up);
        assert_eq!(seasonal_trend(4, 10), PriceTrend::Up);
        assert_eq!(seasonal_trend(11, 2), PriceTrend::Stable);
    }

    #[test]
    fn test_simulated_quote() {
        let coffee = find_crop("Coffee").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let quote = simulate_quote(&coffee, today);

        assert_eq!(quote.source, QuoteSource::Simulated);
        assert_eq!(quote.commodity_code, "COFFEE");
        assert_eq!(quote.trend, PriceTrend::Down);
        assert_eq!(quote.last_updated, "2024-01-15");
        // January factor: 1 + 0.1 * sin(pi / 6) = 1.05
        assert!(quote.modal_price >= (6000.0 * 1.05) as i64 - 1);
        assert!(quote.modal_price < (12000.0 * 1.05) as i64);
        assert!(quote.min_price <= quote.modal_price && quote.modal_price <= quote.max_price);
        assert_eq!(quote, simulate_quote(&coffee, today));
        assert!(quote.analysis.unwrap().contains("falling"));
    }
}
