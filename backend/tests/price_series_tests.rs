//! Tests for the synthetic price series, forward projection and simulated quotes

use chrono::NaiveDate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{
    crop_seed, forecast_for_crop, generate, generate_price_series, label_series,
    project_forward, seasonal_trend, simulate_quote, PriceTrend, DEFAULT_HISTORY_MONTHS,
    FORECAST_MONTHS, SEED_MODULUS,
};

// =============================================================================
// Series Generation
// =============================================================================

mod series {
    use super::*;

    #[test]
    fn default_window_is_three_years() {
        let points = label_series(&generate("Wheat", DEFAULT_HISTORY_MONTHS));
        assert_eq!(points.len(), 36);
        assert_eq!(points.first().unwrap().month, "Jan 2022");
        assert_eq!(points.last().unwrap().month, "Dec 2024");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Same crop name, same series
        #[test]
        fn prop_generation_is_deterministic(name in "[A-Za-z ]{0,20}", months in 0usize..60) {
            prop_assert_eq!(generate(&name, months), generate(&name, months));
        }

        /// Exactly `months` values
        #[test]
        fn prop_length_invariant(name in "[A-Za-z]{1,12}", months in 0usize..120) {
            prop_assert_eq!(generate(&name, months).len(), months);
        }

        /// Seeds stay within the modulus
        #[test]
        fn prop_seed_bounded(name in ".{0,30}") {
            prop_assert!(crop_seed(&name) < SEED_MODULUS);
        }

        /// Drawn parameters stay within their ranges
        #[test]
        fn prop_parameters_in_range(name in "[A-Za-z]{1,12}") {
            let s = generate_price_series(&name, 12);
            prop_assert!((2000..6000).contains(&s.base_price));
            prop_assert!(s.trend_factor >= -0.5 && s.trend_factor < 1.0);
            prop_assert!(s.seasonality_amplitude >= 0.1 && s.seasonality_amplitude < 0.3);
            prop_assert!(s.noise_level >= 0.05 && s.noise_level < 0.15);
        }
    }
}

// =============================================================================
// Forward Projection
// =============================================================================

mod projection {
    use super::*;

    #[test]
    fn crop_forecast_repeats() {
        let history = generate("Onion", DEFAULT_HISTORY_MONTHS);
        let first = forecast_for_crop("Onion", &history);
        let second = forecast_for_crop("Onion", &history);
        assert_eq!(first, second);
        assert_eq!(first.points.len(), FORECAST_MONTHS);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Six points, growth factor in range, band is ±10% of the prediction
        #[test]
        fn prop_projection_shape(
            history in prop::collection::vec(1000i64..10_000, 1..48),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let forecast = project_forward(&history, &mut rng);

            prop_assert_eq!(forecast.points.len(), FORECAST_MONTHS);
            prop_assert!(forecast.growth_factor >= 1.05 && forecast.growth_factor < 1.15);
            for p in &forecast.points {
                let price = p.predicted_price as f64;
                prop_assert!((p.lower_bound - price * 0.9).abs() < 1e-6);
                prop_assert!((p.upper_bound - price * 1.1).abs() < 1e-6);
            }
        }

        /// A flat history grows every month
        #[test]
        fn prop_flat_history_grows(level in 1000i64..10_000, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let forecast = project_forward(&vec![level; 12], &mut rng);
            let prices = forecast.prices();
            prop_assert!(prices[0] >= level);
            for pair in prices.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
            }
        }
    }
}

// =============================================================================
// Simulated Quotes
// =============================================================================

mod simulated_quote {
    use super::*;

    #[test]
    fn trend_follows_harvest_peak() {
        // Wheat peaks in April
        assert_eq!(seasonal_trend(4, 4), PriceTrend::Down);
        assert_eq!(seasonal_trend(4, 3), PriceTrend::Down);
        assert_eq!(seasonal_trend(4, 7), PriceTrend::Stable);
        assert_eq!(seasonal_trend(4, 10), PriceTrend::Up);
    }

    #[test]
    fn staple_prices_stay_in_band() {
        let rice = shared::find_crop("Rice").unwrap();
        for month in 1..=12 {
            let today = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
            let quote = simulate_quote(&rice, today);
            // Staple base in [1800, 2800), seasonal factor in [0.9, 1.1]
            assert!(quote.modal_price >= 1620 && quote.modal_price <= 3080);
            assert!(quote.min_price <= quote.modal_price);
            assert!(quote.max_price >= quote.modal_price);
        }
    }

    #[test]
    fn unknown_peak_defaults_to_mid_year() {
        let mango = shared::find_crop("Mango").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        assert_eq!(simulate_quote(&mango, today).trend, PriceTrend::Down);
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(simulate_quote(&mango, today).trend, PriceTrend::Up);
    }
}
