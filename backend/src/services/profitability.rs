//! Profitability estimates

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    compute_profitability, validate_profitability_input, CostBreakdown, CropProfile, MarketQuote,
    ProcessingLevel, ProfitabilityInput, ProfitabilityReport, StorageStrategy,
};

use crate::error::{AppError, AppResult};

/// Land area preset for a new estimate, in acres
pub const DEFAULT_LAND_AREA_ACRES: i64 = 5;

/// Profitability service
#[derive(Clone, Default)]
pub struct ProfitabilityService;

/// Starting point of an estimate for a crop
#[derive(Debug, Clone, Serialize)]
pub struct ProfitabilityDefaults {
    pub crop: String,
    pub quote: MarketQuote,
    pub input: ProfitabilityInput,
}

impl ProfitabilityService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the scenario and run the calculator
    pub fn estimate(&self, input: &ProfitabilityInput) -> AppResult<ProfitabilityReport> {
        validate_profitability_input(input).map_err(|(field, message)| AppError::invalid(field, message))?;

        let report = compute_profitability(input);
        tracing::debug!(
            profit = %report.strategic.profit,
            roi = %report.strategic.roi_pct,
            "Computed profitability"
        );
        Ok(report)
    }

    /// Default scenario: current quote, low end of the expected yield, standard costs
    pub fn defaults_for(&self, profile: &CropProfile, quote: MarketQuote) -> ProfitabilityDefaults {
        let expected_yield = profile
            .min_expected_yield()
            .and_then(|y| Decimal::try_from(y).ok())
            .unwrap_or_default();

        let input = ProfitabilityInput {
            market_price: Decimal::from(quote.modal_price),
            expected_yield_per_hectare: expected_yield,
            land_area_acres: Decimal::from(DEFAULT_LAND_AREA_ACRES),
            quality_premium_pct: Decimal::ZERO,
            organic_premium_pct: Decimal::ZERO,
            costs: CostBreakdown::default(),
            storage_strategy: StorageStrategy::default(),
            processing_level: ProcessingLevel::default(),
        };

        ProfitabilityDefaults {
            crop: profile.name.clone(),
            quote,
            input,
        }
    }
}
