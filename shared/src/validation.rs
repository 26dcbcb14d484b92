//! Validation utilities for advisory requests
//!
//! The calculators accept any input; these checks run at the request boundary.

use rust_decimal::Decimal;

use crate::models::{CostBreakdown, ProfitabilityInput, SoilProfile};

// ============================================================================
// Profitability Validations
// ============================================================================

/// Largest land area a single estimate covers, in acres
pub const MAX_LAND_AREA_ACRES: u32 = 250;

/// Highest market price per quintal accepted
pub const MAX_MARKET_PRICE: u32 = 100_000;

/// Highest expected yield accepted, in tons per hectare
pub const MAX_EXPECTED_YIELD: u32 = 200;

/// Per-acre ceiling for seed, fertilizer, labor and other costs
pub const MAX_COST_PER_ACRE: u32 = 25_000;

/// Per-acre ceiling for transport costs
pub const MAX_TRANSPORT_COST_PER_ACRE: u32 = 10_000;

/// Validate land area (above 0, at most 250 acres)
pub fn validate_land_area(acres: Decimal) -> Result<(), &'static str> {
    if acres <= Decimal::ZERO {
        return Err("Land area must be greater than zero");
    }
    if acres > Decimal::from(MAX_LAND_AREA_ACRES) {
        return Err("Land area must be at most 250 acres");
    }
    Ok(())
}

/// Validate market price (above 0, at most 100000 per quintal)
pub fn validate_market_price(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Market price must be greater than zero");
    }
    if price > Decimal::from(MAX_MARKET_PRICE) {
        return Err("Market price must be at most 100000 per quintal");
    }
    Ok(())
}

/// Validate expected yield (0 to 200 tons per hectare)
pub fn validate_expected_yield(yield_per_hectare: Decimal) -> Result<(), &'static str> {
    if yield_per_hectare < Decimal::ZERO {
        return Err("Expected yield cannot be negative");
    }
    if yield_per_hectare > Decimal::from(MAX_EXPECTED_YIELD) {
        return Err("Expected yield must be at most 200 tons per hectare");
    }
    Ok(())
}

/// Validate per-acre cultivation costs
pub fn validate_costs(costs: &CostBreakdown) -> Result<(), &'static str> {
    let all = [
        costs.seed,
        costs.fertilizer,
        costs.labor,
        costs.transport,
        costs.other,
    ];
    if all.iter().any(|c| *c < Decimal::ZERO) {
        return Err("Costs cannot be negative");
    }

    let capped = [costs.seed, costs.fertilizer, costs.labor, costs.other];
    if capped.iter().any(|c| *c > Decimal::from(MAX_COST_PER_ACRE)) {
        return Err("Seed, fertilizer, labor and other costs must be at most 25000 per acre");
    }
    if costs.transport > Decimal::from(MAX_TRANSPORT_COST_PER_ACRE) {
        return Err("Transport cost must be at most 10000 per acre");
    }
    Ok(())
}

/// Validate quality premium (-10% to 30%)
pub fn validate_quality_premium(pct: Decimal) -> Result<(), &'static str> {
    if pct < Decimal::from(-10) || pct > Decimal::from(30) {
        return Err("Quality premium must be between -10 and 30%");
    }
    Ok(())
}

/// Validate organic premium (0% to 50%)
pub fn validate_organic_premium(pct: Decimal) -> Result<(), &'static str> {
    if pct < Decimal::ZERO || pct > Decimal::from(50) {
        return Err("Organic premium must be between 0 and 50%");
    }
    Ok(())
}

/// Validate a whole profitability request, returning the offending field on failure
pub fn validate_profitability_input(
    input: &ProfitabilityInput,
) -> Result<(), (&'static str, &'static str)> {
    validate_market_price(input.market_price).map_err(|e| ("market_price", e))?;
    validate_expected_yield(input.expected_yield_per_hectare)
        .map_err(|e| ("expected_yield_per_hectare", e))?;
    validate_land_area(input.land_area_acres).map_err(|e| ("land_area_acres", e))?;
    validate_quality_premium(input.quality_premium_pct).map_err(|e| ("quality_premium_pct", e))?;
    validate_organic_premium(input.organic_premium_pct).map_err(|e| ("organic_premium_pct", e))?;
    validate_costs(&input.costs).map_err(|e| ("costs", e))?;
    Ok(())
}

// ============================================================================
// Market Validations
// ============================================================================

/// Highest final price per quintal a channel quote is computed for
pub const MAX_FINAL_PRICE: u32 = 1_000_000;

/// Validate a strategic final price before pricing marketing channels
pub fn validate_final_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO || price > Decimal::from(MAX_FINAL_PRICE) {
        return Err("Final price must be between 0 and 1000000 per quintal");
    }
    Ok(())
}

/// Longest price history that can be requested
pub const MAX_HISTORY_MONTHS: usize = 120;

/// Validate requested history length (1 to 120 months)
pub fn validate_history_months(months: usize) -> Result<(), &'static str> {
    if months == 0 || months > MAX_HISTORY_MONTHS {
        return Err("Months must be between 1 and 120");
    }
    Ok(())
}

// ============================================================================
// Recommendation Validations
// ============================================================================

fn within(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// Validate soil readings against the ranges the classifier was trained on
pub fn validate_soil_profile(profile: &SoilProfile) -> Result<(), (&'static str, &'static str)> {
    let checks: [(&str, f64, f64, f64, &str); 9] = [
        ("nitrogen", profile.nitrogen, 0.0, 150.0, "Nitrogen must be between 0 and 150"),
        ("phosphorus", profile.phosphorus, 0.0, 150.0, "Phosphorus must be between 0 and 150"),
        ("potassium", profile.potassium, 0.0, 150.0, "Potassium must be between 0 and 150"),
        (
            "temperature_celsius",
            profile.temperature_celsius,
            0.0,
            50.0,
            "Temperature must be between 0 and 50°C",
        ),
        (
            "humidity_percent",
            profile.humidity_percent,
            0.0,
            100.0,
            "Humidity must be between 0 and 100%",
        ),
        ("ph", profile.ph, 0.0, 14.0, "Soil pH must be between 0 and 14"),
        ("rainfall_mm", profile.rainfall_mm, 0.0, 500.0, "Rainfall must be between 0 and 500 mm"),
        (
            "soil_moisture_percent",
            profile.soil_moisture_percent,
            0.0,
            100.0,
            "Soil moisture must be between 0 and 100%",
        ),
        (
            "sunlight_hours",
            profile.sunlight_hours,
            0.0,
            12.0,
            "Sunlight must be between 0 and 12 hours",
        ),
    ];

    for (field, value, min, max, message) in checks {
        if !within(value, min, max) {
            return Err((field, message));
        }
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Longest prompt forwarded to the chat provider
pub const MAX_PROMPT_CHARS: usize = 4000;

/// Validate a chat prompt
pub fn validate_prompt(prompt: &str) -> Result<(), &'static str> {
    if prompt.trim().is_empty() {
        return Err("Prompt cannot be empty");
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err("Prompt must be at most 4000 characters");
    }
    Ok(())
}

/// Validate a weather location query
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location cannot be empty");
    }
    if trimmed.len() > 100 {
        return Err("Location must be at most 100 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn wheat_input() -> ProfitabilityInput {
        ProfitabilityInput {
            market_price: dec("2500"),
            expected_yield_per_hectare: dec("3"),
            land_area_acres: dec("5"),
            quality_premium_pct: Decimal::ZERO,
            organic_premium_pct: Decimal::ZERO,
            costs: CostBreakdown::default(),
            storage_strategy: Default::default(),
            processing_level: Default::default(),
        }
    }

    #[test]
    fn test_land_area() {
        assert!(validate_land_area(dec("0.5")).is_ok());
        assert!(validate_land_area(Decimal::ZERO).is_err());
        assert!(validate_land_area(dec("-1")).is_err());
    }

    #[test]
    fn test_market_price() {
        assert!(validate_market_price(dec("2500")).is_ok());
        assert!(validate_market_price(dec("100000")).is_ok());
        assert!(validate_market_price(Decimal::ZERO).is_err());
        assert!(validate_market_price(dec("100000.01")).is_err());
    }

    #[test]
    fn test_upper_bounds() {
        assert!(validate_land_area(dec("250")).is_ok());
        assert!(validate_land_area(dec("250.5")).is_err());
        assert!(validate_expected_yield(dec("200")).is_ok());
        assert!(validate_expected_yield(dec("200.1")).is_err());
    }

    #[test]
    fn test_huge_request_is_rejected() {
        let input = ProfitabilityInput {
            market_price: dec("10000000000000000000000000"),
            expected_yield_per_hectare: dec("30"),
            land_area_acres: dec("1000"),
            ..wheat_input()
        };
        let (field, _) = validate_profitability_input(&input).unwrap_err();
        assert_eq!(field, "market_price");

        let input = ProfitabilityInput {
            land_area_acres: dec("1000"),
            ..wheat_input()
        };
        let (field, _) = validate_profitability_input(&input).unwrap_err();
        assert_eq!(field, "land_area_acres");
    }

    #[test]
    fn test_premium_bounds_are_inclusive() {
        assert!(validate_quality_premium(dec("-10")).is_ok());
        assert!(validate_quality_premium(dec("30")).is_ok());
        assert!(validate_quality_premium(dec("30.1")).is_err());
        assert!(validate_organic_premium(dec("50")).is_ok());
        assert!(validate_organic_premium(dec("-0.1")).is_err());
    }

    #[test]
    fn test_costs() {
        assert!(validate_costs(&CostBreakdown::default()).is_ok());
        let costs = CostBreakdown {
            labor: dec("-1"),
            ..CostBreakdown::default()
        };
        assert!(validate_costs(&costs).is_err());

        let costs = CostBreakdown {
            seed: dec("25000"),
            transport: dec("10000"),
            ..CostBreakdown::default()
        };
        assert!(validate_costs(&costs).is_ok());

        let costs = CostBreakdown {
            other: dec("25001"),
            ..CostBreakdown::default()
        };
        assert!(validate_costs(&costs).is_err());

        let costs = CostBreakdown {
            transport: dec("10001"),
            ..CostBreakdown::default()
        };
        assert!(validate_costs(&costs).is_err());
    }

    #[test]
    fn test_profitability_input_reports_field() {
        assert!(validate_profitability_input(&wheat_input()).is_ok());

        let input = ProfitabilityInput {
            land_area_acres: Decimal::ZERO,
            ..wheat_input()
        };
        let (field, _) = validate_profitability_input(&input).unwrap_err();
        assert_eq!(field, "land_area_acres");
    }

    #[test]
    fn test_history_months() {
        assert!(validate_history_months(1).is_ok());
        assert!(validate_history_months(120).is_ok());
        assert!(validate_history_months(0).is_err());
        assert!(validate_history_months(121).is_err());
    }

    #[test]
    fn test_final_price() {
        assert!(validate_final_price(Decimal::ZERO).is_ok());
        assert!(validate_final_price(dec("289575")).is_ok());
        assert!(validate_final_price(dec("-1")).is_err());
        assert!(validate_final_price(dec("70000000000000000000000000000")).is_err());
    }

    #[test]
    fn test_soil_profile() {
        assert!(validate_soil_profile(&SoilProfile::default()).is_ok());

        let profile = SoilProfile {
            ph: 14.5,
            ..SoilProfile::default()
        };
        assert_eq!(validate_soil_profile(&profile).unwrap_err().0, "ph");

        let profile = SoilProfile {
            rainfall_mm: f64::NAN,
            ..SoilProfile::default()
        };
        assert_eq!(validate_soil_profile(&profile).unwrap_err().0, "rainfall_mm");
    }

    #[test]
    fn test_prompt() {
        assert!(validate_prompt("How do I control aphids?").is_ok());
        assert!(validate_prompt("   ").is_err());
        assert!(validate_prompt(&"a".repeat(MAX_PROMPT_CHARS + 1)).is_err());
    }

    #[test]
    fn test_location() {
        assert!(validate_location("New Delhi").is_ok());
        assert!(validate_location("").is_err());
    }
}
