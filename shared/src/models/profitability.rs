//! Profitability and post-harvest strategy models
//!
//! All money values are in currency units; prices are per quintal and costs
//! per acre unless the field name says otherwise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 1 hectare = 2.47 acres
pub fn acres_per_hectare() -> Decimal {
    Decimal::new(247, 2)
}

/// 1 ton = 10 quintals
pub fn quintals_per_ton() -> Decimal {
    Decimal::TEN
}

/// Multiplier for a percentage premium: `1 + pct / 100`
pub fn percent_factor(pct: Decimal) -> Decimal {
    Decimal::ONE + pct / Decimal::ONE_HUNDRED
}

/// `numerator / denominator * 100`, or zero when the denominator is not positive
pub fn guarded_percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// How long the harvest is held before sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageStrategy {
    #[default]
    #[serde(alias = "Sell Immediately")]
    Immediate,
    /// 1-3 months
    #[serde(alias = "Short-term Storage (1-3 months)")]
    ShortTerm,
    /// 3-6 months
    #[serde(alias = "Long-term Storage (3-6 months)")]
    LongTerm,
}

impl StorageStrategy {
    pub fn all() -> [StorageStrategy; 3] {
        [
            StorageStrategy::Immediate,
            StorageStrategy::ShortTerm,
            StorageStrategy::LongTerm,
        ]
    }

    /// Storage cost per acre
    pub fn cost_per_acre(&self) -> Decimal {
        match self {
            StorageStrategy::Immediate => Decimal::ZERO,
            StorageStrategy::ShortTerm => Decimal::from(200),
            StorageStrategy::LongTerm => Decimal::from(500),
        }
    }

    /// Sale price increase, in percent
    pub fn price_benefit_pct(&self) -> Decimal {
        match self {
            StorageStrategy::Immediate => Decimal::ZERO,
            StorageStrategy::ShortTerm => Decimal::from(5),
            StorageStrategy::LongTerm => Decimal::from(12),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageStrategy::Immediate => "Sell Immediately",
            StorageStrategy::ShortTerm => "Short-term Storage (1-3 months)",
            StorageStrategy::LongTerm => "Long-term Storage (3-6 months)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StorageStrategy::Immediate => "No storage costs, but missing potential higher prices",
            StorageStrategy::ShortTerm => "Medium storage costs, potential for better prices",
            StorageStrategy::LongTerm => "Higher storage costs, but best chance for peak prices",
        }
    }
}

/// Value added to the harvest before sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingLevel {
    #[default]
    #[serde(alias = "No Processing")]
    None,
    /// Sorting, cleaning, packaging
    #[serde(alias = "Basic Processing")]
    Basic,
    /// Value-added processing for premium markets
    #[serde(alias = "Advanced Processing")]
    Advanced,
}

impl ProcessingLevel {
    pub fn all() -> [ProcessingLevel; 3] {
        [
            ProcessingLevel::None,
            ProcessingLevel::Basic,
            ProcessingLevel::Advanced,
        ]
    }

    /// Processing cost per acre
    pub fn cost_per_acre(&self) -> Decimal {
        match self {
            ProcessingLevel::None => Decimal::ZERO,
            ProcessingLevel::Basic => Decimal::from(1500),
            ProcessingLevel::Advanced => Decimal::from(4000),
        }
    }

    /// Sale price increase, in percent
    pub fn price_benefit_pct(&self) -> Decimal {
        match self {
            ProcessingLevel::None => Decimal::ZERO,
            ProcessingLevel::Basic => Decimal::from(15),
            ProcessingLevel::Advanced => Decimal::from(35),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessingLevel::None => "No Processing",
            ProcessingLevel::Basic => "Basic Processing",
            ProcessingLevel::Advanced => "Advanced Processing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProcessingLevel::None => "No additional costs, base market prices",
            ProcessingLevel::Basic => "Sorting, cleaning, packaging for better prices",
            ProcessingLevel::Advanced => "Value-added processing for premium markets",
        }
    }
}

/// Cultivation costs per acre
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub seed: Decimal,
    pub fertilizer: Decimal,
    pub labor: Decimal,
    pub transport: Decimal,
    #[serde(default)]
    pub other: Decimal,
}

impl CostBreakdown {
    pub fn total(&self) -> Decimal {
        self.seed + self.fertilizer + self.labor + self.transport + self.other
    }
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self {
            seed: Decimal::from(2500),
            fertilizer: Decimal::from(3500),
            labor: Decimal::from(5000),
            transport: Decimal::from(1500),
            other: Decimal::from(2000),
        }
    }
}

/// Inputs of a profitability estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitabilityInput {
    /// Market price per quintal
    pub market_price: Decimal,
    /// Expected yield in tons per hectare
    pub expected_yield_per_hectare: Decimal,
    pub land_area_acres: Decimal,
    #[serde(default)]
    pub quality_premium_pct: Decimal,
    #[serde(default)]
    pub organic_premium_pct: Decimal,
    #[serde(default)]
    pub costs: CostBreakdown,
    #[serde(default)]
    pub storage_strategy: StorageStrategy,
    #[serde(default)]
    pub processing_level: ProcessingLevel,
}

/// Revenue, cost and returns of one scenario over the whole land area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioSummary {
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
    pub margin_pct: Decimal,
    pub roi_pct: Decimal,
    /// Profit strictly above zero; a break-even scenario reports a loss
    pub is_profitable: bool,
}

impl ScenarioSummary {
    /// Derive profit, margin and ROI from revenue and cost
    pub fn from_totals(revenue: Decimal, cost: Decimal) -> Self {
        let profit = revenue - cost;
        Self {
            revenue,
            cost,
            profit,
            margin_pct: guarded_percentage(profit, revenue),
            roi_pct: guarded_percentage(profit, cost),
            is_profitable: profit > Decimal::ZERO,
        }
    }
}

/// Chosen post-harvest strategy with its costs and explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyBreakdown {
    pub storage_strategy: StorageStrategy,
    pub storage_label: String,
    pub storage_description: String,
    pub storage_cost: Decimal,
    pub processing_level: ProcessingLevel,
    pub processing_label: String,
    pub processing_description: String,
    pub processing_cost: Decimal,
    pub total_post_harvest_cost: Decimal,
}

/// Result of a profitability estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitabilityReport {
    pub total_cost_per_acre: Decimal,
    pub yield_tons_per_acre: Decimal,
    pub yield_quintals_per_acre: Decimal,
    /// Market price after quality and organic premiums
    pub adjusted_price: Decimal,
    /// Adjusted price after storage and processing benefits
    pub final_price: Decimal,
    pub base: ScenarioSummary,
    pub strategic: ScenarioSummary,
    pub strategy: StrategyBreakdown,
    pub channels: Vec<ChannelQuote>,
}

/// Where the harvest is sold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarketingChannel {
    Local,
    Wholesale,
    DirectToConsumer,
    Export,
}

impl MarketingChannel {
    pub fn all() -> [MarketingChannel; 4] {
        [
            MarketingChannel::Local,
            MarketingChannel::Wholesale,
            MarketingChannel::DirectToConsumer,
            MarketingChannel::Export,
        ]
    }

    /// Price multiplier relative to the strategic final price
    pub fn price_multiplier(&self) -> Decimal {
        match self {
            MarketingChannel::Local => Decimal::new(9, 1),
            MarketingChannel::Wholesale => Decimal::ONE,
            MarketingChannel::DirectToConsumer => Decimal::new(13, 1),
            MarketingChannel::Export => Decimal::new(15, 1),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketingChannel::Local => "Local Market",
            MarketingChannel::Wholesale => "Wholesale Market",
            MarketingChannel::DirectToConsumer => "Direct to Consumer",
            MarketingChannel::Export => "Export Market",
        }
    }

    pub fn risk(&self) -> &'static str {
        match self {
            MarketingChannel::Local => "Low",
            MarketingChannel::Wholesale => "Medium",
            MarketingChannel::DirectToConsumer => "Medium-High",
            MarketingChannel::Export => "High",
        }
    }

    pub fn requirements(&self) -> &'static str {
        match self {
            MarketingChannel::Local => "Basic quality, no certification needed",
            MarketingChannel::Wholesale => "Standard quality, consistent supply",
            MarketingChannel::DirectToConsumer => "High quality, packaging, marketing",
            MarketingChannel::Export => "Certifications, highest quality, consistent volume",
        }
    }

    pub fn advantages(&self) -> &'static str {
        match self {
            MarketingChannel::Local => "Immediate payment, no transportation",
            MarketingChannel::Wholesale => "Higher volume sales, established channel",
            MarketingChannel::DirectToConsumer => "Best prices, direct customer relationships",
            MarketingChannel::Export => "Premium prices, large volume potential",
        }
    }

    pub fn disadvantages(&self) -> &'static str {
        match self {
            MarketingChannel::Local => "Lower prices, limited volume",
            MarketingChannel::Wholesale => "Price fluctuations, delayed payments possible",
            MarketingChannel::DirectToConsumer => "Time-consuming, requires marketing",
            MarketingChannel::Export => "Complex regulations, high entry barriers",
        }
    }

    /// Quote for this channel given the strategic final price
    pub fn quote(&self, final_price: Decimal) -> ChannelQuote {
        ChannelQuote {
            channel: *self,
            label: self.label().to_string(),
            expected_price: final_price * self.price_multiplier(),
            risk: self.risk().to_string(),
            requirements: self.requirements().to_string(),
            advantages: self.advantages().to_string(),
            disadvantages: self.disadvantages().to_string(),
        }
    }
}

/// Expected price and trade-offs of one marketing channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelQuote {
    pub channel: MarketingChannel,
    pub label: String,
    pub expected_price: Decimal,
    pub risk: String,
    pub requirements: String,
    pub advantages: String,
    pub disadvantages: String,
}

/// Quotes for every marketing channel, in display order
pub fn channel_quotes(final_price: Decimal) -> Vec<ChannelQuote> {
    MarketingChannel::all()
        .iter()
        .map(|c| c.quote(final_price))
        .collect()
}

/// Estimate base and strategic profitability.
///
/// Steps run in a fixed order: cost per acre, yield conversion, base scenario,
/// premium chain (quality, organic, storage, processing), post-harvest costs,
/// strategic scenario. Inputs are not validated here.
pub fn compute_profitability(input: &ProfitabilityInput) -> ProfitabilityReport {
    let area = input.land_area_acres;

    let total_cost_per_acre = input.costs.total();
    let yield_tons_per_acre = input.expected_yield_per_hectare / acres_per_hectare();
    let yield_quintals_per_acre = yield_tons_per_acre * quintals_per_ton();

    let base_revenue = input.market_price * yield_quintals_per_acre * area;
    let base_cost = total_cost_per_acre * area;
    let base = ScenarioSummary::from_totals(base_revenue, base_cost);

    let adjusted_price = input.market_price
        * percent_factor(input.quality_premium_pct)
        * percent_factor(input.organic_premium_pct);
    let final_price = adjusted_price
        * percent_factor(input.storage_strategy.price_benefit_pct())
        * percent_factor(input.processing_level.price_benefit_pct());

    let storage_cost = input.storage_strategy.cost_per_acre() * area;
    let processing_cost = input.processing_level.cost_per_acre() * area;
    let total_post_harvest_cost = storage_cost + processing_cost;

    let adjusted_revenue = final_price * yield_quintals_per_acre * area;
    let adjusted_total_cost = base_cost + total_post_harvest_cost;
    let strategic = ScenarioSummary::from_totals(adjusted_revenue, adjusted_total_cost);

    ProfitabilityReport {
        total_cost_per_acre,
        yield_tons_per_acre,
        yield_quintals_per_acre,
        adjusted_price,
        final_price,
        base,
        strategic,
        strategy: StrategyBreakdown {
            storage_strategy: input.storage_strategy,
            storage_label: input.storage_strategy.label().to_string(),
            storage_description: input.storage_strategy.description().to_string(),
            storage_cost,
            processing_level: input.processing_level,
            processing_label: input.processing_level.label().to_string(),
            processing_description: input.processing_level.description().to_string(),
            processing_cost,
            total_post_harvest_cost,
        },
        channels: channel_quotes(final_price),
    }
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
            market_price: Decimal::from(2000),
            expected_yield_per_hectare: Decimal::from(3),
            land_area_acres: Decimal::from(5),
            quality_premium_pct: Decimal::ZERO,
            organic_premium_pct: Decimal::ZERO,
            costs: CostBreakdown::default(),
            storage_strategy: StorageStrategy::Immediate,
            processing_level: ProcessingLevel::None,
        }
    }

    #[test]
    fn test_default_costs_sum() {
        assert_eq!(CostBreakdown::default().total(), Decimal::from(14500));
    }

    #[test]
    fn test_wheat_base_scenario() {
        let report = compute_profitability(&wheat_input());

        assert!((report.yield_quintals_per_acre - dec("12.146")).abs() < dec("0.001"));
        assert!((report.base.revenue - dec("121457.49")).abs() < dec("0.01"));
        assert_eq!(report.base.cost, Decimal::from(72500));
        assert!((report.base.profit - dec("48957.49")).abs() < dec("0.01"));
        assert!(report.base.is_profitable);
        // Without a strategy both scenarios agree
        assert!((report.base.revenue - report.strategic.revenue).abs() < dec("0.0001"));
        assert_eq!(report.base.cost, report.strategic.cost);
    }

    #[test]
    fn test_advanced_processing_cost_and_price() {
        let mut input = wheat_input();
        input.processing_level = ProcessingLevel::Advanced;
        let report = compute_profitability(&input);

        assert_eq!(report.strategy.processing_cost, Decimal::from(20000));
        assert_eq!(report.strategy.total_post_harvest_cost, Decimal::from(20000));
        assert_eq!(report.final_price, Decimal::from(2700));
        assert_eq!(report.strategic.cost, Decimal::from(92500));
    }

    #[test]
    fn test_premium_chain_order() {
        let mut input = wheat_input();
        input.quality_premium_pct = Decimal::from(10);
        input.organic_premium_pct = Decimal::from(20);
        input.storage_strategy = StorageStrategy::ShortTerm;
        input.processing_level = ProcessingLevel::Basic;
        let report = compute_profitability(&input);

        // 2000 * 1.10 * 1.20
        assert_eq!(report.adjusted_price, Decimal::from(2640));
        // 2640 * 1.05 * 1.15
        assert_eq!(report.final_price, dec("3187.8"));
        assert_eq!(report.strategy.storage_cost, Decimal::from(1000));
        assert_eq!(report.strategy.processing_cost, Decimal::from(7500));
    }

    #[test]
    fn test_zero_guards() {
        let mut input = wheat_input();
        input.market_price = Decimal::ZERO;
        input.costs = CostBreakdown {
            seed: Decimal::ZERO,
            fertilizer: Decimal::ZERO,
            labor: Decimal::ZERO,
            transport: Decimal::ZERO,
            other: Decimal::ZERO,
        };
        let report = compute_profitability(&input);

        assert_eq!(report.strategic.revenue, Decimal::ZERO);
        assert_eq!(report.strategic.cost, Decimal::ZERO);
        assert_eq!(report.strategic.margin_pct, Decimal::ZERO);
        assert_eq!(report.strategic.roi_pct, Decimal::ZERO);
        assert!(!report.strategic.is_profitable);
    }

    #[test]
    fn test_costly_strategy_reports_loss() {
        let mut input = wheat_input();
        input.market_price = Decimal::from(500);
        input.processing_level = ProcessingLevel::Advanced;
        let report = compute_profitability(&input);

        assert!(report.strategic.profit < Decimal::ZERO);
        assert!(!report.strategic.is_profitable);
    }

    #[test]
    fn test_channel_multipliers() {
        let quotes = channel_quotes(Decimal::from(1000));
        let prices: Vec<Decimal> = quotes.iter().map(|q| q.expected_price).collect();
        assert_eq!(
            prices,
            vec![
                Decimal::from(900),
                Decimal::from(1000),
                Decimal::from(1300),
                Decimal::from(1500)
            ]
        );
        assert_eq!(quotes[3].label, "Export Market");
    }

    #[test]
    fn test_strategy_labels_deserialize() {
        let level: ProcessingLevel = serde_json::from_str("\"Advanced Processing\"").unwrap();
        assert_eq!(level, ProcessingLevel::Advanced);
        let storage: StorageStrategy = serde_json::from_str("\"short_term\"").unwrap();
        assert_eq!(storage, StorageStrategy::ShortTerm);
    }
}
