//! Crop catalog models

use serde::{Deserialize, Serialize};

/// Month used when a crop has no configured peak season
pub const DEFAULT_PEAK_MONTH: u32 = 6;

/// Placeholder shown for catalog attributes a crop does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// Price band a crop falls into when its market price has to be simulated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceCategory {
    /// Rice, wheat, maize
    Staple,
    /// Potato, onion, tomato
    Vegetable,
    /// Coffee, turmeric, chilli
    HighValue,
    Other,
}

impl PriceCategory {
    /// Uniform range (upper bound exclusive) of simulated base prices, per quintal
    pub fn base_price_range(&self) -> std::ops::Range<i64> {
        match self {
            PriceCategory::Staple => 1800..2800,
            PriceCategory::Vegetable => 1200..3500,
            PriceCategory::HighValue => 6000..12000,
            PriceCategory::Other => 2000..6000,
        }
    }
}

/// Agronomic and market profile of a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub name: String,
    pub best_season: String,
    pub required_nutrients: String,
    /// Yield range as text, e.g. "3-4 tons/ha"
    pub expected_yield: String,
    pub growth_period: String,
    pub market_trend: String,
    pub future_outlook: String,
    pub export_potential: String,
    /// Commodity code on the market price feed, when it differs from the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_code: Option<String>,
    /// Month (1-12) of the harvest peak, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_month: Option<u32>,
    pub price_category: PriceCategory,
}

impl CropProfile {
    /// Code used to look the crop up on the market price feed
    pub fn commodity_code(&self) -> String {
        self.api_code
            .clone()
            .unwrap_or_else(|| self.name.to_uppercase())
    }

    /// Harvest peak month, falling back to mid-year
    pub fn peak_month(&self) -> u32 {
        self.peak_month.unwrap_or(DEFAULT_PEAK_MONTH)
    }

    /// Lower bound of the expected yield range in tons per hectare
    pub fn min_expected_yield(&self) -> Option<f64> {
        parse_min_yield(&self.expected_yield)
    }

    /// Encyclopedia link for the crop
    pub fn reference_url(&self) -> String {
        reference_url(&self.name)
    }
}

/// Encyclopedia link for any crop label, including ones outside the catalog
pub fn reference_url(name: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", name.replace(' ', "_"))
}

/// Parse the number before the first '-' of a yield range ("1.5-2.5 tons/ha" -> 1.5)
pub fn parse_min_yield(text: &str) -> Option<f64> {
    let head = text.split('-').next()?;
    let number: String = head
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    number.parse().ok()
}

struct CatalogEntry {
    name: &'static str,
    best_season: &'static str,
    required_nutrients: &'static str,
    expected_yield: &'static str,
    growth_period: &'static str,
    market_trend: &'static str,
    future_outlook: &'static str,
    export_potential: &'static str,
    api_code: Option<&'static str>,
    peak_month: Option<u32>,
    price_category: PriceCategory,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Wheat",
        best_season: "Winter",
        required_nutrients: "High Nitrogen",
        expected_yield: "3-4 tons/ha",
        growth_period: "120-150 days",
        market_trend: "Stable with seasonal variations",
        future_outlook: "Strong demand due to staple food status",
        export_potential: "High",
        api_code: Some("WHEAT"),
        peak_month: Some(4),
        price_category: PriceCategory::Staple,
    },
    CatalogEntry {
        name: "Rice",
        best_season: "Monsoon",
        required_nutrients: "High Phosphorus",
        expected_yield: "4-6 tons/ha",
        growth_period: "90-120 days",
        market_trend: "Consistently high demand",
        future_outlook: "Increasing with population growth",
        export_potential: "Medium-High",
        api_code: Some("RICE"),
        peak_month: Some(11),
        price_category: PriceCategory::Staple,
    },
    CatalogEntry {
        name: "Maize",
        best_season: "Summer",
        required_nutrients: "Balanced NPK",
        expected_yield: "5-7 tons/ha",
        growth_period: "90-120 days",
        market_trend: "Growing for feed and biofuel",
        future_outlook: "Strong growth expected",
        export_potential: "Medium",
        api_code: Some("MAIZE"),
        peak_month: Some(9),
        price_category: PriceCategory::Staple,
    },
    CatalogEntry {
        name: "Sugarcane",
        best_season: "Tropical",
        required_nutrients: "High Potassium",
        expected_yield: "80-100 tons/ha",
        growth_period: "10-12 months",
        market_trend: "Stable with policy influences",
        future_outlook: "Moderate growth with biofuel demand",
        export_potential: "Low (processed products high)",
        api_code: None,
        peak_month: None,
        price_category: PriceCategory::Other,
    },
    CatalogEntry {
        name: "Barley",
        best_season: "Winter",
        required_nutrients: "Moderate Nitrogen",
        expected_yield: "2-3 tons/ha",
        growth_period: "80-100 days",
        market_trend: "Growing with craft beer popularity",
        future_outlook: "Positive for malting varieties",
        export_potential: "Medium",
        api_code: None,
        peak_month: None,
        price_category: PriceCategory::Other,
    },
    CatalogEntry {
        name: "Soybean",
        best_season: "Monsoon",
        required_nutrients: "High Phosphorus",
        expected_yield: "2-4 tons/ha",
        growth_period: "100-120 days",
        market_trend: "Strong for protein source",
        future_outlook: "Very positive with plant protein demand",
        export_potential: "High",
        api_code: None,
        peak_month: None,
        price_category: PriceCategory::Other,
    },
    CatalogEntry {
        name: "Cotton",
        best_season: "Summer",
        required_nutrients: "Balanced NPK",
        expected_yield: "2-3 tons/ha",
        growth_period: "150-180 days",
        market_trend: "Cyclical with fashion industry",
        future_outlook: "Stable with synthetic competition",
        export_potential: "High",
        api_code: None,
        peak_month: None,
        price_category: PriceCategory::Other,
    },
    CatalogEntry {
        name: "Potato",
        best_season: "Winter/Cool",
        required_nutrients: "High Potassium",
        expected_yield: "20-30 tons/ha",
        growth_period: "90-120 days",
        market_trend: "Stable staple food",
        future_outlook: "Consistent demand expected",
        export_potential: "Medium (processed products high)",
        api_code: None,
        peak_month: Some(2),
        price_category: PriceCategory::Vegetable,
    },
    CatalogEntry {
        name: "Tomato",
        best_season: "Spring/Summer",
        required_nutrients: "Balanced with Calcium",
        expected_yield: "40-60 tons/ha",
        growth_period: "90-150 days",
        market_trend: "High demand with price volatility",
        future_outlook: "Growing with processed foods",
        export_potential: "Medium-High (seasonal)",
        api_code: None,
        peak_month: Some(7),
        price_category: PriceCategory::Vegetable,
    },
    CatalogEntry {
        name: "Onion",
        best_season: "Winter/Spring",
        required_nutrients: "Balanced NPK",
        expected_yield: "30-40 tons/ha",
        growth_period: "100-150 days",
        market_trend: "Essential with price volatility",
        future_outlook: "Stable with seasonal fluctuations",
        export_potential: "Medium",
        api_code: None,
        peak_month: Some(5),
        price_category: PriceCategory::Vegetable,
    },
    CatalogEntry {
        name: "Groundnut",
        best_season: "Summer/Monsoon",
        required_nutrients: "High Phosphorus & Calcium",
        expected_yield: "1.5-2.5 tons/ha",
        growth_period: "120-150 days",
        market_trend: "Growing for oil and snacks",
        future_outlook: "Positive with health food trends",
        export_potential: "Medium-High",
        api_code: None,
        peak_month: None,
        price_category: PriceCategory::Other,
    },
    CatalogEntry {
        name: "Mustard",
        best_season: "Winter",
        required_nutrients: "Moderate Nitrogen & Sulfur",
        expected_yield: "1-1.5 tons/ha",
        growth_period: "110-150 days",
        market_trend: "Strong for oil production",
        future_outlook: "Stable with health food trends",
        export_potential: "Medium",
        api_code: Some("MUSTARD"),
        peak_month: None,
        price_category: PriceCategory::Other,
    },
    CatalogEntry {
        name: "Turmeric",
        best_season: "Summer",
        required_nutrients: "High Organic Matter",
        expected_yield: "5-7 tons/ha",
        growth_period: "210-300 days",
        market_trend: "Growing with health benefits awareness",
        future_outlook: "Positive due to medicinal value",
        export_potential: "High",
        api_code: Some("TURMERIC"),
        peak_month: Some(3),
        price_category: PriceCategory::HighValue,
    },
    CatalogEntry {
        name: "Chilli",
        best_season: "Summer/Monsoon",
        required_nutrients: "Balanced with Calcium",
        expected_yield: "2-3 tons/ha",
        growth_period: "120-150 days",
        market_trend: "Stable with price spikes",
        future_outlook: "Growing with food processing",
        export_potential: "High",
        api_code: Some("CHILLI"),
        peak_month: Some(8),
        price_category: PriceCategory::HighValue,
    },
    CatalogEntry {
        name: "Jute",
        best_season: "Spring/Summer",
        required_nutrients: "High Nitrogen",
        expected_yield: "2-3.5 tons/ha",
        growth_period: "100-120 days",
        market_trend: "Declining with synthetics, growing with eco-awareness",
        future_outlook: "Potential growth with eco-friendly products",
        export_potential: "Medium",
        api_code: Some("JUTE"),
        peak_month: None,
        price_category: PriceCategory::Other,
    },
    CatalogEntry {
        name: "Coffee",
        best_season: "Tropical year-round",
        required_nutrients: "High Potassium",
        expected_yield: "1-2 tons/ha",
        growth_period: "3-4 years to first yield",
        market_trend: "High demand with price volatility",
        future_outlook: "Premium varieties growth",
        export_potential: "Very High",
        api_code: Some("COFFEE"),
        peak_month: Some(1),
        price_category: PriceCategory::HighValue,
    },
    CatalogEntry {
        name: "Mango",
        best_season: "Summer",
        required_nutrients: "Balanced NPK",
        expected_yield: "10-15 tons/ha",
        growth_period: "3-4 years to first yield",
        market_trend: "Strong seasonal demand",
        future_outlook: "Growing export potential",
        export_potential: "High",
        api_code: Some("MANGO"),
        peak_month: None,
        price_category: PriceCategory::Other,
    },
];

impl From<&CatalogEntry> for CropProfile {
    fn from(e: &CatalogEntry) -> Self {
        CropProfile {
            name: e.name.to_string(),
            best_season: e.best_season.to_string(),
            required_nutrients: e.required_nutrients.to_string(),
            expected_yield: e.expected_yield.to_string(),
            growth_period: e.growth_period.to_string(),
            market_trend: e.market_trend.to_string(),
            future_outlook: e.future_outlook.to_string(),
            export_potential: e.export_potential.to_string(),
            api_code: e.api_code.map(str::to_string),
            peak_month: e.peak_month,
            price_category: e.price_category,
        }
    }
}

/// All crops known to the demand analysis, in display order
pub fn crop_catalog() -> Vec<CropProfile> {
    CATALOG.iter().map(CropProfile::from).collect()
}

/// Look a crop up by name, ignoring case and surrounding whitespace
pub fn find_crop(name: &str) -> Option<CropProfile> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .map(CropProfile::from)
}
