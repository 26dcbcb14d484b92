//! Business logic services for the agricultural advisory server

pub mod agribot;
pub mod market;
pub mod profitability;
pub mod recommendation;
pub mod weather;

pub use agribot::AgribotService;
pub use market::MarketService;
pub use profitability::ProfitabilityService;
pub use recommendation::RecommendationService;
pub use weather::WeatherService;
