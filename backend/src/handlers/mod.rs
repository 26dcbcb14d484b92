//! HTTP request handlers

pub mod agribot;
pub mod crops;
pub mod health;
pub mod market;
pub mod profitability;
pub mod recommendation;
pub mod weather;

pub use agribot::*;
pub use crops::*;
pub use health::*;
pub use market::*;
pub use profitability::*;
pub use recommendation::*;
pub use weather::*;
