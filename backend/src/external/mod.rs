//! External API integrations

pub mod chat;
pub mod classifier;
pub mod market;
pub mod weather;

pub use chat::ChatClient;
pub use classifier::{CropClassifier, LinearCropModel};
pub use market::MarketPriceClient;
pub use weather::WeatherClient;
