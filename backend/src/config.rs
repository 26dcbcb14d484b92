//! Configuration management for the agricultural advisory server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Market price feed configuration
    pub market: MarketConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Chat model configuration
    pub chat: ChatConfig,

    /// Crop classifier configuration
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketConfig {
    /// Price feed endpoint; prices are simulated when unset
    pub api_endpoint: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API access key
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// Generative language API endpoint
    pub api_endpoint: String,

    /// Chat API key
    pub api_key: Option<String>,

    /// Model name
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the crop classifier artifact (JSON)
    pub path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("market.timeout_secs", 5)?
            .set_default("weather.api_endpoint", "http://api.weatherstack.com")?
            .set_default("weather.timeout_secs", 10)?
            .set_default(
                "chat.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("chat.model", "gemini-1.5-flash")?
            .set_default("chat.timeout_secs", 30)?
            .set_default("model.path", "models/crop_classifier.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every outbound request fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timeouts = [
            ("market.timeout_secs", self.market.timeout_secs),
            ("weather.timeout_secs", self.weather.timeout_secs),
            ("chat.timeout_secs", self.chat.timeout_secs),
        ];
        for (key, secs) in timeouts {
            if secs == 0 {
                return Err(ConfigError::Message(format!(
                    "{} must be at least 1 second",
                    key
                )));
            }
        }
        Ok(())
    }
}

impl MarketConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ChatConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
