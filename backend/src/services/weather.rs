//! Weather monitoring service

use shared::{validate_location, weather_advisories, WeatherInsight};

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

/// Weather service
#[derive(Clone)]
pub struct WeatherService {
    weather_client: Option<WeatherClient>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(weather_client: Option<WeatherClient>) -> Self {
        Self { weather_client }
    }

    /// Current conditions at a location with crop-care advisories
    pub async fn current_insight(&self, location: &str) -> AppResult<WeatherInsight> {
        validate_location(location).map_err(|e| AppError::invalid("location", e))?;

        let client = self.weather_client.as_ref().ok_or_else(|| {
            AppError::WeatherServiceUnavailable("no weather API key configured".to_string())
        })?;

        let report = client.get_current_weather(location.trim()).await?;
        let advisories = weather_advisories(&report);

        tracing::debug!(
            location = %report.location,
            advisories = advisories.len(),
            "Fetched current weather"
        );

        Ok(WeatherInsight { report, advisories })
    }
}
