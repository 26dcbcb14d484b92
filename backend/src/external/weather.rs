//! Weather API client for fetching current conditions
//!
//! Integrates with the WeatherStack API (`/current?access_key=&query=`)

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::WeatherReport;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherStack response for current weather.
/// A failed lookup carries `error` instead of `current`, usually with a 200 status.
#[derive(Debug, Deserialize)]
struct WSResponse {
    current: Option<WSCurrent>,
    location: Option<WSLocation>,
    error: Option<WSError>,
}

#[derive(Debug, Deserialize)]
struct WSCurrent {
    temperature: f64,
    humidity: i32,
    precip: Option<f64>,
    wind_speed: f64,
    uv_index: i32,
    pressure: i32,
}

#[derive(Debug, Deserialize)]
struct WSLocation {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WSError {
    info: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions for a free-text location
    pub async fn get_current_weather(&self, location: &str) -> AppResult<WeatherReport> {
        let url = format!("{}/current", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("access_key", self.api_key.as_str()), ("query", location)])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the access key
                let e = e.without_url();
                tracing::warn!(error = %e, "Weather request failed");
                AppError::WeatherServiceUnavailable(format!("request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherServiceUnavailable(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: WSResponse = response.json().await.map_err(|e| {
            AppError::WeatherServiceUnavailable(format!(
                "failed to parse response: {}",
                e.without_url()
            ))
        })?;

        convert_current_response(location, data)
    }
}

/// Convert a WeatherStack response to our format
fn convert_current_response(location: &str, data: WSResponse) -> AppResult<WeatherReport> {
    let Some(current) = data.current else {
        let reason = data
            .error
            .and_then(|e| e.info)
            .unwrap_or_else(|| "no current conditions in response".to_string());
        return Err(AppError::WeatherServiceUnavailable(reason));
    };

    let location = data
        .location
        .and_then(|l| l.name)
        .unwrap_or_else(|| location.to_string());

    Ok(WeatherReport {
        location,
        temperature_celsius: Decimal::from_f64_retain(current.temperature).unwrap_or_default(),
        humidity_percent: current.humidity,
        precipitation_mm: current
            .precip
            .map(|v| Decimal::from_f64_retain(v).unwrap_or_default()),
        wind_speed_kmh: Decimal::from_f64_retain(current.wind_speed).unwrap_or_default(),
        uv_index: current.uv_index,
        pressure_mb: current.pressure,
    })
}
