//! Agricultural Advisory Platform - Backend Server
//!
//! Crop recommendations, market prices and forecasts, profitability
//! estimates, weather advisories and a farming chat assistant.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use external::{ChatClient, CropClassifier, LinearCropModel, MarketPriceClient, WeatherClient};
use services::{
    AgribotService, MarketService, ProfitabilityService, RecommendationService, WeatherService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub integrations: models::Integrations,
    pub market: MarketService,
    pub recommendation: RecommendationService,
    pub profitability: ProfitabilityService,
    pub weather: WeatherService,
    pub agribot: AgribotService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Agricultural Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    let state = build_state(config)?;

    // Build application
    let app = create_app(state.clone());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wire external clients and services from configuration.
///
/// Missing API keys and an unreadable classifier disable their feature only.
fn build_state(config: Config) -> anyhow::Result<AppState> {
    let market_client = match &config.market.api_endpoint {
        Some(endpoint) => Some(MarketPriceClient::new(
            endpoint.clone(),
            config.market.timeout(),
        )?),
        None => {
            tracing::info!("No market price feed configured; quotes will be simulated");
            None
        }
    };

    let weather_client = match &config.weather.api_key {
        Some(key) => Some(WeatherClient::new(
            key.clone(),
            config.weather.api_endpoint.clone(),
            config.weather.timeout(),
        )?),
        None => {
            tracing::warn!("No weather API key configured");
            None
        }
    };

    let chat_client = match &config.chat.api_key {
        Some(key) => Some(ChatClient::new(
            key.clone(),
            config.chat.api_endpoint.clone(),
            config.chat.model.clone(),
            config.chat.timeout(),
        )?),
        None => {
            tracing::warn!("No chat API key configured");
            None
        }
    };

    let classifier: Option<Arc<dyn CropClassifier>> = match LinearCropModel::load(&config.model.path)
    {
        Ok(model) => {
            tracing::info!(
                "Loaded crop classifier with {} labels from {}",
                model.labels.len(),
                config.model.path
            );
            Some(Arc::new(model))
        }
        Err(e) => {
            tracing::error!("Crop recommendations disabled: {}", e);
            None
        }
    };

    let integrations = models::Integrations {
        market_feed: market_client.is_some(),
        weather: weather_client.is_some(),
        chat: chat_client.is_some(),
        classifier: classifier.is_some(),
    };

    Ok(AppState {
        config: Arc::new(config),
        integrations,
        market: MarketService::new(market_client),
        recommendation: RecommendationService::new(classifier),
        profitability: ProfitabilityService::new(),
        weather: WeatherService::new(weather_client),
        agribot: AgribotService::new(chat_client),
    })
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Agricultural Advisory Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
