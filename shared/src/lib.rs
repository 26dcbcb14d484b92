//! Shared types and calculations for the agricultural advisory platform
//!
//! This crate contains the pure domain logic shared between the backend
//! server and the browser (via WASM): crop catalog, synthetic price series,
//! profitability estimates and input validation.

pub mod models;
pub mod pricing;
pub mod types;
pub mod validation;

pub use models::*;
pub use pricing::*;
pub use types::*;
pub use validation::*;
